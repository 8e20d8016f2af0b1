use crate::helper_model::AvailabilityResponse;
use crate::{POOL, methods};
use serde_derive::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use warp::Filter;
use warp::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityData {
    start_date: Option<String>,
    end_date: Option<String>,
}

pub fn main() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path::param::<i32>()
        .and(warp::path("availability"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |vehicle_id: i32, body: AvailabilityData| async move {
            let (Some(start_raw), Some(end_raw)) = (body.start_date, body.end_date) else {
                return methods::standard_replies::bad_request(
                    "Start date and end date are required",
                );
            };
            let (Some(start_date), Some(end_date)) = (
                methods::booking::parse_iso_date(&start_raw),
                methods::booking::parse_iso_date(&end_raw),
            ) else {
                return methods::standard_replies::bad_request(
                    "Dates must be valid ISO dates (YYYY-MM-DD)",
                );
            };

            let available_result = spawn_blocking(
                move || -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
                    let mut conn = POOL.get()?;
                    let available = methods::booking::vehicle_is_available(
                        &mut conn, vehicle_id, start_date, end_date,
                    )?;
                    Ok(available)
                },
            )
            .await;

            match available_result {
                Ok(Ok(available)) => methods::standard_replies::response_with_obj(
                    AvailabilityResponse { available },
                    StatusCode::OK,
                ),
                Ok(Err(e)) => {
                    log::error!("Error checking availability: {:?}", e);
                    methods::standard_replies::internal_server_error_response()
                }
                Err(e) => {
                    log::error!("Availability task panicked: {:?}", e);
                    methods::standard_replies::internal_server_error_response()
                }
            }
        })
}
