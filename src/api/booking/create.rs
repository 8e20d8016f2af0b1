use crate::helper_model::{BookingCreatedResponse, BookingReceipt, FieldError};
use crate::methods::booking::{BookingError, BookingRequest};
use crate::{POOL, methods};
use chrono::{NaiveDate, Utc};
use serde_derive::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use warp::Filter;
use warp::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookingData {
    first_name: String,
    last_name: String,
    // The wizard sends its earlier steps along with the final submit.
    wheels: i32,
    vehicle_type_id: i32,
    vehicle_id: i32,
    start_date: String,
    end_date: String,
}

fn name_error(field: &str, label: &str, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError {
            field: field.to_string(),
            message: format!("{} is required", label),
        })
    } else if value.chars().count() > 50 {
        Some(FieldError {
            field: field.to_string(),
            message: format!("{} too long", label),
        })
    } else {
        None
    }
}

/// Field-level validation; all violations are reported at once.
/// Returns the parsed rental dates on success.
fn validate_booking(data: &CreateBookingData) -> Result<(NaiveDate, NaiveDate), Vec<FieldError>> {
    let mut details: Vec<FieldError> = Vec::new();

    if let Some(err) = name_error("firstName", "First name", &data.first_name) {
        details.push(err);
    }
    if let Some(err) = name_error("lastName", "Last name", &data.last_name) {
        details.push(err);
    }
    if data.wheels != 2 && data.wheels != 4 {
        details.push(FieldError {
            field: String::from("wheels"),
            message: String::from("Wheels must be 2 or 4"),
        });
    }
    if data.vehicle_type_id <= 0 {
        details.push(FieldError {
            field: String::from("vehicleTypeId"),
            message: String::from("Vehicle type is required"),
        });
    }
    if data.vehicle_id <= 0 {
        details.push(FieldError {
            field: String::from("vehicleId"),
            message: String::from("Vehicle is required"),
        });
    }

    let start_date = methods::booking::parse_iso_date(&data.start_date);
    let today = Utc::now().date_naive();
    match start_date {
        Some(start) if start >= today => {}
        _ => details.push(FieldError {
            field: String::from("startDate"),
            message: String::from("Start date must be today or in the future"),
        }),
    }

    let end_date = methods::booking::parse_iso_date(&data.end_date);
    if end_date.is_none() {
        details.push(FieldError {
            field: String::from("endDate"),
            message: String::from("End date must be a valid date"),
        });
    }

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end <= start {
            details.push(FieldError {
                field: String::from("endDate"),
                message: String::from("End date must be after start date"),
            });
        }
    }

    if details.is_empty() {
        // Both dates parsed or we would have pushed an error above.
        Ok((start_date.unwrap(), end_date.unwrap()))
    } else {
        Err(details)
    }
}

pub fn main() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: CreateBookingData| async move {
            let (start_date, end_date) = match validate_booking(&body) {
                Ok(dates) => dates,
                Err(details) => return methods::standard_replies::validation_failed(details),
            };

            let request = BookingRequest {
                first_name: body.first_name,
                last_name: body.last_name,
                vehicle_id: body.vehicle_id,
                start_date,
                end_date,
            };
            let created = spawn_blocking(move || {
                let mut conn = POOL.get().map_err(BookingError::Pool)?;
                methods::booking::create_booking(&mut conn, request)
            })
            .await;

            match created {
                Ok(Ok((booking, vehicle, days))) => {
                    let reply = BookingCreatedResponse {
                        success: true,
                        booking: BookingReceipt {
                            booking,
                            vehicle,
                            days,
                        },
                        message: String::from("Booking created successfully"),
                    };
                    methods::standard_replies::response_with_obj(reply, StatusCode::CREATED)
                }
                Ok(Err(BookingError::Unavailable)) => methods::standard_replies::bad_request(
                    "Vehicle is not available for the selected dates",
                ),
                Ok(Err(BookingError::VehicleNotFound)) => {
                    methods::standard_replies::bad_request("Vehicle not found")
                }
                Ok(Err(BookingError::Pool(e))) => {
                    log::error!("Error getting database connection: {:?}", e);
                    methods::standard_replies::internal_server_error_response()
                }
                Ok(Err(BookingError::Database(e))) => {
                    log::error!("Error creating booking: {:?}", e);
                    methods::standard_replies::internal_server_error_response()
                }
                Err(e) => {
                    log::error!("Booking task panicked: {:?}", e);
                    methods::standard_replies::internal_server_error_response()
                }
            }
        })
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn iso(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn valid_body() -> CreateBookingData {
        let today = Utc::now().date_naive();
        CreateBookingData {
            first_name: String::from("Asha"),
            last_name: String::from("Nair"),
            wheels: 4,
            vehicle_type_id: 1,
            vehicle_id: 3,
            start_date: iso(today + Days::new(1)),
            end_date: iso(today + Days::new(4)),
        }
    }

    fn messages_for<'a>(details: &'a [FieldError], field: &str) -> Vec<&'a str> {
        details
            .iter()
            .filter(|d| d.field == field)
            .map(|d| d.message.as_str())
            .collect()
    }

    #[test]
    fn valid_body_passes_and_yields_dates() {
        let body = valid_body();
        let (start, end) = validate_booking(&body).unwrap();
        assert_eq!(crate::methods::booking::rental_days(start, end), 3);
    }

    #[test]
    fn empty_and_overlong_names_are_rejected() {
        let mut body = valid_body();
        body.first_name = String::new();
        body.last_name = "x".repeat(51);
        let details = validate_booking(&body).unwrap_err();
        assert_eq!(
            messages_for(&details, "firstName"),
            vec!["First name is required"]
        );
        assert_eq!(messages_for(&details, "lastName"), vec!["Last name too long"]);
    }

    #[test]
    fn fifty_character_name_is_allowed() {
        let mut body = valid_body();
        body.first_name = "x".repeat(50);
        assert!(validate_booking(&body).is_ok());
    }

    #[test]
    fn three_wheels_are_rejected() {
        let mut body = valid_body();
        body.wheels = 3;
        let details = validate_booking(&body).unwrap_err();
        assert_eq!(messages_for(&details, "wheels"), vec!["Wheels must be 2 or 4"]);
    }

    #[test]
    fn two_wheels_are_allowed() {
        let mut body = valid_body();
        body.wheels = 2;
        assert!(validate_booking(&body).is_ok());
    }

    #[test]
    fn missing_vehicle_selections_are_rejected() {
        let mut body = valid_body();
        body.vehicle_type_id = 0;
        body.vehicle_id = -1;
        let details = validate_booking(&body).unwrap_err();
        assert_eq!(
            messages_for(&details, "vehicleTypeId"),
            vec!["Vehicle type is required"]
        );
        assert_eq!(messages_for(&details, "vehicleId"), vec!["Vehicle is required"]);
    }

    #[test]
    fn start_date_in_the_past_is_rejected() {
        let today = Utc::now().date_naive();
        let mut body = valid_body();
        body.start_date = iso(today - Days::new(1));
        let details = validate_booking(&body).unwrap_err();
        assert_eq!(
            messages_for(&details, "startDate"),
            vec!["Start date must be today or in the future"]
        );
    }

    #[test]
    fn start_date_today_is_allowed() {
        let today = Utc::now().date_naive();
        let mut body = valid_body();
        body.start_date = iso(today);
        body.end_date = iso(today + Days::new(2));
        assert!(validate_booking(&body).is_ok());
    }

    #[test]
    fn end_date_not_after_start_is_rejected() {
        let today = Utc::now().date_naive();
        let mut body = valid_body();
        body.start_date = iso(today + Days::new(3));
        body.end_date = iso(today + Days::new(3));
        let details = validate_booking(&body).unwrap_err();
        assert_eq!(
            messages_for(&details, "endDate"),
            vec!["End date must be after start date"]
        );
    }

    #[test]
    fn malformed_dates_are_rejected_together() {
        let mut body = valid_body();
        body.start_date = String::from("not-a-date");
        body.end_date = String::from("2026/09/04");
        let details = validate_booking(&body).unwrap_err();
        assert_eq!(
            messages_for(&details, "startDate"),
            vec!["Start date must be today or in the future"]
        );
        assert_eq!(
            messages_for(&details, "endDate"),
            vec!["End date must be a valid date"]
        );
    }
}
