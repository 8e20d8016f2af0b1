use crate::model::VehicleType;
use crate::{POOL, methods, schema};
use diesel::RunQueryDsl;
use warp::Filter;
use warp::http::StatusCode;

pub fn main() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path::end().and(warp::get()).and_then(move || async move {
        use schema::vehicle_types::dsl::*;
        let Ok(mut conn) = POOL.get() else {
            return methods::standard_replies::internal_server_error_response();
        };
        match vehicle_types.load::<VehicleType>(&mut conn) {
            Ok(results) => methods::standard_replies::response_with_obj(results, StatusCode::OK),
            Err(e) => {
                log::error!("Error fetching vehicle types: {:?}", e);
                methods::standard_replies::internal_server_error_response()
            }
        }
    })
}
