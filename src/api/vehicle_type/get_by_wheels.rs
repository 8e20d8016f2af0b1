use crate::model::VehicleType;
use crate::{POOL, methods, schema};
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use warp::Filter;
use warp::http::StatusCode;

pub fn main() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path::param::<String>()
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move |wheels_param: String| async move {
            // Bikes have 2 wheels, cars have 4. Anything else is a bad request,
            // including segments that are not numbers at all.
            let wheel_count = wheels_param.parse::<i32>().unwrap_or(0);
            if wheel_count != 2 && wheel_count != 4 {
                return methods::standard_replies::bad_request("Wheels must be 2 or 4");
            }

            use schema::vehicle_types::dsl::*;
            let Ok(mut conn) = POOL.get() else {
                return methods::standard_replies::internal_server_error_response();
            };
            match vehicle_types
                .filter(wheels.eq(wheel_count))
                .load::<VehicleType>(&mut conn)
            {
                Ok(results) => methods::standard_replies::response_with_obj(results, StatusCode::OK),
                Err(e) => {
                    log::error!("Error fetching vehicle types: {:?}", e);
                    methods::standard_replies::internal_server_error_response()
                }
            }
        })
}
