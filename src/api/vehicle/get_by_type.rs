use crate::model::Vehicle;
use crate::{POOL, methods, schema};
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use warp::Filter;
use warp::http::StatusCode;

pub fn main() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("type")
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move |vehicle_type_id: i32| async move {
            use schema::vehicles::dsl::*;
            let Ok(mut conn) = POOL.get() else {
                return methods::standard_replies::internal_server_error_response();
            };
            // Unknown type ids simply yield an empty list.
            match vehicles
                .filter(type_id.eq(vehicle_type_id))
                .load::<Vehicle>(&mut conn)
            {
                Ok(results) => methods::standard_replies::response_with_obj(results, StatusCode::OK),
                Err(e) => {
                    log::error!("Error fetching vehicles: {:?}", e);
                    methods::standard_replies::internal_server_error_response()
                }
            }
        })
}
