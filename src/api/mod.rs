mod booking;
mod health;
mod vehicle;
mod vehicle_type;

use warp::Filter;

pub fn api() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("api")
        .and(
            vehicle_type::api_vehicle_type()
                .or(vehicle::api_vehicle())
                .or(booking::api_booking())
                .or(health::main()),
        )
        .and(warp::path::end())
}
