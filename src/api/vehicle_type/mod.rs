mod get_all;
mod get_by_wheels;

use warp::Filter;

pub fn api_vehicle_type()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("vehicle-types")
        .and(get_all::main().or(get_by_wheels::main()))
        .and(warp::path::end())
}
