mod availability;
mod get_by_type;

use warp::Filter;

pub fn api_vehicle() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("vehicles")
        .and(get_by_type::main().or(availability::main()))
        .and(warp::path::end())
}
