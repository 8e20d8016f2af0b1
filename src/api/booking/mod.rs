mod create;

use warp::Filter;

pub fn api_booking() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("bookings")
        .and(create::main())
        .and(warp::path::end())
}
