use chrono::Utc;
use warp::Filter;
use warp::http::StatusCode;
use warp::reply::with_status;

pub fn main() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move || async move {
            let msg = serde_json::json!({"status": "OK", "timestamp": Utc::now().to_rfc3339()});
            Ok::<_, warp::Rejection>((with_status(warp::reply::json(&msg), StatusCode::OK),))
        })
}
