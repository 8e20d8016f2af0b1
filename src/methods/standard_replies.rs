use crate::helper_model;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

pub fn bad_request(err_msg: &str) -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        error: err_msg.to_string(),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::BAD_REQUEST,
    )
    .into_response(),))
}

pub fn validation_failed(
    details: Vec<helper_model::FieldError>,
) -> Result<(warp::reply::Response,), Rejection> {
    let msg = helper_model::ValidationErrorResponse {
        error: String::from("Validation failed"),
        details,
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::BAD_REQUEST,
    )
    .into_response(),))
}

pub fn internal_server_error_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        error: String::from("Internal server error"),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .into_response(),))
}

pub fn response_with_obj<T>(
    obj: T,
    status_code: StatusCode,
) -> Result<(warp::reply::Response,), Rejection>
where
    T: serde::Serialize,
{
    Ok((warp::reply::with_status(warp::reply::json(&obj), status_code).into_response(),))
}
