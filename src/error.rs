use std::convert::Infallible;

use serde::Serialize;
use thiserror::Error;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("plant not found")]
    NotFound,
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl warp::reject::Reject for ApiError {}

/// JSON error body; the only body schema failures promise.
#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

/// Turns rejections into JSON replies with the right status code.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if let Some(api) = err.find::<ApiError>() {
        match api {
            ApiError::NotFound => (StatusCode::NOT_FOUND, api.to_string()),
            ApiError::Pool(_) | ApiError::Database(_) | ApiError::Internal(_) => {
                tracing::error!(error = %api, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        }
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_string())
    } else {
        tracing::error!(?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    };

    let body = warp::reply::json(&ErrorBody {
        code: status.as_u16(),
        message,
    });
    Ok(warp::reply::with_status(body, status))
}
