//! Request boundary: panic recovery and rejection mapping

use std::any::Any;
use std::convert::Infallible;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::warn;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Rejection, Reply};

use super::error::ApiError;

/// Run a handler future, turning a panic into a `500` response
///
/// The panicking request gets an opaque error; the server keeps serving.
pub async fn guard<F, R>(handler: F) -> Result<Response, Infallible>
where
    F: Future<Output = Result<R, Infallible>>,
    R: Reply,
{
    match AssertUnwindSafe(handler).catch_unwind().await {
        Ok(Ok(reply)) => Ok(reply.into_response()),
        Ok(Err(never)) => match never {},
        Err(panic) => Ok(ApiError::internal(
            "Internal server error",
            format!("handler panicked: {}", panic_message(panic.as_ref())),
        )
        .into_response()),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Map routing rejections (unknown path, wrong method, oversized body) to responses
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let api_error = if err.is_not_found() {
        ApiError::new(StatusCode::NOT_FOUND, "Not found", "no route matched")
    } else if let Some(e) = err.find::<warp::reject::MethodNotAllowed>() {
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", e.to_string())
    } else if let Some(e) = err.find::<warp::reject::LengthRequired>() {
        ApiError::new(StatusCode::LENGTH_REQUIRED, "Content length required", e.to_string())
    } else if let Some(e) = err.find::<warp::reject::PayloadTooLarge>() {
        ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large", e.to_string())
    } else if let Some(e) = err.find::<warp::reject::InvalidHeader>() {
        ApiError::bad_request("Invalid header", e.to_string())
    } else {
        warn!("Unhandled rejection: {:?}", err);
        ApiError::internal("Internal server error", format!("{:?}", err))
    };

    Ok(api_error.into_response())
}
