//! Mapping of handler failures to HTTP responses

use tracing::error;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::models::ErrorResponse;
use crate::store::StoreError;

/// A failed request: the status and public message go to the caller,
/// `detail` only goes to the log
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, detail)
    }

    pub fn unsupported_media_type(content_type: Option<&str>) -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported content type",
            format!("content-type: {:?}", content_type),
        )
    }

    pub fn not_found(id: &str, err: &StoreError) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("Msg with id {} was not found", id),
            err.to_string(),
        )
    }

    pub fn conflict(id: &str, err: &StoreError) -> Self {
        Self::new(
            StatusCode::CONFLICT,
            format!("CreateMsg request failed, {} is already in use", id),
            err.to_string(),
        )
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, detail)
    }

    /// Log the full error and build the caller-facing response
    pub fn into_response(self) -> Response {
        error!(
            status = self.status.as_u16(),
            detail = %self.detail,
            "{}; returned code {}",
            self.message,
            self.status
        );

        let body = ErrorResponse {
            error: self.message,
        };
        warp::reply::with_status(warp::reply::json(&body), self.status).into_response()
    }
}

/// Build an empty `200 OK` reply
pub fn empty_ok() -> Response {
    warp::reply::with_status(warp::reply(), StatusCode::OK).into_response()
}

/// Turn a handler outcome into a response
pub fn respond<T, F>(result: Result<T, ApiError>, on_success: F) -> Response
where
    F: FnOnce(T) -> Response,
{
    match result {
        Ok(value) => on_success(value),
        Err(err) => err.into_response(),
    }
}
