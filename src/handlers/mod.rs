// Handlers module
//
// Each endpoint has a plain async function holding the request contract
// (validation, store call, error mapping) and a `*_handler` wrapper that
// adapts it to warp.

pub mod create_msg;
pub mod delete_msg;
pub mod error;
pub mod recovery;
pub mod retrieve_all_msgs;
pub mod retrieve_msg;
pub mod update_msg;

pub use create_msg::{create_msg, create_msg_handler};
pub use delete_msg::{delete_msg, delete_msg_handler};
pub use error::ApiError;
pub use recovery::{guard, handle_rejection};
pub use retrieve_all_msgs::{retrieve_all_msgs, retrieve_all_msgs_handler};
pub use retrieve_msg::{retrieve_msg, retrieve_msg_handler};
pub use update_msg::{update_msg, update_msg_handler};

use percent_encoding::percent_decode_str;
use warp::http::{HeaderValue, StatusCode};

use crate::models::MessageRequest;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Read the content type header as text; a value that is not text is unsupported
pub(crate) fn content_type_text(value: Option<&HeaderValue>) -> Result<Option<&str>, ApiError> {
    match value {
        None => Ok(None),
        Some(value) => value.to_str().map(Some).map_err(|e| {
            ApiError::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported content type",
                format!("content-type is not text: {}", e),
            )
        }),
    }
}

/// Percent-decode a message id taken from the request path
pub(crate) fn decode_path_id(segment: &str) -> Result<String, ApiError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|id| id.into_owned())
        .map_err(|e| ApiError::bad_request("Message id in path is not valid UTF-8", e.to_string()))
}

/// PostgreSQL text cannot hold NUL, so no backend accepts it
pub(crate) fn reject_nul(field: &str, value: &str) -> Result<(), ApiError> {
    if value.contains('\0') {
        return Err(ApiError::bad_request(
            format!("Message {} must not contain NUL characters", field),
            "",
        ));
    }
    Ok(())
}

/// Require a JSON content type; parameters such as `charset` are allowed
pub(crate) fn require_json(content_type: Option<&str>) -> Result<(), ApiError> {
    let is_json = content_type
        .map(|value| value.split(';').next().unwrap_or("").trim())
        .map(|media_type| media_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false);

    if is_json {
        Ok(())
    } else {
        Err(ApiError::unsupported_media_type(content_type))
    }
}

/// Decode a create/update request body
pub(crate) fn parse_message_request(body: &[u8]) -> Result<MessageRequest, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request("Failed to decode body into msg object", e.to_string()))
}
