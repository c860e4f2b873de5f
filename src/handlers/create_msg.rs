// POST /v1/createMsg handler

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};
use warp::http::HeaderValue;
use warp::reply::Response;

use super::error::{empty_ok, respond, ApiError};
use super::{content_type_text, parse_message_request, reject_nul, require_json};
use crate::models::Message;
use crate::store::MessageStore;

/// Validate a create request and store the new message
///
/// The id is trimmed and must not be empty. `isPalindrome` and `modTime` are
/// always derived here, never taken from the body.
pub async fn create_msg(
    store: &dyn MessageStore,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Message, ApiError> {
    require_json(content_type)?;

    let request = parse_message_request(body)?;

    let id = request.id.trim();
    if id.is_empty() {
        return Err(ApiError::bad_request("Message id must not be empty", ""));
    }
    reject_nul("id", id)?;
    reject_nul("content", &request.content)?;

    let msg = Message::new(id, request.content);

    match store.create(msg.clone()).await {
        Ok(()) => Ok(msg),
        Err(e) if e.is_id_unavailable() => Err(ApiError::conflict(&msg.id, &e)),
        Err(e) => Err(ApiError::internal(
            "Unexpected error during creation of message",
            e.to_string(),
        )),
    }
}

pub async fn create_msg_handler(
    store: Arc<dyn MessageStore>,
    content_type: Option<HeaderValue>,
    body: Bytes,
) -> Result<Response, Infallible> {
    info!("POST /v1/createMsg");

    let result = async {
        let content_type = content_type_text(content_type.as_ref())?;
        create_msg(store.as_ref(), content_type, &body).await
    }
    .await;
    Ok(respond(result, |msg| {
        debug!("A message was successfully created: {}", msg);
        empty_ok()
    }))
}
