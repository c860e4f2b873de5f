// POST /v1/updateMsg/{id} handler

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};
use warp::http::HeaderValue;
use warp::reply::Response;

use super::error::{empty_ok, respond, ApiError};
use super::{content_type_text, decode_path_id, parse_message_request, reject_nul, require_json};
use crate::models::Message;
use crate::store::MessageStore;

/// Replace the content of an existing message
///
/// The id in the path must equal the id in the body: an update can never
/// rename a message.
pub async fn update_msg(
    store: &dyn MessageStore,
    id: &str,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Message, ApiError> {
    require_json(content_type)?;

    let request = parse_message_request(body)?;

    if request.id != id {
        return Err(ApiError::bad_request(
            "The id in the request doesn't match the id in the msg object",
            format!("path id {:?}, body id {:?}", id, request.id),
        ));
    }

    reject_nul("id", &request.id)?;
    reject_nul("content", &request.content)?;

    let msg = Message::new(request.id, request.content);

    match store.update(msg.clone()).await {
        Ok(()) => Ok(msg),
        Err(e) if e.is_not_found() => Err(ApiError::not_found(id, &e)),
        Err(e) => Err(ApiError::internal(
            "Unexpected error during update of message",
            e.to_string(),
        )),
    }
}

/// `segment` is the raw, still percent-encoded path segment
pub async fn update_msg_handler(
    segment: String,
    store: Arc<dyn MessageStore>,
    content_type: Option<HeaderValue>,
    body: Bytes,
) -> Result<Response, Infallible> {
    info!("POST /v1/updateMsg/{}", segment);

    let result = async {
        let id = decode_path_id(&segment)?;
        let content_type = content_type_text(content_type.as_ref())?;
        update_msg(store.as_ref(), &id, content_type, &body).await
    }
    .await;
    Ok(respond(result, |msg| {
        debug!("A message was successfully updated: {}", msg);
        empty_ok()
    }))
}
