// /v1/deleteMsg/{id} handler (any method)

use std::convert::Infallible;
use std::sync::Arc;

use tracing::{debug, info};
use warp::reply::Response;

use super::error::{empty_ok, respond, ApiError};
use super::{decode_path_id, reject_nul};
use crate::store::MessageStore;

pub async fn delete_msg(store: &dyn MessageStore, id: &str) -> Result<(), ApiError> {
    reject_nul("id", id)?;

    store.delete(id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::not_found(id, &e)
        } else {
            ApiError::internal("Unexpected error during deletion of message", e.to_string())
        }
    })
}

pub async fn delete_msg_handler(
    segment: String,
    store: Arc<dyn MessageStore>,
) -> Result<Response, Infallible> {
    info!("/v1/deleteMsg/{}", segment);

    let result = async {
        let id = decode_path_id(&segment)?;
        delete_msg(store.as_ref(), &id).await.map(|()| id)
    }
    .await;
    Ok(respond(result, |id| {
        debug!("Successfully deleted message with id: {}", id);
        empty_ok()
    }))
}
