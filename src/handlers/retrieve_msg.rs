// GET /v1/retrieveMsg/{id} handler

use std::convert::Infallible;
use std::sync::Arc;

use tracing::{debug, info};
use warp::reply::Response;
use warp::Reply;

use super::error::{respond, ApiError};
use super::{decode_path_id, reject_nul};
use crate::models::Message;
use crate::store::MessageStore;

pub async fn retrieve_msg(store: &dyn MessageStore, id: &str) -> Result<Message, ApiError> {
    reject_nul("id", id)?;

    store.get(id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::not_found(id, &e)
        } else {
            ApiError::internal("Unexpected error during retrieval of message", e.to_string())
        }
    })
}

pub async fn retrieve_msg_handler(
    segment: String,
    store: Arc<dyn MessageStore>,
) -> Result<Response, Infallible> {
    info!("GET /v1/retrieveMsg/{}", segment);

    let result = async {
        let id = decode_path_id(&segment)?;
        retrieve_msg(store.as_ref(), &id).await
    }
    .await;
    Ok(respond(result, |msg| {
        debug!("Successfully retrieved message: {}", msg);
        warp::reply::json(&msg).into_response()
    }))
}
