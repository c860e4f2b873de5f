// GET /v1/retrieveAllMsgs handler

use std::convert::Infallible;
use std::sync::Arc;

use tracing::{debug, info};
use warp::reply::Response;
use warp::Reply;

use super::error::{respond, ApiError};
use crate::models::Message;
use crate::store::MessageStore;

pub async fn retrieve_all_msgs(store: &dyn MessageStore) -> Result<Vec<Message>, ApiError> {
    store.get_all().await.map_err(|e| {
        ApiError::internal(
            "Unexpected error during retrieval of all messages",
            e.to_string(),
        )
    })
}

pub async fn retrieve_all_msgs_handler(
    store: Arc<dyn MessageStore>,
) -> Result<Response, Infallible> {
    info!("GET /v1/retrieveAllMsgs");

    let result = retrieve_all_msgs(store.as_ref()).await;
    Ok(respond(result, |msgs| {
        debug!("Successfully retrieved {} messages", msgs.len());
        warp::reply::json(&msgs).into_response()
    }))
}
