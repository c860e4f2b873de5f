// Route definitions

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use warp::http::header::CONTENT_TYPE;
use warp::http::{HeaderMap, HeaderValue};
use warp::Filter;

use crate::handlers::{self, guard};
use crate::store::MessageStore;

/// Largest accepted request body
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

fn with_store(
    store: Arc<dyn MessageStore>,
) -> impl Filter<Extract = (Arc<dyn MessageStore>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&store))
}

// The content type is taken as a raw header value so that a non-text value
// reaches the handler (and becomes a 415) instead of being rejected here.
fn json_body(
) -> impl Filter<Extract = (Option<HeaderValue>, Bytes), Error = warp::Rejection> + Clone {
    warp::header::headers_cloned()
        .map(|headers: HeaderMap| headers.get(CONTENT_TYPE).cloned())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
}

pub fn configure_routes(
    store: Arc<dyn MessageStore>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let api = warp::path("v1");

    // POST /v1/createMsg
    let create_msg = api
        .and(warp::path("createMsg"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(json_body())
        .and_then(
            |store: Arc<dyn MessageStore>, content_type: Option<HeaderValue>, body: Bytes| {
                guard(handlers::create_msg_handler(store, content_type, body))
            },
        );

    // Path ids arrive percent-encoded; the handlers decode them.

    // GET /v1/retrieveMsg/{id}
    let retrieve_msg = api
        .and(warp::path("retrieveMsg"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(|segment: String, store: Arc<dyn MessageStore>| {
            guard(handlers::retrieve_msg_handler(segment, store))
        });

    // GET /v1/retrieveAllMsgs
    let retrieve_all_msgs = api
        .and(warp::path("retrieveAllMsgs"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(|store: Arc<dyn MessageStore>| {
            guard(handlers::retrieve_all_msgs_handler(store))
        });

    // POST /v1/updateMsg/{id}
    let update_msg = api
        .and(warp::path("updateMsg"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::post())
        .and(with_store(store.clone()))
        .and(json_body())
        .and_then(
            |segment: String,
             store: Arc<dyn MessageStore>,
             content_type: Option<HeaderValue>,
             body: Bytes| {
                guard(handlers::update_msg_handler(segment, store, content_type, body))
            },
        );

    // ANY /v1/deleteMsg/{id}
    let delete_msg = api
        .and(warp::path("deleteMsg"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(with_store(store))
        .and_then(|segment: String, store: Arc<dyn MessageStore>| {
            guard(handlers::delete_msg_handler(segment, store))
        });

    // Combine routes
    create_msg
        .or(retrieve_msg)
        .or(retrieve_all_msgs)
        .or(update_msg)
        .or(delete_msg)
        .recover(handlers::handle_rejection)
}
