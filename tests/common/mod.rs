#![allow(dead_code)]

use palermo::models::Message;
use palermo::store::MessageStore;
use testcontainers::{core::WaitFor, GenericImage, RunnableImage};

/// The PostgreSQL Docker image to use for testing
pub const POSTGRES_IMAGE: &str = "postgres";
pub const POSTGRES_TAG: &str = "16-alpine";

/// Default PostgreSQL port
pub const POSTGRES_PORT: u16 = 5432;

/// Default credentials for the PostgreSQL container
pub const POSTGRES_USER: &str = "postgres";
pub const POSTGRES_PASSWORD: &str = "palermo_password";
pub const POSTGRES_DB: &str = "palermo";

/// Create a runnable PostgreSQL container
pub fn create_postgres_container() -> RunnableImage<GenericImage> {
    let image = GenericImage::new(POSTGRES_IMAGE, POSTGRES_TAG)
        .with_env_var("POSTGRES_PASSWORD", POSTGRES_PASSWORD)
        .with_env_var("POSTGRES_DB", POSTGRES_DB)
        .with_wait_for(WaitFor::message_on_stderr("database system is ready to accept connections"));

    RunnableImage::from(image).with_tag(POSTGRES_TAG)
}

/// Build a connection string for the running PostgreSQL container
pub fn build_connection_string(host: &str, port: u16) -> String {
    format!(
        "postgresql://{}:{}@{}:{}/{}",
        POSTGRES_USER, POSTGRES_PASSWORD, host, port, POSTGRES_DB
    )
}

// ============================================================================
// Backend contract: every MessageStore must pass these on an empty store
// ============================================================================

pub async fn check_get_all_empty(store: &dyn MessageStore) {
    let msgs = store.get_all().await.expect("get_all on empty store must not fail");
    assert!(msgs.is_empty());
}

pub async fn check_create_get_round_trip(store: &dyn MessageStore) {
    let msg = Message::new("unicorn", "kayak");
    store.create(msg.clone()).await.unwrap();

    let stored = store.get("unicorn").await.unwrap();
    assert_eq!(stored.id, msg.id);
    assert_eq!(stored.content, msg.content);
    assert!(stored.is_palindrome);
    assert_eq!(stored.mod_time, msg.mod_time);
}

pub async fn check_create_twice_conflicts(store: &dyn MessageStore) {
    store.create(Message::new("fly", "this is the message")).await.unwrap();

    let err = store
        .create(Message::new("fly", "other message"))
        .await
        .unwrap_err();
    assert!(err.is_id_unavailable(), "unexpected error: {}", err);

    let stored = store.get("fly").await.unwrap();
    assert_eq!(stored.content, "this is the message");
}

pub async fn check_missing_id_not_found(store: &dyn MessageStore) {
    assert!(store.get("never-created").await.unwrap_err().is_not_found());
    assert!(store
        .update(Message::new("never-created", "abc"))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(store.delete("never-created").await.unwrap_err().is_not_found());

    // A failed update must not have created the record
    assert!(store.get("never-created").await.unwrap_err().is_not_found());
}

pub async fn check_update_replaces_content(store: &dyn MessageStore) {
    store.create(Message::new("pony", "dskahfbgkalfjsd[a")).await.unwrap();

    let updated = Message::new("pony", "chocolate123");
    store.update(updated.clone()).await.unwrap();

    let stored = store.get("pony").await.unwrap();
    assert_eq!(stored.id, "pony");
    assert_eq!(stored.content, "chocolate123");
    assert!(!stored.is_palindrome);
    assert_eq!(stored.mod_time, updated.mod_time);
}

pub async fn check_delete_removes(store: &dyn MessageStore) {
    store.create(Message::new("lemon", "i am a fruit")).await.unwrap();
    store.delete("lemon").await.unwrap();

    assert!(store.get("lemon").await.unwrap_err().is_not_found());
    assert!(store.delete("lemon").await.unwrap_err().is_not_found());
}

pub async fn check_get_all_sorted(store: &dyn MessageStore) {
    store.create(Message::new("potato", "le message")).await.unwrap();
    store.create(Message::new("banana", "anana")).await.unwrap();
    store.create(Message::new("Lemon", "i am a fruit")).await.unwrap();

    let msgs = store.get_all().await.unwrap();
    let ids: Vec<&str> = msgs.iter().map(|m| m.id.as_str()).collect();
    // byte order: uppercase sorts first
    assert_eq!(ids, vec!["Lemon", "banana", "potato"]);
    assert!(msgs[1].is_palindrome);
}
