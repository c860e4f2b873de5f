//! In-memory message store
//!
//! Messages live in a sharded concurrent map keyed by id. Each operation
//! touches a single entry while holding that entry's shard lock, so readers
//! never see a half-replaced record and two creates for the same id cannot
//! both win.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::models::Message;
use crate::store::{
    error::{Result, StoreError},
    MessageStore,
};

/// Thread-safe message store held in local memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    messages: DashMap<String, Message>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Message> {
        self.messages
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<Message>> {
        let mut messages: Vec<Message> = self
            .messages
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        messages.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(messages)
    }

    async fn create(&self, msg: Message) -> Result<()> {
        // The entry guard keeps the shard locked between the check and the insert
        match self.messages.entry(msg.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::IdUnavailable(msg.id)),
            Entry::Vacant(entry) => {
                entry.insert(msg);
                Ok(())
            }
        }
    }

    async fn update(&self, msg: Message) -> Result<()> {
        match self.messages.get_mut(&msg.id) {
            Some(mut entry) => {
                let stored = entry.value_mut();
                stored.content = msg.content;
                stored.is_palindrome = msg.is_palindrome;
                stored.mod_time = msg.mod_time;
                Ok(())
            }
            None => Err(StoreError::NotFound(msg.id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.messages
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn close(&self) {}
}
