// Data structures (Message, request bodies)

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored message with its derived fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub is_palindrome: bool,
    pub mod_time: DateTime<Utc>,
}

impl Message {
    /// Build a message, deriving `is_palindrome` and `mod_time` from the content
    ///
    /// The id is taken as-is; trimming is the caller's job. The timestamp is
    /// truncated to microseconds, the precision PostgreSQL keeps.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id: id.into(),
            is_palindrome: is_palindrome(&content),
            content,
            mod_time: Utc::now().trunc_subsecs(6),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Msg: {{ id: {}, content: {}, isPalindrome: {}, modTime: {} }}",
            self.id,
            self.content,
            self.is_palindrome,
            self.mod_time.to_rfc3339()
        )
    }
}

/// Body of create and update requests
///
/// Only `id` and `content` are read; derived fields sent by a client are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
}

/// Body returned with every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Case-insensitive palindrome check; whitespace and punctuation count
pub fn is_palindrome(sequence: &str) -> bool {
    let chars: Vec<char> = sequence.to_lowercase().chars().collect();
    chars.iter().eq(chars.iter().rev())
}
