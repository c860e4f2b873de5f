//! Error types for the message store

use thiserror::Error;

/// Result type for message store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// SQLSTATE raised by PostgreSQL on a primary key / unique index violation
const UNIQUE_VIOLATION: &str = "23505";

/// Errors returned by every `MessageStore` backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// No message is stored under the requested id
    #[error("There was no message associated with the ID provided: {0}")]
    NotFound(String),

    /// The id of a new message is already in use
    #[error("The ID provided is already in use: {0}")]
    IdUnavailable(String),

    /// The backing store could not be reached (refused, timed out, closed)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other failure reported by the backing store
    #[error("Store error: {0}")]
    Backend(String),

    /// Invalid store configuration
    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_id_unavailable(&self) -> bool {
        matches!(self, StoreError::IdUnavailable(_))
    }
}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            if db_error.code().code() == UNIQUE_VIOLATION {
                return StoreError::IdUnavailable(db_error.message().to_string());
            }
            return StoreError::Backend(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        // No server-side error: the connection itself failed
        let io_failure = std::error::Error::source(&err)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .is_some();
        if err.is_closed() || io_failure {
            return StoreError::Unavailable(err.to_string());
        }

        StoreError::Backend(format!("{:?}", err))
    }
}

/// Convert deadpool errors to store errors
///
/// Every pool failure (checkout timeout, refused connection, closed pool)
/// means the store cannot be reached.
impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}

/// Convert deadpool build errors to store errors
impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Config(err.to_string())
    }
}
