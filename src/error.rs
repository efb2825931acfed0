//! Error types for session record operations.

use std::time::Duration;

use sea_orm::{DbErr, SqlErr};
use tower_sessions::session_store;

/// Error type for session record operations.
///
/// Every failure the store reports crosses its boundary as one of these
/// variants; nothing panics. Callers can tell a missing record apart from a
/// slow or broken backend and pick a retry policy accordingly.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The configuration is not usable.
    #[error("invalid session store configuration: {0}")]
    Config(String),

    /// Connecting to the backend or preparing the collection failed.
    #[error("unable to initialize sessions: {0}")]
    Setup(String),

    /// An operation was attempted before [`start`](crate::SessionStore::start) succeeded.
    #[error("session store has not been started")]
    NotStarted,

    /// No record matched the session id.
    #[error("no session record for `{0}`")]
    NotFound(String),

    /// The backend did not answer within the operation timeout.
    #[error("session store operation timed out after {0:?}")]
    Timeout(Duration),

    /// The write collided with a uniqueness constraint.
    #[error("conflicting session write: {0}")]
    Conflict(String),

    /// Any other backend failure.
    #[error("session store backend error: {0}")]
    Transport(String),

    /// A session could not be serialized.
    #[error("failed to encode session: {0}")]
    Encode(String),

    /// A stored payload could not be deserialized.
    #[error("failed to decode session: {0}")]
    Decode(String),
}

/// Result type for session record operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict(detail),
            _ => Self::Transport(err.to_string()),
        }
    }
}

impl From<StoreError> for session_store::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Encode(msg) => session_store::Error::Encode(msg),
            StoreError::Decode(msg) => session_store::Error::Decode(msg),
            other => session_store::Error::Backend(other.to_string()),
        }
    }
}
