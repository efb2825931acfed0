//! The persistence seam between [`SessionStore`](crate::SessionStore) and a database.
//!
//! A [`RecordStore`] offers the handful of single-collection primitives the
//! session lifecycle needs: find one record, insert one, update one, remove
//! many. Writes carry a [`WriteConcern`] saying whether the caller waits for
//! the backend to confirm the write, and how long any backend call may take.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::FromQueryResult;

use crate::error::Result;

/// The fields the read path needs from a stored record.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct RecordSnapshot {
    /// Stored payload.
    pub data: String,
    /// Unix timestamp after which the record is dead.
    pub expires_at: i64,
}

/// A record to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub session_id: String,
    pub data: String,
    pub expires_at: i64,
    pub updated_at: i64,
    pub user_id: Option<String>,
}

/// Field changes applied by [`RecordStore::update_one`].
///
/// Expiry and update time are always written; the payload and the user
/// identity only when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub data: Option<String>,
    pub user_id: Option<Option<String>>,
    pub expires_at: i64,
    pub updated_at: i64,
}

impl RecordUpdate {
    /// An update that only refreshes the timestamps.
    pub fn touch(expires_at: i64, updated_at: i64) -> Self {
        Self {
            data: None,
            user_id: None,
            expires_at,
            updated_at,
        }
    }

    /// Also replace the payload.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Also replace the user identity; `None` clears it.
    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Which records [`RecordStore::remove`] deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Every record carrying this session id.
    SessionId(String),
    /// Every record whose `expires_at` is strictly before this timestamp.
    ExpiredBefore(i64),
}

/// How a write is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteConcern {
    /// Wait for the backend to confirm the write before returning.
    pub acknowledged: bool,
    /// Upper bound for the backend call.
    pub timeout: Duration,
}

impl WriteConcern {
    /// Block until the write is confirmed, failing after `timeout`.
    pub fn acknowledged(timeout: Duration) -> Self {
        Self {
            acknowledged: true,
            timeout,
        }
    }

    /// Hand the write to the backend and return immediately.
    ///
    /// The outcome is only observable through logs.
    pub fn best_effort(timeout: Duration) -> Self {
        Self {
            acknowledged: false,
            timeout,
        }
    }
}

/// What the backend reported for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The write completed and touched `affected` records.
    Acknowledged { affected: u64 },
    /// The write was dispatched without waiting for a result.
    Unacknowledged,
}

/// Single-collection persistence primitives for session records.
///
/// Implementations must enforce uniqueness of `session_id`.
#[async_trait]
pub trait RecordStore: Debug + Send + Sync {
    /// Make the collection ready for use (connectivity check, schema), each
    /// step bounded by `timeout`.
    async fn prepare(&self, timeout: Duration) -> Result<()>;

    /// Find the record for `session_id`, returning only the fields reads need.
    async fn find_one(&self, session_id: &str, timeout: Duration)
        -> Result<Option<RecordSnapshot>>;

    /// Insert `record` unless a record with the same session id exists.
    ///
    /// An acknowledged outcome with `affected == 0` means the session id was
    /// already taken.
    async fn insert(&self, record: NewRecord, concern: WriteConcern) -> Result<WriteOutcome>;

    /// Update the record for `session_id` without creating one.
    async fn update_one(
        &self,
        session_id: &str,
        changes: RecordUpdate,
        concern: WriteConcern,
    ) -> Result<WriteOutcome>;

    /// Remove every record matching `filter`.
    async fn remove(&self, filter: RecordFilter, concern: WriteConcern) -> Result<WriteOutcome>;

    /// Wait for writes dispatched without acknowledgement to finish.
    async fn settle(&self) {}
}
