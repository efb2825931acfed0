use async_trait::async_trait;
use tower_sessions::{session::Id, session::Record, session_store, ExpiredDeletion, SessionStore};

use crate::error::StoreError;
use crate::record_store::RecordStore;
use crate::store::SessionStore as RecordSessionStore;

fn encode(record: &Record) -> session_store::Result<String> {
    serde_json::to_string(record).map_err(|e| session_store::Error::Encode(e.to_string()))
}

/// Lets a [`RecordSessionStore`] back a `tower_sessions::SessionManagerLayer`.
///
/// Each tower record is stored as JSON in the record's `data` column. A
/// record loads only while both the store's sliding lifetime and the tower
/// record's own `expiry_date` are in the future; garbage collection follows
/// the store's lifetime.
///
/// # Error Mapping
///
/// * JSON serialization errors → `session_store::Error::Encode`
/// * JSON deserialization errors → `session_store::Error::Decode`
/// * Every other store error → `session_store::Error::Backend`
#[async_trait]
impl<R> SessionStore for RecordSessionStore<R>
where
    R: RecordStore + 'static,
{
    /// Creates a new session record, regenerating the id on collision.
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        loop {
            // Session ID collision mitigation
            if self.exists(&record.id.to_string()).await? {
                record.id = Id::default();
                continue;
            }

            let data = encode(record)?;
            if self.insert_record(&record.id.to_string(), data).await? {
                return Ok(());
            }
            // Lost a race for this id between the lookup and the insert.
            record.id = Id::default();
        }
    }

    /// Saves a session record, inserting it if it vanished in the meantime.
    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let session_id = record.id.to_string();
        let data = encode(record)?;

        match self.write(&session_id, &data).await {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound(_)) => {
                if self.insert_record(&session_id, data.clone()).await? {
                    return Ok(());
                }
                // Created by a concurrent read after the update missed it.
                self.write(&session_id, &data).await.map_err(Into::into)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Loads a session record; empty or expired sessions load as `None`.
    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let data = self.read(&session_id.to_string()).await?;
        if data.is_empty() {
            return Ok(None);
        }

        let record: Record = serde_json::from_str(&data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;
        if record.expiry_date.unix_timestamp() <= self.unix_now() {
            tracing::debug!(session_id = %session_id, "tower session past its expiry date");
            return Ok(None);
        }
        Ok(Some(record))
    }

    /// Deletes a session record.
    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.destroy(&session_id.to_string()).await?;
        Ok(())
    }
}

#[async_trait]
impl<R> ExpiredDeletion for RecordSessionStore<R>
where
    R: RecordStore + 'static,
{
    /// Removes every session whose expiry has passed, best effort.
    async fn delete_expired(&self) -> session_store::Result<()> {
        self.collect_garbage(0).await;
        Ok(())
    }
}
