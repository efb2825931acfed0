//! Per-request view of the session being served.

use tower_sessions::session::Id;

use crate::error::Result;
use crate::record_store::RecordStore;
use crate::store::SessionStore;

/// The session active for one request.
///
/// Created by [`SessionStore::begin`], which opens the store and reads the
/// payload. Operations that act on "the current session" (identity
/// association, identifier rotation) live here, keyed by the id this context
/// currently holds. [`commit`](Self::commit) writes the payload back and
/// closes the store.
#[derive(Debug)]
pub struct ActiveSession<'s, R> {
    store: &'s SessionStore<R>,
    session_id: String,
    payload: String,
}

impl<R: RecordStore> SessionStore<R> {
    /// Opens the store and reads `session_id`, creating its record if needed.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotStarted`](crate::StoreError::NotStarted) if the store
    /// was never started.
    pub async fn begin(&self, session_id: impl Into<String>) -> Result<ActiveSession<'_, R>> {
        let session_id = session_id.into();
        self.open().await?;
        let payload = self.read(&session_id).await?;
        Ok(ActiveSession {
            store: self,
            session_id,
            payload,
        })
    }
}

impl<'s, R: RecordStore> ActiveSession<'s, R> {
    /// The session id this request is currently bound to.
    pub fn id(&self) -> &str {
        &self.session_id
    }

    /// The payload read at [`begin`](SessionStore::begin), empty for new or expired sessions.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Associates `user_id` with the current session; `None` or `""` clears it.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::update_user_id`].
    pub async fn update_user_id(&self, user_id: Option<&str>) -> Result<()> {
        self.store.update_user_id(&self.session_id, user_id).await
    }

    /// Moves this request to a freshly generated session id.
    ///
    /// See [`regenerate_to`](Self::regenerate_to).
    ///
    /// # Errors
    ///
    /// See [`regenerate_to`](Self::regenerate_to).
    pub async fn regenerate(&mut self, destroy_old: bool) -> Result<&str> {
        self.regenerate_to(Id::default().to_string(), destroy_old)
            .await
    }

    /// Moves this request to `new_id`.
    ///
    /// With `destroy_old` the previous record is removed and the in-memory
    /// payload dropped, so the new session starts empty. Without it the old
    /// record stays behind until it expires or is collected, and the payload
    /// is carried over to the new id on [`commit`](Self::commit).
    ///
    /// # Errors
    ///
    /// The failure of destroying the old record; the context keeps its old id
    /// in that case.
    pub async fn regenerate_to(
        &mut self,
        new_id: impl Into<String>,
        destroy_old: bool,
    ) -> Result<&str> {
        let new_id = new_id.into();
        if destroy_old {
            self.store.destroy(&self.session_id).await?;
            self.payload.clear();
        }

        tracing::debug!(old = %self.session_id, new = %new_id, destroy_old, "session id regenerated");
        self.session_id = new_id;
        self.store.read(&self.session_id).await?;
        Ok(&self.session_id)
    }

    /// Writes `payload` under the current id and closes the store.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::write`].
    pub async fn commit(self, payload: &str) -> Result<()> {
        self.store.write(&self.session_id, payload).await?;
        self.store.close().await
    }
}
