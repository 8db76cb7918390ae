//! Session repository - the explicit interface over the session keys
//!
//! The session record functions as an ad-hoc, client-trusted token: it
//! exists if and only if OTP verification completed, and is destroyed by
//! logout. No update or expiry operations exist.

use crate::error::Result;
use crate::record::SessionRecord;
use crate::storage::KeyValueStore;
use brainbuddy_core::{UserProfile, UserRole};
use std::sync::Arc;

/// Key holding the bare role literal (`student` | `teacher`).
pub const USER_TYPE_KEY: &str = "userType";

/// Key holding the JSON-serialized profile record.
pub const USER_DATA_KEY: &str = "userData";

/// Repository managing the two session keys as a unit.
pub struct SessionRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> Clone for SessionRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Load the session record.
    ///
    /// Returns `None` when either key is absent - the guard condition the
    /// chat list redirect hinges on. Malformed `userData` JSON is an error.
    pub async fn load(&self) -> Result<Option<SessionRecord>> {
        let user_type = self.store.get(USER_TYPE_KEY).await?;
        let user_data = self.store.get(USER_DATA_KEY).await?;

        let (Some(user_type), Some(user_data)) = (user_type, user_data) else {
            return Ok(None);
        };

        let profile: UserProfile = serde_json::from_str(&user_data)?;
        Ok(Some(SessionRecord { user_type, profile }))
    }

    /// Write the session record. The only code path that creates a
    /// session; called exactly once per successful verification.
    pub async fn store(&self, role: UserRole, profile: &UserProfile) -> Result<()> {
        self.store.set(USER_TYPE_KEY, role.as_str()).await?;
        self.store
            .set(USER_DATA_KEY, &serde_json::to_string(profile)?)
            .await?;

        tracing::debug!(role = %role, "session record written");
        Ok(())
    }

    /// Remove both session keys, unconditionally.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(USER_TYPE_KEY).await?;
        self.store.remove(USER_DATA_KEY).await?;

        tracing::debug!("session record cleared");
        Ok(())
    }

    /// Check whether a complete session record exists.
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.load().await, Ok(Some(_)))
    }
}
