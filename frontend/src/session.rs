//! Browser storage backing for the session context.

use common::session::{decode_stored_session, AuthSession, SessionStore};
use web_sys::Storage;

/// Local storage key holding the serialized `AuthSession`.
pub const AUTH_STORAGE_KEY: &str = "dashboard.auth";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the {0}")]
    Rejected(&'static str),
    #[error("cannot encode the session: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    fn storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStore for LocalSessionStore {
    type Error = StorageError;

    fn load(&self) -> Result<Option<AuthSession>, StorageError> {
        let raw = Self::storage()?
            .get_item(AUTH_STORAGE_KEY)
            .map_err(|_| StorageError::Rejected("read"))?;
        Ok(decode_stored_session(raw.as_deref()))
    }

    fn persist(&self, session: &AuthSession) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session)?;
        Self::storage()?
            .set_item(AUTH_STORAGE_KEY, &raw)
            .map_err(|_| StorageError::Rejected("write"))
    }

    fn clear(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(AUTH_STORAGE_KEY)
            .map_err(|_| StorageError::Rejected("removal"))
    }
}
