//! In-memory session state backed by durable token storage

use crate::error::Result;
use crate::session::TokenStorage;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// User profile as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: i64,
    /// Username chosen at registration
    pub username: String,
    /// Email used for login
    pub email: String,
    /// When the account was created
    #[serde(default)]
    pub created_at: Option<String>,
    /// Whether the account is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<UserProfile>,
}

/// Single source of truth for authentication state.
///
/// The token is loaded once from durable storage at construction; every
/// token change is written through. The user profile lives in memory only
/// and may lag token presence (it is set separately after a profile fetch).
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    storage: Arc<dyn TokenStorage>,
}

impl SessionStore {
    /// Create a session store, initializing the token from storage
    pub fn new(storage: Arc<dyn TokenStorage>) -> Result<Self> {
        let token = storage.load()?;
        Ok(Self {
            state: Arc::new(RwLock::new(SessionState { token, user: None })),
            storage,
        })
    }

    /// Current auth token
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .token
            .clone()
    }

    /// Update the token; writes through to durable storage
    pub fn set_token(&self, token: Option<String>) -> Result<()> {
        match &token {
            Some(t) => self.storage.store(t)?,
            None => self.storage.clear()?,
        }
        self.state.write().unwrap_or_else(|e| e.into_inner()).token = token;
        Ok(())
    }

    /// Current user profile, if one has been fetched
    pub fn user(&self) -> Option<UserProfile> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .user
            .clone()
    }

    /// Update the in-memory profile; no durable side effect
    pub fn set_user(&self, user: Option<UserProfile>) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).user = user;
    }

    /// Clear the profile and the token, including the durable entry
    pub fn logout(&self) -> Result<()> {
        self.set_user(None);
        self.set_token(None)
    }

    /// True iff a token is present
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .token
            .is_some()
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            storage: Arc::clone(&self.storage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStorage;

    fn test_user() -> UserProfile {
        UserProfile {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: None,
            is_active: true,
        }
    }

    #[test]
    fn test_starts_unauthenticated_with_empty_storage() {
        let store = SessionStore::new(Arc::new(MemoryTokenStorage::new())).unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_loads_persisted_token_at_startup() {
        let store =
            SessionStore::new(Arc::new(MemoryTokenStorage::with_token("persisted"))).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("persisted".to_string()));
    }

    #[test]
    fn test_set_token_writes_through() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let store = SessionStore::new(storage.clone()).unwrap();

        store.set_token(Some("abc".to_string())).unwrap();
        assert_eq!(storage.load().unwrap(), Some("abc".to_string()));

        store.set_token(None).unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_logout_clears_everything() {
        let storage = Arc::new(MemoryTokenStorage::new());
        let store = SessionStore::new(storage.clone()).unwrap();

        store.set_token(Some("abc".to_string())).unwrap();
        store.set_user(Some(test_user()));

        store.logout().unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.user(), None);
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_restart_roundtrip() {
        let storage = Arc::new(MemoryTokenStorage::new());
        {
            let store = SessionStore::new(storage.clone()).unwrap();
            store.set_token(Some("abc".to_string())).unwrap();
        }

        // Simulated restart: fresh store over the same storage
        let store = SessionStore::new(storage).unwrap();
        assert_eq!(store.token(), Some("abc".to_string()));
        // The profile does not survive a restart
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new(Arc::new(MemoryTokenStorage::new())).unwrap();
        let clone = store.clone();

        store.set_token(Some("abc".to_string())).unwrap();
        assert!(clone.is_authenticated());
    }
}
