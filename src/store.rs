use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::profile::UserProfile;

const TOKEN_SLOT: &str = "token";
const USER_SLOT: &str = "user";

/// Minimal key/value seam over whatever client-local persistence the host
/// provides. The store only ever touches two slots: the raw token string and
/// the JSON-encoded profile.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process backend, used directly in tests and as a default for hosts
/// without durable storage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionRecord {
    token: String,
    profile: UserProfile,
}

/// Thread-safe holder of the current credential and profile. Clone handles
/// share state; write and clear happen under one lock so no reader observes a
/// token without its profile or vice versa.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Option<SessionRecord>>>,
    storage: Option<Arc<dyn StorageBackend>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store backed by persistent slots, restoring any complete
    /// session found there. A half-present session (one slot surviving
    /// without the other, or an undecodable profile) is discarded outright.
    pub fn with_storage(storage: Arc<dyn StorageBackend>) -> Self {
        let restored = match (storage.get(TOKEN_SLOT), storage.get(USER_SLOT)) {
            (Some(token), Some(raw_profile)) => match serde_json::from_str(&raw_profile) {
                Ok(profile) => Some(SessionRecord { token, profile }),
                Err(err) => {
                    warn!(error = %err, "discarding undecodable persisted profile");
                    None
                }
            },
            (None, None) => None,
            _ => {
                warn!("discarding incomplete persisted session");
                None
            }
        };

        if restored.is_none() {
            storage.remove(TOKEN_SLOT);
            storage.remove(USER_SLOT);
        }

        Self {
            inner: Arc::new(RwLock::new(restored)),
            storage: Some(storage),
        }
    }

    /// Atomically installs a new session, replacing any previous one.
    pub fn write(&self, token: impl Into<String>, profile: UserProfile) {
        let record = SessionRecord {
            token: token.into(),
            profile,
        };
        let mut guard = self.inner.write().expect("rwlock poisoned");
        if let Some(storage) = &self.storage {
            storage.set(TOKEN_SLOT, &record.token);
            match serde_json::to_string(&record.profile) {
                Ok(encoded) => storage.set(USER_SLOT, &encoded),
                Err(err) => warn!(error = %err, "failed to persist profile slot"),
            }
        }
        *guard = Some(record);
    }

    /// Returns the credential and profile together, or neither.
    pub fn read(&self) -> Option<(String, UserProfile)> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard
            .as_ref()
            .map(|record| (record.token.clone(), record.profile.clone()))
    }

    pub fn token(&self) -> Option<String> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.as_ref().map(|record| record.token.clone())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.as_ref().map(|record| record.profile.clone())
    }

    pub fn is_present(&self) -> bool {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.is_some()
    }

    /// Atomically removes the session. Returns `true` only when a session was
    /// actually present; repeated calls are no-ops, which is what keeps the
    /// expiry clear-and-redirect effect idempotent.
    pub fn clear(&self) -> bool {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        let removed = guard.take().is_some();
        if removed {
            if let Some(storage) = &self.storage {
                storage.remove(TOKEN_SLOT);
                storage.remove(USER_SLOT);
            }
        }
        removed
    }
}
