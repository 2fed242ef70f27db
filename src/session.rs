//! Persisted credentials.
//!
//! The browser original keeps `accessToken` and the `admin` JSON object in
//! local storage; `SessionStore` is that seam. Login writes the pair,
//! logout clears it — even when the logout request itself fails.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Mutex;

use crate::net::types::Admin;

/// A persisted login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub access_token: String,
    pub admin: Admin,
}

/// Persistent credential storage.
pub trait SessionStore {
    fn save(&self, token: &str, admin: &Admin);
    fn load(&self) -> Option<StoredSession>;
    fn clear(&self);
}

/// In-process store; the default for the terminal binary and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemoryStore {
    fn guard(&self) -> std::sync::MutexGuard<'_, Option<StoredSession>> {
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, token: &str, admin: &Admin) {
        *self.guard() = Some(StoredSession { access_token: token.to_string(), admin: admin.clone() });
    }

    fn load(&self) -> Option<StoredSession> {
        self.guard().clone()
    }

    fn clear(&self) {
        *self.guard() = None;
    }
}
