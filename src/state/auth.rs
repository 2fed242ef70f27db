//! Authentication slice.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Admin, LoginResponse};
use crate::session::StoredSession;
use crate::state::Loadable;

/// Current administrator and login-request phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub admin: Option<Admin>,
    pub access_token: Option<String>,
    pub request: Loadable<()>,
}

impl AuthState {
    /// Restore a persisted login (app start).
    #[must_use]
    pub fn hydrated(stored: Option<StoredSession>) -> Self {
        match stored {
            Some(session) => Self {
                admin: Some(session.admin),
                access_token: Some(session.access_token),
                request: Loadable::Idle,
            },
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.admin.is_some() && self.access_token.is_some()
    }

    pub fn login_pending(&mut self) {
        self.request = Loadable::Pending;
    }

    pub fn login_fulfilled(&mut self, response: &LoginResponse) {
        self.admin = Some(response.admin.clone());
        self.access_token = Some(response.access_token.clone());
        self.request = Loadable::Fulfilled(());
    }

    pub fn login_rejected(&mut self, message: String) {
        self.admin = None;
        self.access_token = None;
        self.request = Loadable::Rejected(message);
    }

    pub fn logout_pending(&mut self) {
        self.request = Loadable::Pending;
    }

    /// The original clears credentials whether or not the logout request
    /// succeeded, so both settle paths land here.
    pub fn logout_settled(&mut self) {
        self.admin = None;
        self.access_token = None;
        self.request = Loadable::Idle;
    }

    pub fn clear_error(&mut self) {
        self.request.clear_error();
    }
}
