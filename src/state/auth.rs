//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by [`AuthSessionStore`](super::store::AuthSessionStore) and
//! mirrored into a `RwSignal` for the route gate and user-aware components.
//!
//! INVARIANT
//! =========
//! `user` is `Some` exactly when `status` is `Authenticated`. The constructors
//! below are the only way the store builds a state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserRecord;

/// Lifecycle of the session check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Authenticated,
    Error,
}

impl SessionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Authenticated => "authenticated",
            Self::Error => "error",
        }
    }
}

/// Authentication state tracking the current user and probe status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<UserRecord>,
    pub error: Option<String>,
    /// Idle because the session ended (loop guard tripped or logout), not
    /// because nothing has been checked yet.
    pub signed_out: bool,
}

impl SessionState {
    #[must_use]
    pub fn loading() -> Self {
        Self { status: SessionStatus::Loading, ..Self::default() }
    }

    #[must_use]
    pub fn authenticated(user: UserRecord) -> Self {
        Self { status: SessionStatus::Authenticated, user: Some(user), ..Self::default() }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { status: SessionStatus::Error, error: Some(message.into()), ..Self::default() }
    }

    /// Terminal unauthenticated state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { signed_out: true, ..Self::default() }
    }

    /// The user, but only while the status says authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<&UserRecord> {
        match self.status {
            SessionStatus::Authenticated => self.user.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }
}
