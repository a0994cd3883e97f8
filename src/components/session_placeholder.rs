//! Stand-in shown while the gate withholds routed content.
//!
//! A blank screen during a check or redirect reads as a hang, so the gate
//! always renders this instead. After a loop-guard recovery it is a quiet
//! signed-out view rather than an error dialog.

#[cfg(test)]
#[path = "session_placeholder_test.rs"]
mod session_placeholder_test;

use leptos::prelude::*;

use crate::state::LOG_TARGET;
use crate::state::auth::{SessionState, SessionStatus};
use crate::state::store::AuthSessionStore;

const FALLBACK_ERROR: &str = "We couldn't check your session.";

/// Which placeholder variant a state calls for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Before the first answer, while loading, or while leaving for sign-in.
    Checking,
    /// The probe or the redirect failed; offer a retry.
    Failed(String),
    /// Terminal unauthenticated state; offer a manual sign-in.
    SignedOut,
}

impl PlaceholderKind {
    #[must_use]
    pub fn for_state(state: &SessionState) -> Self {
        match state.status {
            SessionStatus::Error => Self::Failed(state.error.clone().unwrap_or_else(|| FALLBACK_ERROR.to_owned())),
            SessionStatus::Idle if state.signed_out => Self::SignedOut,
            _ => Self::Checking,
        }
    }
}

#[component]
pub fn SessionPlaceholder() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<StoredValue<AuthSessionStore, LocalStorage>>();

    let on_retry = move |_| {
        let store = store.get_value();
        leptos::task::spawn_local(async move {
            let outcome = store.load_session().await;
            log::debug!(target: LOG_TARGET, "session retry finished: {outcome:?}");
        });
    };

    let on_sign_in = move |_| {
        let _ = store.with_value(AuthSessionStore::sign_in);
    };

    move || match session.with(PlaceholderKind::for_state) {
        PlaceholderKind::Checking => view! {
            <div class="session-placeholder" aria-busy="true">
                <p class="session-placeholder__message">"Checking your session..."</p>
            </div>
        }
        .into_any(),
        PlaceholderKind::Failed(message) => view! {
            <div class="session-placeholder session-placeholder--error" role="alert">
                <p class="session-placeholder__message">{message}</p>
                <button class="btn session-placeholder__retry" on:click=on_retry>
                    "Try again"
                </button>
            </div>
        }
        .into_any(),
        PlaceholderKind::SignedOut => view! {
            <div class="session-placeholder session-placeholder--signed-out">
                <p class="session-placeholder__message">"You are signed out."</p>
                <button class="btn session-placeholder__sign-in" on:click=on_sign_in>
                    "Sign in"
                </button>
            </div>
        }
        .into_any(),
    }
}
