//! Session store: probe orchestration, loop guard and identity-provider redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store is built per app mount and handed down through context. The
//! route gate never talks to the network; it only reads the state this store
//! publishes.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded and cooperative. Overlapping `load_session` calls share one
//! in-flight future. The guard check-and-set runs synchronously after the
//! probe resolves, and an in-memory latch stops any second navigation once the
//! document is on its way to the provider.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use super::LOG_TARGET;
use super::auth::SessionState;
use super::loop_guard::RedirectLoopGuard;
use crate::config::PortalConfig;
use crate::net::api::{HttpSessionProbe, ProbeOutcome, SessionProbe};
use crate::util::navigation::{BrowserNavigator, Navigator, login_url, logout_url};
use crate::util::storage::SessionStorage;


/// How a `load_session` cycle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The probe returned a user.
    Authenticated,
    /// The document is navigating to the identity provider.
    Redirecting,
    /// Second unauthenticated probe in a row; the store settled on signed out.
    LoopBroken,
    /// The loop guard could not be armed, so no automatic redirect was made.
    GuardUnavailable,
    /// The probe or the navigation failed; the store is in the error state.
    Failed,
}

/// Shared future of the current load cycle.
pub type LoadFuture = Shared<LocalBoxFuture<'static, LoadOutcome>>;

type Listener = Rc<dyn Fn(&SessionState)>;

/// Owner of [`SessionState`]. Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct AuthSessionStore {
    inner: Rc<Inner>,
}

struct Inner {
    probe: Box<dyn SessionProbe>,
    guard: RedirectLoopGuard,
    navigator: Box<dyn Navigator>,
    sso_base: String,
    state: RefCell<SessionState>,
    redirecting: Cell<bool>,
    in_flight: RefCell<Option<LoadFuture>>,
    listeners: RefCell<Vec<Listener>>,
}

impl AuthSessionStore {
    pub fn new(
        probe: impl SessionProbe + 'static,
        guard: RedirectLoopGuard,
        navigator: impl Navigator + 'static,
        sso_base: impl Into<String>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                probe: Box::new(probe),
                guard,
                navigator: Box::new(navigator),
                sso_base: sso_base.into(),
                state: RefCell::new(SessionState::default()),
                redirecting: Cell::new(false),
                in_flight: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Store wired to the browser: HTTP probe, `sessionStorage`, `window.location`.
    #[must_use]
    pub fn browser(config: &PortalConfig) -> Self {
        Self::new(
            HttpSessionProbe::new(config.session_endpoint()),
            RedirectLoopGuard::new(SessionStorage, config.loop_guard_key.clone()),
            BrowserNavigator,
            config.sso_base.clone(),
        )
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Whether a navigation to the identity provider has been started.
    #[must_use]
    pub fn is_redirecting(&self) -> bool {
        self.inner.redirecting.get()
    }

    /// Register an observer. It is called once with the current state and
    /// again after every write.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        let listener: Listener = Rc::new(listener);
        listener(&self.state());
        self.inner.listeners.borrow_mut().push(listener);
    }

    /// Probe the session and act on the answer.
    ///
    /// Calls made while a cycle is pending join that cycle and resolve to the
    /// same outcome. The cycle starts when the returned future is first polled.
    pub fn load_session(&self) -> LoadFuture {
        if let Some(pending) = self.inner.in_flight.borrow().as_ref() {
            log::debug!(target: LOG_TARGET, "joining in-flight session load");
            return pending.clone();
        }
        let cycle = Rc::clone(&self.inner).run_load().boxed_local().shared();
        *self.inner.in_flight.borrow_mut() = Some(cycle.clone());
        cycle
    }

    /// User-initiated sign-in from the signed-out view.
    ///
    /// Arms the guard when it can; a guard that can't be written does not
    /// block a navigation the user asked for.
    pub fn sign_in(&self) -> LoadOutcome {
        let inner = &self.inner;
        if inner.redirecting.get() {
            return LoadOutcome::Redirecting;
        }
        inner.set_state(SessionState::loading());
        if let Err(err) = inner.guard.arm() {
            log::warn!(target: LOG_TARGET, "loop guard could not be armed for sign-in: {err}");
        }
        log::info!(target: LOG_TARGET, "sign-in requested; redirecting to identity provider");
        inner.navigate_to_provider()
    }

    /// End the session at the identity provider and come back to the
    /// current page.
    pub fn logout(&self) {
        let inner = &self.inner;
        inner.guard.clear();
        inner.set_state(SessionState::signed_out());
        if inner.redirecting.replace(true) {
            return;
        }
        let url = logout_url(&inner.sso_base, &inner.return_to());
        log::info!(target: LOG_TARGET, "logging out via identity provider");
        if let Err(err) = inner.navigator.assign(&url) {
            inner.redirecting.set(false);
            log::error!(target: LOG_TARGET, "logout navigation failed: {err}");
        }
    }
}

impl Inner {
    async fn run_load(self: Rc<Self>) -> LoadOutcome {
        let outcome = if self.redirecting.get() {
            LoadOutcome::Redirecting
        } else {
            self.set_state(SessionState::loading());
            let answer = self.probe.probe().await;
            // A sign-in or logout that started during the probe owns state now.
            if self.redirecting.get() {
                log::debug!(target: LOG_TARGET, "navigation started during probe; dropping its answer");
                LoadOutcome::Redirecting
            } else {
                self.apply(answer)
            }
        };
        self.in_flight.borrow_mut().take();
        outcome
    }

    fn apply(&self, answer: ProbeOutcome) -> LoadOutcome {
        match answer {
            ProbeOutcome::Authenticated(user) => {
                self.guard.clear();
                log::debug!(target: LOG_TARGET, "session established for {}", user.id);
                self.set_state(SessionState::authenticated(user));
                LoadOutcome::Authenticated
            }
            ProbeOutcome::Unauthenticated => self.on_unauthenticated(),
            ProbeOutcome::TransientError(message) => {
                log::warn!(target: LOG_TARGET, "session probe failed: {message}");
                self.set_state(SessionState::failed(message));
                LoadOutcome::Failed
            }
        }
    }

    fn on_unauthenticated(&self) -> LoadOutcome {
        if self.guard.is_armed() {
            self.guard.clear();
            log::warn!(
                target: LOG_TARGET,
                "redirect loop detected: identity provider returned without a session; staying signed out"
            );
            self.set_state(SessionState::signed_out());
            return LoadOutcome::LoopBroken;
        }
        if let Err(err) = self.guard.arm() {
            log::warn!(target: LOG_TARGET, "loop guard could not be armed, not redirecting: {err}");
            self.set_state(SessionState::signed_out());
            return LoadOutcome::GuardUnavailable;
        }
        log::info!(target: LOG_TARGET, "no session; redirecting to identity provider");
        self.navigate_to_provider()
    }

    fn navigate_to_provider(&self) -> LoadOutcome {
        if self.redirecting.replace(true) {
            return LoadOutcome::Redirecting;
        }
        let url = login_url(&self.sso_base, &self.return_to());
        match self.navigator.assign(&url) {
            Ok(()) => LoadOutcome::Redirecting,
            Err(err) => {
                self.redirecting.set(false);
                self.guard.clear();
                log::error!(target: LOG_TARGET, "navigation to identity provider failed: {err}");
                self.set_state(SessionState::failed(format!("could not open the sign-in page: {err}")));
                LoadOutcome::Failed
            }
        }
    }

    fn return_to(&self) -> String {
        self.navigator.current_url().unwrap_or_else(|| "/".to_owned())
    }

    fn set_state(&self, next: SessionState) {
        let prev = self.state.replace(next.clone());
        if prev.status != next.status {
            log::debug!(target: LOG_TARGET, "session {} -> {}", prev.status.as_str(), next.status.as_str());
        }
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&next);
        }
    }
}
