//! Route authorization decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view goes through the same gate so unauthenticated and
//! under-privileged visitors are handled identically across pages.
//!
//! INVARIANT
//! =========
//! Never `RenderChildren` for a route that isn't positively accessible with
//! the current state. Protected content must not paint, not even for the
//! frame between mount and the first probe answer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::PortalConfig;
use crate::net::types::Role;
use crate::state::auth::SessionState;
use crate::util::routes::{RouteClass, RouteClassifier};

/// What the gate does with the routed content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    RenderChildren,
    /// Show the session placeholder instead of the content.
    RenderPlaceholder,
    /// Send the router to another path.
    Redirect(String),
}

/// Pure per-render gate. Cheap to clone; holds no session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteAuthorizationGate {
    classifier: RouteClassifier,
    forbidden_path: String,
}

impl RouteAuthorizationGate {
    #[must_use]
    pub fn new(classifier: RouteClassifier, forbidden_path: impl Into<String>) -> Self {
        Self { classifier, forbidden_path: forbidden_path.into() }
    }

    #[must_use]
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(RouteClassifier::from_config(config), config.forbidden_path.clone())
    }

    #[must_use]
    pub fn classifier(&self) -> &RouteClassifier {
        &self.classifier
    }

    /// Decide for `path` under `state`. First matching rule wins.
    #[must_use]
    pub fn evaluate(&self, path: &str, state: &SessionState) -> GateDecision {
        if state.is_loading() {
            return GateDecision::RenderPlaceholder;
        }
        match self.classifier.classify(path) {
            RouteClass::Public => GateDecision::RenderChildren,
            RouteClass::Admin => match state.current_user() {
                None => GateDecision::RenderPlaceholder,
                Some(user) if user.role.grants(Role::Admin) => GateDecision::RenderChildren,
                Some(_) => GateDecision::Redirect(self.forbidden_path.clone()),
            },
            RouteClass::Private => {
                if state.is_authenticated() {
                    GateDecision::RenderChildren
                } else {
                    GateDecision::RenderPlaceholder
                }
            }
        }
    }
}
