//! Session probe: the single "who am I" call the portal makes.
//!
//! Client-side (hydrate): a real `GET <api>/user/me` via `gloo-net`, with the
//! browser attaching the session cookie. Server-side and native builds report a
//! transient error instead of doing I/O.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures are folded into
//! [`ProbeOutcome::TransientError`] at this boundary. Callers never see a
//! `Result`, so a network blip can't be mistaken for a logout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use thiserror::Error;

use super::types::UserRecord;

/// Result of one session probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Authenticated(UserRecord),
    Unauthenticated,
    /// The probe could not complete. Not an authentication answer.
    TransientError(String),
}

/// Failures inside the HTTP probe before they become a [`ProbeOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("session request failed: {0}")]
    Transport(String),

    #[error("session response unreadable: {0}")]
    Decode(String),

    #[error("session probe unavailable outside the browser")]
    Unavailable,
}

impl From<ProbeError> for ProbeOutcome {
    fn from(err: ProbeError) -> Self {
        Self::TransientError(err.to_string())
    }
}

/// Performs the "who am I" request. No retries, no side effects.
#[async_trait(?Send)]
pub trait SessionProbe {
    async fn probe(&self) -> ProbeOutcome;
}

/// HTTP implementation against `<api>/user/me`.
#[derive(Clone, Debug)]
pub struct HttpSessionProbe {
    endpoint: String,
}

impl HttpSessionProbe {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl SessionProbe for HttpSessionProbe {
    async fn probe(&self) -> ProbeOutcome {
        #[cfg(feature = "hydrate")]
        {
            let resp = match gloo_net::http::Request::get(&self.endpoint)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => return ProbeError::Transport(e.to_string()).into(),
            };
            let status = resp.status();
            if status != 200 {
                return outcome_from_response(status, "");
            }
            match resp.text().await {
                Ok(body) => outcome_from_response(status, &body),
                Err(e) => ProbeError::Decode(e.to_string()).into(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            ProbeError::Unavailable.into()
        }
    }
}

/// Map a completed HTTP response onto a probe outcome.
///
/// Only `200` carries a user; every other status means "no session". A `200`
/// whose body does not decode is reported as transient.
#[cfg(any(test, feature = "hydrate"))]
fn outcome_from_response(status: u16, body: &str) -> ProbeOutcome {
    if status != 200 {
        return ProbeOutcome::Unauthenticated;
    }
    match serde_json::from_str::<UserRecord>(body) {
        Ok(user) => ProbeOutcome::Authenticated(user),
        Err(e) => ProbeError::Decode(e.to_string()).into(),
    }
}
