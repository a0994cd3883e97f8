//! Session state and the store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the observable state, `loop_guard` the one-shot redirect marker,
//! and `store` the orchestrator tying probe, guard and navigation together.

/// `log` target shared by everything that touches the session.
pub const LOG_TARGET: &str = "portal::session";

pub mod auth;
pub mod loop_guard;
pub mod store;
