//! Leptos components around the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_gate` wraps the routed outlet and applies the gate decision;
//! `session_placeholder` is what visitors see while content is withheld.

pub mod auth_gate;
pub mod session_placeholder;
