//! Networking modules for the session endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the "who am I" probe and `types` defines its wire schema.

pub mod api;
pub mod types;
