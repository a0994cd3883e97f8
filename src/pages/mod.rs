//! Routed pages.
//!
//! Pages carry no access logic of their own; `AuthGate` decides whether they
//! render at all.

pub mod admin_users;
pub mod forbidden;
pub mod home;
pub mod not_found;
