//! Utility helpers shared across portal modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, navigation)
//! and pure routing policy from components, which keeps them testable natively.

pub mod auth;
pub mod navigation;
pub mod routes;
pub mod storage;
