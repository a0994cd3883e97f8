//! One-shot redirect loop guard.
//!
//! DESIGN
//! ======
//! A single flag in tab-scoped storage, armed right before leaving for the
//! identity provider and cleared by the next probe either way. Seeing it armed
//! on an unauthenticated probe means the provider already had one chance.
//!
//! This is a best-effort, ownerless lock. Every tab has its own
//! `sessionStorage`, so several open tabs can each redirect once.

#[cfg(test)]
#[path = "loop_guard_test.rs"]
mod loop_guard_test;

use super::LOG_TARGET;
use crate::util::storage::{StorageError, TabStorage};

const ARMED: &str = "1";

pub struct RedirectLoopGuard {
    storage: Box<dyn TabStorage>,
    key: String,
}

impl RedirectLoopGuard {
    pub fn new(storage: impl TabStorage + 'static, key: impl Into<String>) -> Self {
        Self { storage: Box::new(storage), key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a redirect already happened in this tab.
    ///
    /// An unreadable flag counts as armed so a broken storage can't cause an
    /// automatic redirect loop.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        match self.storage.get_item(&self.key) {
            Ok(value) => value.is_some(),
            Err(err) => {
                log::warn!(target: LOG_TARGET, "loop guard unreadable, assuming armed: {err}");
                true
            }
        }
    }

    /// Mark that a redirect is about to happen.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag can't be persisted.
    pub fn arm(&self) -> Result<(), StorageError> {
        self.storage.set_item(&self.key, ARMED)
    }

    /// Reset the guard. Failures are logged; there is nothing else to do.
    pub fn clear(&self) {
        if let Err(err) = self.storage.remove_item(&self.key) {
            log::warn!(target: LOG_TARGET, "loop guard could not be cleared: {err}");
        }
    }
}

impl std::fmt::Debug for RedirectLoopGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedirectLoopGuard").field("key", &self.key).finish_non_exhaustive()
    }
}
