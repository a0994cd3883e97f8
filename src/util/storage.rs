//! Tab-scoped key/value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The redirect loop guard needs a slot that survives a full page navigation
//! but stays private to one tab. In the browser that is `sessionStorage`;
//! server renders and tests use [`MemoryStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage object is reachable (no window, storage disabled).
    #[error("tab storage unavailable")]
    Unavailable,

    /// The browser refused the operation (quota, privacy mode).
    #[error("tab storage rejected {op} for '{key}'")]
    Rejected { op: &'static str, key: String },
}

/// Minimal string storage scoped to the current tab.
pub trait TabStorage {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the read is rejected.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the write is rejected.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or the removal is rejected.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`. Unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TabStorage for SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Rejected { op: "read", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Rejected { op: "write", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Rejected { op: "remove", key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory storage for tests and server renders.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a key, bypassing the trait.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl TabStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<T: TabStorage + ?Sized> TabStorage for std::rc::Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
