use std::rc::Rc;

use super::*;
use crate::util::storage::MemoryStorage;

struct BrokenStorage;

impl TabStorage for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected { op: "write", key: key.to_owned() })
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn fresh_guard_is_not_armed() {
    let guard = RedirectLoopGuard::new(MemoryStorage::new(), "g");
    assert!(!guard.is_armed());
}

#[test]
fn arm_then_clear() {
    let storage = Rc::new(MemoryStorage::new());
    let guard = RedirectLoopGuard::new(Rc::clone(&storage), "g");

    guard.arm().unwrap();
    assert!(guard.is_armed());
    assert_eq!(storage.peek("g").as_deref(), Some("1"));

    guard.clear();
    assert!(!guard.is_armed());
    assert_eq!(storage.peek("g"), None);
}

#[test]
fn guard_uses_its_own_key_only() {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item("other", "1").unwrap();
    let guard = RedirectLoopGuard::new(Rc::clone(&storage), "g");
    assert!(!guard.is_armed());
    guard.clear();
    assert_eq!(storage.peek("other").as_deref(), Some("1"));
}

#[test]
fn unreadable_storage_counts_as_armed() {
    let guard = RedirectLoopGuard::new(BrokenStorage, "g");
    assert!(guard.is_armed());
}

#[test]
fn unwritable_storage_reports_arm_failure() {
    let guard = RedirectLoopGuard::new(BrokenStorage, "g");
    assert_eq!(guard.arm(), Err(StorageError::Rejected { op: "write", key: "g".to_owned() }));
    guard.clear();
}

#[test]
fn debug_shows_key() {
    let guard = RedirectLoopGuard::new(MemoryStorage::new(), "portal.flag");
    assert!(format!("{guard:?}").contains("portal.flag"));
}

#[test]
fn session_logging_shares_one_target() {
    assert_eq!(crate::state::LOG_TARGET, "portal::session");
}
