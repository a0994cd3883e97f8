use std::rc::Rc;

use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("k"), Ok(None));
    storage.set_item("k", "1").unwrap();
    assert_eq!(storage.get_item("k"), Ok(Some("1".to_owned())));
    storage.remove_item("k").unwrap();
    assert_eq!(storage.peek("k"), None);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove_item("missing"), Ok(()));
}

#[test]
fn rc_storage_shares_underlying_slots() {
    let shared = Rc::new(MemoryStorage::new());
    let handle: Rc<MemoryStorage> = Rc::clone(&shared);
    handle.set_item("flag", "1").unwrap();
    assert_eq!(shared.peek("flag").as_deref(), Some("1"));
}

#[test]
fn session_storage_is_unavailable_outside_browser() {
    let storage = SessionStorage;
    assert_eq!(storage.get_item("k"), Err(StorageError::Unavailable));
    assert_eq!(storage.set_item("k", "1"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove_item("k"), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "tab storage unavailable");
    let err = StorageError::Rejected { op: "write", key: "guard".to_owned() };
    assert_eq!(err.to_string(), "tab storage rejected write for 'guard'");
}
