use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_roundtrips_items() {
    let storage = MemoryStorage::new();
    storage.set_item("k", "v").expect("set");
    assert_eq!(storage.get_item("k").expect("get"), Some("v".to_owned()));
}

#[test]
fn memory_storage_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("absent").expect("get"), None);
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove_item("absent").is_ok());
}

#[test]
fn memory_storage_with_entries_seeds_values() {
    let storage = MemoryStorage::with_entries([("a", "1"), ("b", "2")]);
    assert_eq!(storage.get_item("b").expect("get"), Some("2".to_owned()));
    storage.remove_item("a").expect("remove");
    assert_eq!(storage.get_item("a").expect("get"), None);
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn load_json_absent_key_is_none() {
    let storage = MemoryStorage::new();
    let value: Option<Vec<u32>> = load_json(&storage, "nums").expect("load");
    assert_eq!(value, None);
}

#[test]
fn save_then_load_json_value() {
    let storage = MemoryStorage::new();
    save_json(&storage, "nums", &vec![1_u32, 2, 3]).expect("save");
    let value: Option<Vec<u32>> = load_json(&storage, "nums").expect("load");
    assert_eq!(value, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_reports_corrupt_value() {
    let storage = MemoryStorage::with_entries([("nums", "{not json")]);
    let err = load_json::<Vec<u32>>(&storage, "nums").expect_err("corrupt");
    assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == "nums"));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_in_native_tests() {
    let storage = BrowserStorage;
    assert_eq!(storage.get_item("k"), Err(StorageError::Unavailable));
    assert_eq!(storage.set_item("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove_item("k"), Err(StorageError::Unavailable));
}
