//! Tests for the pack-size stores.

use packsmith_config::{StoreBackend, StoreConfig};

use super::*;

fn file_config(dir: &tempfile::TempDir) -> StoreConfig {
    StoreConfig {
        backend: StoreBackend::File,
        path: dir.path().join("sizes.json"),
        ..StoreConfig::default()
    }
}

#[test]
fn test_memory_add_remove() {
    let store = MemoryStore::new(8);
    assert!(store.is_empty());

    assert!(store.add(500).unwrap());
    assert!(store.add(5000).unwrap());
    assert!(store.add(250).unwrap());
    assert!(!store.add(500).unwrap());
    assert_eq!(store.sizes().unwrap(), vec![5000, 500, 250]);
    assert_eq!(store.len(), 3);

    store.remove(500).unwrap();
    assert_eq!(store.sizes().unwrap(), vec![5000, 250]);
    assert!(matches!(store.remove(500), Err(StoreError::NotFound(500))));
}

#[test]
fn test_zero_size_rejected() {
    let store = MemoryStore::new(8);
    assert!(matches!(store.add(0), Err(StoreError::InvalidSize)));
    assert!(matches!(
        MemoryStore::with_sizes([250, 0], 8),
        Err(StoreError::InvalidSize)
    ));
}

#[test]
fn test_capacity() {
    let store = MemoryStore::new(2);
    store.add(1).unwrap();
    store.add(2).unwrap();
    // Re-adding an existing size is not an insert.
    assert!(!store.add(2).unwrap());
    assert!(matches!(store.add(3), Err(StoreError::Capacity { max: 2 })));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_prefilled_capacity() {
    // Duplicates collapse before the limit applies.
    let store = MemoryStore::with_sizes([5, 3, 5], 2).unwrap();
    assert_eq!(store.sizes().unwrap(), vec![5, 3]);
    assert!(matches!(
        MemoryStore::with_sizes([5, 3, 1], 2),
        Err(StoreError::Capacity { max: 2 })
    ));
}

#[test]
fn test_seed_only_when_empty() {
    let store = MemoryStore::new(8);
    assert!(store.seed(&[250, 500]).unwrap());
    assert!(!store.seed(&[1000]).unwrap());
    assert_eq!(store.sizes().unwrap(), vec![500, 250]);
}

#[test]
fn test_seed_all_or_nothing() {
    let store = MemoryStore::new(2);
    assert!(matches!(
        store.seed(&[1, 2, 3]),
        Err(StoreError::Capacity { max: 2 })
    ));
    assert!(store.is_empty());
}

#[test]
fn test_pack_sizes() {
    let store = MemoryStore::new(8);
    assert_eq!(store.pack_sizes().unwrap(), None);

    store.add(250).unwrap();
    store.add(1000).unwrap();
    let sizes = store.pack_sizes().unwrap().unwrap();
    assert_eq!(sizes.to_vec(), vec![1000, 250]);
}

#[test]
fn test_file_missing_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("absent.json"), 8).unwrap();
    assert!(store.is_empty());
    assert!(!dir.path().join("absent.json").exists());
}

#[test]
fn test_file_write_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sizes.json");

    let store = FileStore::open(&path, 8).unwrap();
    store.add(250).unwrap();
    store.add(5000).unwrap();
    store.remove(250).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json, serde_json::json!({ "sizes": [5000] }));

    let reopened = FileStore::open(&path, 8).unwrap();
    assert_eq!(reopened.sizes().unwrap(), vec![5000]);
}

#[test]
fn test_file_failed_change_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sizes.json");

    let store = FileStore::open(&path, 8).unwrap();
    assert!(store.remove(42).is_err());
    assert!(store.add(0).is_err());
    assert!(!path.exists());
}

#[test]
fn test_file_corrupt_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sizes.json");
    std::fs::write(&path, "{\"sizes\": [250, ").unwrap();
    assert!(matches!(FileStore::open(&path, 8), Err(StoreError::Json(_))));

    std::fs::write(&path, "{\"sizes\": [250, 0]}").unwrap();
    assert!(matches!(
        FileStore::open(&path, 8),
        Err(StoreError::InvalidSize)
    ));
}

#[test]
fn test_open_store_backends() {
    let memory = open_store(&StoreConfig::default()).unwrap();
    assert!(memory.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    let file = open_store(&config).unwrap();
    file.add(750).unwrap();
    assert!(config.path.exists());
}

#[test]
fn test_open_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let store = open_seeded(&config).unwrap();
    assert_eq!(store.sizes().unwrap(), vec![5000, 2000, 1000, 500, 250]);

    // A removal survives a restart; seeding does not refill a non-empty file.
    store.remove(2000).unwrap();
    let store = open_seeded(&config).unwrap();
    assert_eq!(store.sizes().unwrap(), vec![5000, 1000, 500, 250]);

    let unseeded = StoreConfig {
        seed_defaults: false,
        ..StoreConfig::default()
    };
    assert!(open_seeded(&unseeded).unwrap().is_empty());
}

#[test]
fn test_concurrent_adds() {
    let store = std::sync::Arc::new(MemoryStore::new(64));
    let handles: Vec<_> = (1..=8u64)
        .map(|t| {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..4 {
                    store.add(t * 100 + i).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.len(), 32);
}
