//! Property tests for blob store ordering and capacity rules

use blob_store::{BlobStore, CreateError, MAX_BLOBS, MAX_BLOB_LEN};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

fn valid_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.]{1,11}"
}

proptest! {
    #[test]
    fn distinct_names_list_in_call_order(names in btree_set(valid_name(), 0..=MAX_BLOBS)) {
        // Reverse the sorted set so call order differs from name order.
        let names: Vec<String> = names.into_iter().rev().collect();
        let mut store = BlobStore::new();

        for name in &names {
            prop_assert!(store.create(name, name.as_bytes()).is_ok());
        }

        let listed: Vec<&str> = store.list().collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(listed, expected);
        prop_assert_eq!(store.len(), names.len());
    }

    #[test]
    fn capacity_overflow_rejects_any_name(extra in ".{0,20}", content in vec(any::<u8>(), 0..64)) {
        let mut store = BlobStore::new();
        for i in 0..MAX_BLOBS {
            store.create(&format!("slot{}", i), b"x").unwrap();
        }

        prop_assert_eq!(store.create(&extra, &content), Err(CreateError::CapacityExceeded));
        prop_assert_eq!(store.len(), MAX_BLOBS);
    }

    #[test]
    fn duplicate_never_alters_content(
        name in valid_name(),
        first in vec(any::<u8>(), 0..=MAX_BLOB_LEN),
        second in vec(any::<u8>(), 0..=MAX_BLOB_LEN),
    ) {
        let mut store = BlobStore::new();
        store.create(&name, &first).unwrap();

        prop_assert_eq!(store.create(&name, &second), Err(CreateError::DuplicateName));
        prop_assert_eq!(store.lookup(&name).unwrap().content(), first.as_slice());
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn live_count_matches_occupied_slots(attempts in vec((".{0,14}", 0usize..1100), 0..40)) {
        let mut store = BlobStore::new();
        for (name, size) in &attempts {
            let content = vec![b'a'; *size];
            let _ = store.create(name, &content);
        }

        prop_assert_eq!(store.len(), store.iter().count());
        prop_assert!(store.len() <= MAX_BLOBS);
        for blob in store.iter() {
            prop_assert!(!blob.name().is_empty());
            prop_assert!(blob.name().len() < 12);
            prop_assert!(blob.len() <= MAX_BLOB_LEN);
        }
    }
}
