//! Property tests for the entry table.

use proptest::prelude::*;
use proptest::sample::Index;

use slotfs_kernel::{EntryTable, Limits, StoreError};

fn path() -> impl Strategy<Value = String> {
    "/[a-z]{1,8}(/[a-z]{1,8}){0,2}"
}

proptest! {
    #[test]
    fn read_returns_stored_prefix(
        path in path(),
        content in prop::collection::vec(any::<u8>(), 0..3000),
        size in any::<Index>(),
    ) {
        let mut table = EntryTable::default();
        let n = size.index(content.len() + 1);
        table.create(&path, &content, n).unwrap();

        let mut buffer = vec![0u8; n];
        let read = table.read(&path, &mut buffer).unwrap();
        let expected = n.min(table.limits().content_bytes);
        prop_assert_eq!(read, expected);
        prop_assert_eq!(&buffer[..read], &content[..read]);
    }

    #[test]
    fn delete_removes(path in path(), content in "[ -~]{0,64}") {
        let mut table = EntryTable::default();
        table.write(&path, content.as_bytes()).unwrap();
        table.delete(&path).unwrap();

        prop_assert!(!table.exists(&path));
        let mut buffer = [0u8; 8];
        prop_assert!(matches!(table.read(&path, &mut buffer), Err(StoreError::NotFound(_))));
        prop_assert!(table.is_empty());
    }

    #[test]
    fn create_is_idempotent(path in path(), content in "[ -~]{0,64}") {
        let mut once = EntryTable::default();
        once.write(&path, content.as_bytes()).unwrap();

        let mut twice = EntryTable::default();
        twice.write(&path, content.as_bytes()).unwrap();
        twice.write(&path, content.as_bytes()).unwrap();

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.stat(&path), twice.stat(&path));
        prop_assert_eq!(once.read_to_vec(&path).unwrap(), twice.read_to_vec(&path).unwrap());
    }

    #[test]
    fn capacity_is_exact(kinds in prop::collection::vec(any::<bool>(), 1..40)) {
        let slots = kinds.len();
        let mut table = EntryTable::new(Limits::new(slots, 16, 16));
        for (i, is_dir) in kinds.iter().enumerate() {
            let path = format!("/e{i}");
            if *is_dir {
                table.make_directory(&path).unwrap();
            } else {
                table.write(&path, b"x").unwrap();
            }
        }
        prop_assert!(table.is_full());

        let overflow = table.write("/overflow", b"x");
        prop_assert!(matches!(overflow, Err(StoreError::CapacityExceeded { .. })), "expected CapacityExceeded, got {:?}", overflow);
        let overflow_dir = table.make_directory("/overflow");
        prop_assert!(overflow_dir.is_err());
        prop_assert_eq!(table.len(), slots);
        prop_assert!(!table.exists("/overflow"));
    }

    #[test]
    fn make_directory_twice(path in path()) {
        let mut table = EntryTable::default();
        table.make_directory(&path).unwrap();
        table.make_directory(&path).unwrap();
        prop_assert_eq!(table.len(), 1);
        prop_assert!(table.is_directory(&path));
    }

    #[test]
    fn long_names_truncate_on_char_boundary(name in "[a-zé漢]{1,80}") {
        let mut table = EntryTable::default();
        let path = format!("/{name}");
        table.write(&path, b"data").unwrap();

        let info = table.stat(&path).unwrap();
        prop_assert!(info.name.len() <= table.limits().name_bytes);
        prop_assert!(name.starts_with(&info.name));
        prop_assert!(table.exists(&path));
    }
}
