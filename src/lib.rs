mod error;

pub mod prelude;
pub mod report;
pub mod shell;
pub mod sources;
pub mod store;
pub mod testing;
pub mod values;

#[doc(hidden)]
/// This is a hidden module to make the macros defined on this crate available for the users.
pub mod __dependencies {
    pub use paste;
    pub use proptest;
    pub use test_strategy;
}

/// Generates the ordered-store property suite for a record type.
///
/// The type must be in scope of the invocation and implement `Keyed`,
/// `Arbitrary`, `Clone`, `Debug` and `PartialEq`.
#[macro_export]
macro_rules! test_ordered_store_properties {
    ($type:ident) => {
        $crate::__dependencies::paste::paste! {
            mod [<test_ordered_store_$type:snake>] {
                use $crate::__dependencies::{
                    proptest::prelude::*,
                    test_strategy,
                };
                use $crate::prelude::{Keyed, OrderedStore, StoreError};

                use super::$type;

                #[cfg_attr(coverage_nightly, coverage(off))]
                fn build_store(records: Vec<$type>) -> OrderedStore<$type> {
                    let mut store = OrderedStore::new();
                    for record in records {
                        // Bulk-load policy: duplicate keys are skipped.
                        let _ = store.insert(record);
                    }
                    store
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_traversal_is_strictly_ascending(records: Vec<$type>) {
                    let store = build_store(records);

                    let keys: Vec<_> = store.iter().map(|record| record.key()).collect();
                    prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_insert_then_get(record: $type) {
                    let mut store = OrderedStore::new();
                    store.insert(record.clone())?;

                    prop_assert_eq!(store.get(record.key()), Some(&record));
                    prop_assert_eq!(store.len(), 1);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_duplicate_insert_is_rejected(record: $type) {
                    let mut store = OrderedStore::new();
                    store.insert(record.clone())?;

                    $crate::prop_assert_does_not_change!(
                        prop_assert_eq!(
                            store.insert(record.clone()),
                            Err(StoreError::DuplicateKey)
                        ),
                        store.iter().cloned().collect::<Vec<_>>()
                    );
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_remove_all_in_insertion_order(records: Vec<$type>) {
                    let mut store = build_store(records.clone());

                    for record in &records {
                        match store.remove(record.key()) {
                            Ok(removed) => {
                                prop_assert!(removed.key() == record.key());
                                prop_assert!(store.get(record.key()).is_none());
                            }
                            // Duplicates in the input were never inserted, so a
                            // second removal of the same key misses.
                            Err(StoreError::NotFound) => {}
                            Err(error) => prop_assert!(false, "unexpected error: {}", error),
                        }

                        let keys: Vec<_> = store.iter().map(|r| r.key()).collect();
                        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
                    }

                    prop_assert!(store.is_empty());
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_update_rejects_foreign_key(a: $type, b: $type) {
                    prop_assume!(a.key() != b.key());

                    let mut store = OrderedStore::new();
                    store.insert(a.clone())?;

                    $crate::prop_assert_does_not_change!(
                        prop_assert_eq!(
                            store.update(a.key(), b.clone()),
                            Err(StoreError::KeyMismatch)
                        ),
                        store.iter().cloned().collect::<Vec<_>>()
                    );
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_update_in_place(record: $type) {
                    let mut store = OrderedStore::new();
                    store.insert(record.clone())?;
                    store.update(record.key(), record.clone())?;

                    prop_assert_eq!(store.get(record.key()), Some(&record));
                    prop_assert_eq!(store.len(), 1);
                }

                #[cfg_attr(coverage_nightly, coverage(off))]
                #[test_strategy::proptest(fork = false)]
                fn test_empty_store_behaviour(record: $type) {
                    let mut store = OrderedStore::<$type>::new();

                    prop_assert!(store.get(record.key()).is_none());
                    prop_assert_eq!(
                        store.remove(record.key()).map(|_| ()),
                        Err(StoreError::NotFound)
                    );
                    prop_assert_eq!(
                        store.update(record.key(), record.clone()),
                        Err(StoreError::NotFound)
                    );
                    prop_assert_eq!(store.iter().count(), 0);
                }
            }
        }
    };
}

#[macro_export]
macro_rules! prop_assert_does_not_change {
    ($action: expr, $value: expr) => {
        let old_value = $value.clone();

        $action;

        prop_assert_eq!($value, old_value);
    };
}
