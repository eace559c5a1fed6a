//! Single-threaded sorted-view adapter.
//!
//! [`Slice`] borrows a sequence and derives its groupings and sorted views
//! lazily, at most once each. The caches live in [`OnceCell`]s, so a `Slice` can
//! be moved between threads but not shared by them; use
//! [`SyncSlice`](crate::sync::SyncSlice) for shared access.

use std::cell::OnceCell;

lazy_slice! {
    /// An immutable sequence with cached sorted views and key lookups.
    ///
    /// The source is borrowed for the lifetime of the slice, so it cannot change
    /// while any position handed out by the slice is still in use. Every sorted
    /// view is a new ordering of indices; the source itself is never reordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use swort::Slice;
    ///
    /// let data = [5, 2, 6, 3, 1, 5, 4];
    /// let slice = Slice::new(&data, |v: &i32| *v);
    ///
    /// assert_eq!(slice.len(), 7);
    /// assert_eq!(slice.sort_by_asc().to_vec(), vec![1, 2, 3, 4, 5, 5, 6]);
    /// assert_eq!(slice.sort_by_desc().to_vec(), vec![6, 5, 5, 4, 3, 2, 1]);
    ///
    /// // First occurrence wins for duplicate keys.
    /// assert_eq!(slice.search_from_original(&5), Ok(0));
    /// assert_eq!(slice.search_from_original(&7), Err(7));
    /// ```
    pub struct Slice in OnceCell;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyExtractor, Readiness};
    use std::cell::Cell;

    #[derive(Clone, Debug, PartialEq)]
    struct Record {
        value: i64,
    }

    fn given() -> Vec<Record> {
        [5, 2, 6, 3, 1, 5, 4]
            .into_iter()
            .map(|value| Record { value })
            .collect()
    }

    #[test]
    fn lookups_advance_readiness() {
        let data = given();
        let slice = Slice::new(&data, |r: &Record| r.value);
        assert_eq!(slice.readiness(), Readiness::Ungrouped);

        assert_eq!(slice.len(), 7);
        assert_eq!(slice.readiness(), Readiness::Ungrouped);

        assert_eq!(slice.search_key(&4), Ok(6));
        assert_eq!(slice.readiness(), Readiness::Grouped);

        slice.sort_by_asc();
        assert_eq!(slice.readiness(), Readiness::Ascending);

        slice.sort_by_desc();
        assert_eq!(slice.readiness(), Readiness::Descending);
    }

    #[test]
    fn descending_forces_ascending() {
        let data = given();
        let slice = Slice::new(&data, |r: &Record| r.value);

        slice.sort_by_desc();
        assert!(slice.ascending.get().is_some());
        assert!(slice.grouping.get().is_some());
    }

    #[test]
    fn extractor_runs_once_per_derivation() {
        let data = given();
        let calls = Cell::new(0);
        let slice = Slice::new(&data, |r: &Record| {
            calls.set(calls.get() + 1);
            r.value
        });

        slice.sort_by_asc();
        slice.sort_by_asc();
        // Grouping is the only pass that extracts keys for the ascending view.
        assert_eq!(calls.get(), data.len());

        slice.sort_by_desc();
        slice.sort_by_desc();
        assert_eq!(calls.get(), 2 * data.len());

        let _ = slice.search_from_original(&Record { value: 3 });
        assert_eq!(calls.get(), 2 * data.len() + 1);
    }

    #[test]
    fn named_extractor() {
        struct Negated;

        impl KeyExtractor<Record> for Negated {
            type Key = i64;

            fn extract_key(&self, item: &Record) -> i64 {
                -item.value
            }
        }

        let data = given();
        let slice = Slice::with_extractor(&data, Negated);
        let values: Vec<i64> = slice.sort_by_asc().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![6, 5, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn prepare_computes_everything() {
        let data = given();
        let slice = Slice::new(&data, |r: &Record| r.value);
        assert_eq!(slice.prepare().readiness(), Readiness::Descending);
    }

    #[test]
    fn debug_shows_readiness() {
        let data = [1, 2];
        let slice = Slice::new(&data, |v: &i32| *v);
        assert_eq!(
            format!("{:?}", slice),
            "Slice { items: [1, 2], readiness: Ungrouped }"
        );
    }
}
