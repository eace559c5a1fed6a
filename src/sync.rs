//! Thread-safe sorted-view adapter.
//!
//! [`SyncSlice`] has the same surface as [`Slice`](crate::Slice) but keeps each
//! cache in a [`OnceLock`]. Concurrent first requests for the same cache block on
//! one another and exactly one of them runs the derivation; after that every
//! access is a lock-free read. [`readiness`](SyncSlice::readiness) is a snapshot:
//! another thread may advance the state right after it returns.

use std::sync::OnceLock;

lazy_slice! {
    /// A [`Slice`](crate::Slice) that may be shared between threads.
    ///
    /// `SyncSlice` is `Sync` whenever the items, the extractor and the key type are.
    ///
    /// # Examples
    ///
    /// ```
    /// use swort::sync::SyncSlice;
    /// use std::thread;
    ///
    /// let data = vec![5, 2, 6, 3, 1, 5, 4];
    /// let slice = SyncSlice::new(&data, |v: &i32| *v);
    ///
    /// thread::scope(|s| {
    ///     for _ in 0..4 {
    ///         s.spawn(|| assert_eq!(slice.sort_by_asc().search(&6), Ok(6)));
    ///     }
    /// });
    /// ```
    pub struct SyncSlice in OnceLock;
}
