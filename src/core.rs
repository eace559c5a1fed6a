//! Core traits and types for Swort.
//!
//! This module defines:
//! - [`KeyExtractor`]: The trait that derives a sort key from an item.
//! - [`Readiness`]: How far a slice has advanced through its lazy derivations.
//! - Grouping: Internal per-key grouping of the source, built once per slice.

use std::collections::HashMap;
use std::hash::Hash;

/// Derives the sort key of an item.
///
/// Every `Fn(&T) -> K` closure or function pointer implements this trait, so most
/// callers never implement it by hand.
///
/// # Contract
///
/// The extractor must be pure: the same item must always yield the same key for
/// the lifetime of the slice that uses it. This is a caller obligation. A
/// non-deterministic extractor is not detected, and lookups against it return
/// unspecified (but memory-safe) positions.
///
/// # Examples
///
/// Implementing for a named extractor:
///
/// ```
/// use swort::core::KeyExtractor;
///
/// struct Account {
///     balance: i64,
/// }
///
/// struct ByBalance;
///
/// impl KeyExtractor<Account> for ByBalance {
///     type Key = i64;
///
///     fn extract_key(&self, item: &Account) -> i64 {
///         item.balance
///     }
/// }
/// ```
pub trait KeyExtractor<T: ?Sized> {
    /// The totally ordered key type. `Hash` backs the O(1) position maps.
    type Key: Ord + Hash + Clone;

    /// Returns the key of `item`.
    fn extract_key(&self, item: &T) -> Self::Key;
}

impl<T: ?Sized, K, F> KeyExtractor<T> for F
where
    F: Fn(&T) -> K,
    K: Ord + Hash + Clone,
{
    type Key = K;

    #[inline(always)]
    fn extract_key(&self, item: &T) -> K {
        self(item)
    }
}

/// The furthest lazy derivation a slice has completed.
///
/// States only ever advance. Requesting the descending view always caches the
/// ascending one first, so `Descending` implies both sorted views are cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Readiness {
    /// Nothing computed yet.
    Ungrouped,
    /// Items grouped by key; first original positions known.
    Grouped,
    /// Ascending view cached.
    Ascending,
    /// Descending view cached.
    Descending,
}

/// Items of the source grouped by key.
///
/// `keys` lists every distinct key once, in order of first appearance.
/// `members[key]` lists the source indices carrying that key in ascending order,
/// so its first entry is the key's first original position.
#[derive(Debug)]
pub(crate) struct Grouping<K> {
    pub keys: Vec<K>,
    pub members: HashMap<K, Vec<usize>>,
}

impl<K: Eq + Hash> Grouping<K> {
    /// Index of the first source item with `key`.
    #[inline]
    pub fn first_index(&self, key: &K) -> Option<usize> {
        self.members.get(key).and_then(|group| group.first().copied())
    }

    pub fn distinct(&self) -> usize {
        self.keys.len()
    }
}

/// Maps a position lookup onto the `binary_search` convention.
///
/// `Ok(index)` when the key is present, `Err(len)` otherwise: an insertion point
/// one past the end.
#[inline]
pub(crate) fn found_or_end(position: Option<usize>, len: usize) -> Result<usize, usize> {
    position.ok_or(len)
}
