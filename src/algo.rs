//! Derivation algorithms behind the lazy caches.
//!
//! Each function is a pure step of the derivation chain:
//! - [`group`]: One pass over the source, grouping indices by key.
//! - [`ascending`]: Sorts the distinct keys and lays the groups out in key order.
//! - [`descending`]: Reverses an ascending view without sorting again.
//!
//! Sorting works on the distinct keys, not on the items, so the cost is
//! O(U log U + N) for U distinct keys over N items and every key is extracted
//! exactly once per derivation.

use crate::core::{Grouping, KeyExtractor};
use crate::view::SortedView;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Groups the source indices by key in a single pass.
///
/// Groups keep the original relative order of their members, and `keys` records
/// every distinct key at the moment it is first seen.
pub(crate) fn group<T, E>(items: &[T], extractor: &E) -> Grouping<E::Key>
where
    E: KeyExtractor<T> + ?Sized,
{
    let _span = tracing::trace_span!("swort::group", items = items.len()).entered();

    let mut keys = Vec::new();
    let mut members: HashMap<E::Key, Vec<usize>> = HashMap::new();

    items
        .iter()
        .enumerate()
        .for_each(|(index, item)| match members.entry(extractor.extract_key(item)) {
            Entry::Occupied(mut group) => group.get_mut().push(index),
            Entry::Vacant(slot) => {
                keys.push(slot.key().clone());
                slot.insert(vec![index]);
            }
        });

    tracing::trace!(distinct = keys.len(), "grouped");
    Grouping { keys, members }
}

/// Builds the ascending view from a grouping.
///
/// The distinct keys are sorted, then each group is written out in sorted key
/// order. Members of a group keep their original relative order, which makes the
/// result a stable sort of the source. The first index of each key is the offset
/// at which its group starts.
pub(crate) fn ascending<K>(grouping: &Grouping<K>, len: usize) -> SortedView<K>
where
    K: Ord + Hash + Clone,
{
    let _span = tracing::trace_span!("swort::ascending", items = len, distinct = grouping.distinct())
        .entered();

    // Keys are distinct, so an unstable sort cannot reorder ties.
    let mut keys: Vec<&K> = grouping.keys.iter().collect();
    keys.sort_unstable();

    // Each group starts where the previous one ended.
    let mut order = Vec::with_capacity(len);
    let mut first_index = HashMap::with_capacity(keys.len());
    keys.iter().for_each(|key| {
        if let Some(group) = grouping.members.get(*key) {
            first_index.insert((*key).clone(), order.len());
            order.extend_from_slice(group);
        }
    });
    debug_assert_eq!(order.len(), len);

    SortedView::new(order, first_index)
}

/// Builds the descending view by reversing an ascending one.
///
/// Ties therefore come out in reverse original order. First positions differ
/// under reversal, so the position map is rebuilt from the reversed order
/// rather than reused.
pub(crate) fn descending<T, E>(
    items: &[T],
    extractor: &E,
    ascending: &SortedView<E::Key>,
) -> SortedView<E::Key>
where
    E: KeyExtractor<T> + ?Sized,
{
    let _span = tracing::trace_span!("swort::descending", items = ascending.len()).entered();

    let order: Vec<usize> = ascending.indices().iter().rev().copied().collect();
    let first_index = first_occurrences(order.iter().map(|&i| extractor.extract_key(&items[i])));

    SortedView::new(order, first_index)
}

/// Maps every key in `keys` to the position of its first occurrence.
pub(crate) fn first_occurrences<K, I>(keys: I) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut first_index = HashMap::new();
    keys.into_iter().enumerate().for_each(|(position, key)| {
        first_index.entry(key).or_insert(position);
    });
    first_index
}
