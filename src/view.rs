//! Sorted views.
//!
//! A [`SortedView`] is the cached result of a sort: a permutation of source
//! indices plus the first position of every key inside that permutation. It owns
//! no items, which keeps it free of any bound on the item type and lets it be
//! shared read-only across threads once built.
//!
//! A [`Sorted`] is the borrowed handle a slice hands out. It pairs a view with
//! the source items and the key extractor, so it can resolve items and search by
//! item as well as by key.

use crate::core::{KeyExtractor, found_or_end};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

/// A cached sort order over a source sequence.
#[derive(Clone, Debug)]
pub struct SortedView<K> {
    order: Vec<usize>,
    first_index: HashMap<K, usize>,
}

impl<K> SortedView<K> {
    pub(crate) fn new(order: Vec<usize>, first_index: HashMap<K, usize>) -> Self {
        Self { order, first_index }
    }

    /// Returns the number of items in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Source indices in view order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Number of distinct keys in the view.
    pub fn distinct(&self) -> usize {
        self.first_index.len()
    }
}

impl<K: Eq + Hash> SortedView<K> {
    /// Looks up the first position of `key` in this view.
    ///
    /// Returns `Ok(position)` if the key occurs, otherwise `Err(len)`, an insertion
    /// point one past the end.
    #[inline]
    pub fn search_key(&self, key: &K) -> Result<usize, usize> {
        found_or_end(self.first_index.get(key).copied(), self.len())
    }
}

impl<K: Eq + Hash> PartialEq for SortedView<K> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.first_index == other.first_index
    }
}

impl<K: Eq + Hash> Eq for SortedView<K> {}

/// A sorted view bound to the items and extractor it was derived from.
///
/// Handles are cheap to copy; all of them returned by the same slice for the same
/// direction point at one cached view.
pub struct Sorted<'s, T, E: KeyExtractor<T> + ?Sized> {
    items: &'s [T],
    view: &'s SortedView<E::Key>,
    extractor: &'s E,
}

impl<'s, T, E: KeyExtractor<T> + ?Sized> Sorted<'s, T, E> {
    pub(crate) fn new(items: &'s [T], view: &'s SortedView<E::Key>, extractor: &'s E) -> Self {
        Self {
            items,
            view,
            extractor,
        }
    }

    /// Looks up the first position, within this view, of the key `item` carries.
    ///
    /// Lookup is by key only: any item with the same key gives the same answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use swort::Slice;
    ///
    /// let data = [5, 2, 6, 3, 1, 5, 4];
    /// let slice = Slice::new(&data, |v: &i32| *v);
    ///
    /// assert_eq!(slice.sort_by_asc().search(&6), Ok(6));
    /// assert_eq!(slice.sort_by_desc().search(&4), Ok(3));
    /// assert_eq!(slice.sort_by_desc().search(&7), Err(7));
    /// ```
    #[inline]
    pub fn search(&self, item: &T) -> Result<usize, usize> {
        self.view.search_key(&self.extractor.extract_key(item))
    }

    /// Looks up the first position of `key` within this view.
    #[inline]
    pub fn search_key(&self, key: &E::Key) -> Result<usize, usize> {
        self.view.search_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.view.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// The underlying cached view.
    #[inline]
    pub fn view(&self) -> &'s SortedView<E::Key> {
        self.view
    }

    /// Source indices in view order.
    #[inline]
    pub fn indices(&self) -> &'s [usize] {
        self.view.indices()
    }

    /// Returns the item at `position` in view order.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&'s T> {
        let items = self.items;
        self.view.indices().get(position).map(|&i| &items[i])
    }

    pub fn first(&self) -> Option<&'s T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&'s T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterates the items in view order.
    pub fn iter(&self) -> Iter<'s, T> {
        Iter {
            items: self.items,
            order: self.view.indices().iter(),
        }
    }

    /// Copies the items out in view order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, E: KeyExtractor<T> + ?Sized> Clone for Sorted<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E: KeyExtractor<T> + ?Sized> Copy for Sorted<'_, T, E> {}

impl<T: fmt::Debug, E: KeyExtractor<T> + ?Sized> fmt::Debug for Sorted<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'s, T, E: KeyExtractor<T> + ?Sized> IntoIterator for &Sorted<'s, T, E> {
    type Item = &'s T;
    type IntoIter = Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, T, E: KeyExtractor<T> + ?Sized> IntoIterator for Sorted<'s, T, E> {
    type Item = &'s T;
    type IntoIter = Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T, E> serde::Serialize for Sorted<'_, T, E>
where
    T: serde::Serialize,
    E: KeyExtractor<T> + ?Sized,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over the items of a [`Sorted`] view, in view order.
#[derive(Clone, Debug)]
pub struct Iter<'s, T> {
    items: &'s [T],
    order: std::slice::Iter<'s, usize>,
}

impl<'s, T> Iterator for Iter<'s, T> {
    type Item = &'s T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.order.next().map(|&i| &items[i])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.order.next_back().map(|&i| &items[i])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
