//! Generates the lazily cached slice types.
//!
//! [`Slice`](crate::Slice) and [`SyncSlice`](crate::SyncSlice) differ only in the
//! once-cell that holds their caches, so both are expanded from one definition.

macro_rules! lazy_slice {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident in $cell:ident;
    ) => {
        $(#[$attr])*
        $vis struct $name<'a, T, E: $crate::core::KeyExtractor<T>> {
            items: &'a [T],
            extractor: E,
            grouping: $cell<$crate::core::Grouping<E::Key>>,
            ascending: $cell<$crate::view::SortedView<E::Key>>,
            descending: $cell<$crate::view::SortedView<E::Key>>,
        }

        impl<'a, T, F, K> $name<'a, T, F>
        where
            F: Fn(&T) -> K,
            K: Ord + ::std::hash::Hash + Clone,
        {
            /// Wraps `items`, keyed by the closure `extractor`.
            ///
            /// Nothing is computed until the first lookup or sort.
            pub fn new(items: &'a [T], extractor: F) -> Self {
                Self::with_extractor(items, extractor)
            }
        }

        impl<'a, T, E: $crate::core::KeyExtractor<T>> $name<'a, T, E> {
            /// Wraps `items`, keyed by any [`KeyExtractor`](crate::KeyExtractor).
            pub fn with_extractor(items: &'a [T], extractor: E) -> Self {
                Self {
                    items,
                    extractor,
                    grouping: $cell::new(),
                    ascending: $cell::new(),
                    descending: $cell::new(),
                }
            }

            /// Returns the number of items.
            #[inline]
            pub fn len(&self) -> usize {
                self.items.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            /// The source items, in their original order.
            #[inline]
            pub fn items(&self) -> &'a [T] {
                self.items
            }

            /// The key extractor this slice was built with.
            pub fn extractor(&self) -> &E {
                &self.extractor
            }

            /// Looks up where the key carried by `item` first occurs in the source.
            ///
            /// Returns `Ok(index)` of the first source item with an equal key, or
            /// `Err(len)` if no item carries it. Lookup is by key only, so this
            /// answers "where does this key first appear", not "where is this exact
            /// item".
            pub fn search_from_original(&self, item: &T) -> Result<usize, usize> {
                self.search_key(&$crate::core::KeyExtractor::extract_key(&self.extractor, item))
            }

            /// Looks up where `key` first occurs in the source.
            pub fn search_key(&self, key: &E::Key) -> Result<usize, usize> {
                $crate::core::found_or_end(self.grouping().first_index(key), self.len())
            }

            /// Returns the items sorted by ascending key.
            ///
            /// Equal keys keep their original relative order. The view is computed
            /// on the first call and shared by every later call.
            pub fn sort_by_asc(&self) -> $crate::view::Sorted<'_, T, E> {
                $crate::view::Sorted::new(self.items, self.ascending_view(), &self.extractor)
            }

            /// Returns the items sorted by descending key.
            ///
            /// This is exactly the reverse of [`sort_by_asc`](Self::sort_by_asc), so
            /// equal keys appear in reverse original order. Computing it caches the
            /// ascending view as well.
            pub fn sort_by_desc(&self) -> $crate::view::Sorted<'_, T, E> {
                $crate::view::Sorted::new(self.items, self.descending_view(), &self.extractor)
            }

            /// Looks up the first position of `item`'s key in the ascending view.
            pub fn search_from_sorted_by_asc(&self, item: &T) -> Result<usize, usize> {
                self.sort_by_asc().search(item)
            }

            /// Looks up the first position of `item`'s key in the descending view.
            pub fn search_from_sorted_by_desc(&self, item: &T) -> Result<usize, usize> {
                self.sort_by_desc().search(item)
            }

            /// Reports the furthest derivation computed so far.
            pub fn readiness(&self) -> $crate::core::Readiness {
                use $crate::core::Readiness;

                if self.descending.get().is_some() {
                    Readiness::Descending
                } else if self.ascending.get().is_some() {
                    Readiness::Ascending
                } else if self.grouping.get().is_some() {
                    Readiness::Grouped
                } else {
                    Readiness::Ungrouped
                }
            }

            /// Computes every cache up front.
            pub fn prepare(&self) -> &Self {
                self.descending_view();
                self
            }

            fn grouping(&self) -> &$crate::core::Grouping<E::Key> {
                self.grouping
                    .get_or_init(|| $crate::algo::group(self.items, &self.extractor))
            }

            fn ascending_view(&self) -> &$crate::view::SortedView<E::Key> {
                self.ascending
                    .get_or_init(|| $crate::algo::ascending(self.grouping(), self.len()))
            }

            fn descending_view(&self) -> &$crate::view::SortedView<E::Key> {
                self.descending.get_or_init(|| {
                    $crate::algo::descending(self.items, &self.extractor, self.ascending_view())
                })
            }
        }

        impl<T: ::std::fmt::Debug, E: $crate::core::KeyExtractor<T>> ::std::fmt::Debug
            for $name<'_, T, E>
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("items", &self.items)
                    .field("readiness", &self.readiness())
                    .finish()
            }
        }
    };
}
