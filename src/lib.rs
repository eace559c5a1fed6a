//! # Swort
//!
//! `swort` wraps an immutable sequence and hands out sorted views of it without
//! re-sorting or re-scanning on every call.
//!
//! A [`Slice`] borrows the items together with a key extractor and lazily derives,
//! at most once each:
//!
//! - a grouping of the items by key, which answers "where does this key first
//!   appear in the original order" in O(1);
//! - an **ascending** view, a stable sort of the items by key;
//! - a **descending** view, the exact reverse of the ascending one.
//!
//! Each view answers "where does this key first appear in this order" in O(1) as
//! well.
//!
//! ## Usage
//!
//! ```rust
//! use swort::Slice;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Order {
//!     id: u32,
//!     price: i64,
//! }
//!
//! let orders = vec![
//!     Order { id: 1, price: 30 },
//!     Order { id: 2, price: 10 },
//!     Order { id: 3, price: 30 },
//! ];
//!
//! let slice = Slice::new(&orders, |o: &Order| o.price);
//!
//! let ids: Vec<u32> = slice.sort_by_asc().iter().map(|o| o.id).collect();
//! assert_eq!(ids, vec![2, 1, 3]);
//!
//! let ids: Vec<u32> = slice.sort_by_desc().iter().map(|o| o.id).collect();
//! assert_eq!(ids, vec![3, 1, 2]);
//!
//! // Lookups go by key: any order priced 30 first appears at index 0.
//! assert_eq!(slice.search_from_original(&Order { id: 9, price: 30 }), Ok(0));
//! assert_eq!(slice.sort_by_desc().search_key(&10), Ok(2));
//! assert_eq!(slice.sort_by_asc().search_key(&99), Err(3));
//! ```
//!
//! ## Lookups
//!
//! Every lookup follows the convention of `slice::binary_search`: `Ok(index)` for
//! the first occurrence of the key, `Err(len)` when the key is absent. The error
//! arm is not a failure; it is the insertion point one past the end.
//!
//! ## Performance Characteristics
//!
//! - **Grouping**: One pass, one key extraction per item.
//! - **Ascending**: O(U log U + N), sorting only the U distinct keys.
//! - **Descending**: O(N), reversing the cached ascending order.
//! - **Lookups**: O(1) expected, one key extraction when searching by item.
//! - **Memory Overhead**: One `usize` per item per view plus one map entry per
//!   distinct key per view. Items are never copied.
//!
//! [`Slice`] is single-threaded. [`SyncSlice`] offers the same API with
//! compute-once caches that can be shared across threads.

#[macro_use]
mod macros;

mod algo;
pub mod core;
pub mod slice;
pub mod sync;
pub mod view;
pub use crate::core::{KeyExtractor, Readiness};
pub use slice::Slice;
pub use sync::SyncSlice;
pub use view::{Sorted, SortedView};

pub mod prelude {
    pub use crate::core::{KeyExtractor, Readiness};
    pub use crate::slice::Slice;
    pub use crate::sync::SyncSlice;
    pub use crate::view::{Sorted, SortedView};
}
