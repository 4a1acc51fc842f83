//! Ordered map and set collections backed by a left-leaning red-black tree.
//!
//! A left-leaning red-black tree is a self-balancing binary search tree where every link
//! between a parent and a child carries a color bit. Red links only ever lean left, no path
//! contains two consecutive red links, and every path from the root to a leaf passes through
//! the same number of black links. Together these invariants bound the height of a tree with
//! `n` keys by `2 * log2(n + 1)`, so lookups, insertions, and minimum/maximum queries are
//! logarithmic in the worst case regardless of insertion order.
//!
//! Removal is not supported; if removal is needed, `std::collections::BTreeMap` and
//! `std::collections::BTreeSet` are better fits.
//!
//! # Examples
//!
//! ```
//! use llrb_tree::LlrbMap;
//!
//! let mut map = LlrbMap::new();
//! map.insert(1, "one");
//! map.insert(2, "two");
//! map.insert(3, "three");
//!
//! assert_eq!(map.get(&2), Some(&"two"));
//! assert_eq!(map.min(), Some(&1));
//! assert_eq!(map.max(), Some(&3));
//! assert_eq!(map.to_string(), "{{1}2{3}}");
//! ```

mod entry;
mod map;
mod node;
mod set;
mod tree;

pub use self::map::{LlrbMap, LlrbMapIntoIter, LlrbMapIter};
pub use self::set::{LlrbSet, LlrbSetIntoIter, LlrbSetIter};
