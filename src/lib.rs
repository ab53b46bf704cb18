//! A *range map* binds values to disjoint ranges of keys. Setting a value on
//! a range that overlaps stored ranges overwrites the overlapped parts: what
//! remains of the stored ranges on each side of the new one keeps its
//! previous value.
//!
//! This library provides a small, linear-scan range map. Ranges are
//! standard half-open [`Range`](std::ops::Range)s, kept sorted in a
//! [`SortableVec`], and values are stored in a
//! [`HashMap`](std::collections::HashMap) keyed by range. It is meant for
//! maps holding few ranges, where the simplicity of a sorted vector beats a
//! tree.
//!
//! ## Usage
//!
//! The key type must implement `Ord`, `Hash` and `Clone`.
//! Point lookups and strided queries also require the [`Step`] trait,
//! implemented for integer types and `char` (and for
//! `ordered_float::OrderedFloat` with the `ordered-float` feature).
//!
//! ```
//! use sorted_range_map::RangeMap;
//!
//! let mut map: RangeMap<i32, &str> = RangeMap::new();
//! map.set(1..3, "b");
//! map.set(5..8, "c");
//! map.set(0..2, "a");
//! map.set(6..7, "d");
//!
//! // values within the given range.
//! assert_eq!(map.values_in(0..8), [&"a", &"b", &"c", &"d", &"c"]);
//!
//! // values within consecutive steps of the stored extent (`0..2`, `2..4`, ...).
//! assert_eq!(map.values_in_by(0..8, 2), [vec![&"a"], vec![&"b"], vec![&"c"], vec![&"d", &"c"]]);
//!
//! assert_eq!(map.value_at(0), Some(&"a"));
//! assert_eq!(map.value_at(2), Some(&"b"));
//! assert_eq!(map.value_at(3), None);
//!
//! // values at the given positions.
//! assert_eq!(
//!   map.values_from(0, 8, 1),
//!   [Some(&"a"), Some(&"a"), Some(&"b"), None, None, Some(&"c"), Some(&"d"), Some(&"c")]
//! );
//! ```
//!
//! ### Range order
//!
//! Stored ranges are sorted with a [`Predicate`] value given as the `O` type
//! parameter of [`RangeMap`]. The default, [`Lexicographic`], orders ranges
//! by start then by end. [`LowerOrUpper`] is also provided for compatibility
//! with maps relying on its (non-transitive) order.
//!
//! ### Building from grouped values
//!
//! ```
//! use sorted_range_map::{GroupBy, IntoRangeMap, RangeMap};
//!
//! let map: RangeMap<u32, Vec<u32>> = [3, 14, 15, 92, 65]
//!   .into_iter()
//!   .grouped(|n| (n / 10 * 10)..(n / 10 * 10 + 10))
//!   .into_range_map()
//!   .unwrap();
//!
//! assert_eq!(map.value_at(12), Some(&vec![14, 15]));
//! ```
mod error;
mod group;
mod map;
pub mod range;
#[cfg(feature = "serde")]
mod serde;
mod sortable;
pub mod util;

pub use error::*;
pub use group::*;
pub use map::*;
pub use range::{Lexicographic, LowerOrUpper, RangeExt};
pub use sortable::*;
pub use util::{Step, Stride};
