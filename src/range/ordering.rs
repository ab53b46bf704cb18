//! Orders used to keep ranges sorted.
//!
//! Two orders are provided. [`Lexicographic`] compares the start bounds, then
//! the end bounds, and is a strict total order over ranges. [`LowerOrUpper`]
//! considers `a` before `b` as soon as *either* bound of `a` is lower than
//! the matching bound of `b`. It is not transitive for ranges with crossing
//! bounds (e.g. `0..5` and `1..3` are each before the other), so the order
//! of a container sorted with it depends on insertion history. It is kept
//! for compatibility with maps built under that rule.
//!
//! The two orders agree on pairwise disjoint ranges, which is all a
//! [`RangeMap`](crate::RangeMap) stores between two calls.
use crate::sortable::Predicate;
use std::{convert::Infallible, ops::Range};

/// Order ranges by start bound, then by end bound.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Lexicographic;

impl<T: Ord> Predicate<Range<T>> for Lexicographic {
	type Error = Infallible;

	fn less(&self, a: &Range<T>, b: &Range<T>) -> Result<bool, Infallible> {
		Ok((&a.start, &a.end) < (&b.start, &b.end))
	}
}

/// `a < b` if `a.start < b.start || a.end < b.end`.
///
/// Not a strict weak ordering. See the [module documentation](self).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct LowerOrUpper;

impl<T: Ord> Predicate<Range<T>> for LowerOrUpper {
	type Error = Infallible;

	fn less(&self, a: &Range<T>, b: &Range<T>) -> Result<bool, Infallible> {
		Ok(a.start < b.start || a.end < b.end)
	}
}
