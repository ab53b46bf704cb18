use std::ops::Range;

pub mod ordering;

pub use ordering::*;

/// Half-open range operations used by the map.
pub trait RangeExt<T> {
	/// Checks if the range contains no key (`start >= end`).
	fn is_void(&self) -> bool;

	/// Checks if the two ranges share at least one key.
	///
	/// Void ranges never overlap anything.
	fn overlaps(&self, other: &Range<T>) -> bool;

	/// Parts of `self` left uncovered by `other`, below and above it.
	///
	/// Output ranges are never void.
	fn without(&self, other: &Range<T>) -> (Option<Range<T>>, Option<Range<T>>);
}

impl<T: Ord + Clone> RangeExt<T> for Range<T> {
	fn is_void(&self) -> bool {
		self.start >= self.end
	}

	fn overlaps(&self, other: &Range<T>) -> bool {
		!self.is_void() && !other.is_void() && self.start < other.end && other.start < self.end
	}

	fn without(&self, other: &Range<T>) -> (Option<Range<T>>, Option<Range<T>>) {
		let left = if self.start < other.start {
			let end = std::cmp::min(&self.end, &other.start).clone();
			Some(self.start.clone()..end)
		} else {
			None
		};

		let right = if other.end < self.end {
			let start = std::cmp::max(&self.start, &other.end).clone();
			Some(start..self.end.clone())
		} else {
			None
		};

		(left.filter(|r| !r.is_void()), right.filter(|r| !r.is_void()))
	}
}
