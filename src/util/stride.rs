use super::Step;
use std::ops::Range;

/// Consecutive steps of a fixed stride over `start..end`.
///
/// Each item is the range `k..k + stride` for `k` in `start, start + stride, ...`
/// while `k < end`. Steps are not clamped to `end`, except when the next key
/// overflows the key type: the step then stops at `end` and is the last one.
///
/// The `n`-th key is computed from `start` directly, so floating point
/// rounding errors do not accumulate along the walk. Where keys are too
/// coarse for the stride, consecutive keys may be equal and give void steps.
pub struct Stride<K: Step> {
	start: K,
	current: Option<K>,
	n: usize,
	end: K,
	stride: K::Stride,
}

impl<K: Step> Stride<K> {
	/// # Panics
	///
	/// Panics if the stride does not move keys forward.
	pub fn new(start: K, end: K, stride: K::Stride) -> Self {
		assert!(K::is_forward(stride), "stride must move keys forward");
		Stride {
			current: Some(start.clone()),
			start,
			n: 0,
			end,
			stride,
		}
	}
}

impl<K: Step> Iterator for Stride<K> {
	type Item = Range<K>;

	fn next(&mut self) -> Option<Range<K>> {
		let current = self.current.take().filter(|current| *current < self.end)?;

		match self.start.offset(self.stride, self.n + 1) {
			Some(following) => {
				self.n += 1;
				self.current = Some(following.clone());
				Some(current..following)
			}
			None => Some(current..self.end.clone()),
		}
	}
}

impl<K: Step> std::iter::FusedIterator for Stride<K> {}
