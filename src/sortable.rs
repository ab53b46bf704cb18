//! Sequence kept sorted by a caller supplied predicate.
use std::{convert::Infallible, fmt, ops::Index};

/// Ordering predicate.
///
/// A predicate is a value deciding whether `a` must be placed before `b`.
/// It is not required to be a strict total order: the container never
/// checks it. A non transitive predicate yields an unspecified element
/// order, but never a panic.
pub trait Predicate<T> {
	/// Error returned when the predicate cannot compare two elements.
	type Error;

	fn less(&self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

impl<'p, T, P: Predicate<T>> Predicate<T> for &'p P {
	type Error = P::Error;

	fn less(&self, a: &T, b: &T) -> Result<bool, Self::Error> {
		(*self).less(a, b)
	}
}

/// Closure based predicate.
///
/// The wrapped function may fail, in which case
/// [`SortableVec::from_unsorted`] propagates the error.
#[derive(Clone, Copy)]
pub struct FnPredicate<F>(pub F);

impl<T, E, F: Fn(&T, &T) -> Result<bool, E>> Predicate<T> for FnPredicate<F> {
	type Error = E;

	fn less(&self, a: &T, b: &T) -> Result<bool, E> {
		(self.0)(a, b)
	}
}

/// Natural order of `T`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Ascending;

impl<T: Ord> Predicate<T> for Ascending {
	type Error = Infallible;

	fn less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
		Ok(a < b)
	}
}

/// Vector whose elements are kept sorted with a [`Predicate`].
///
/// Insertion is linear: the new element is placed right before the first
/// element it is less than.
///
/// ```
/// use sorted_range_map::{SortableVec, Ascending};
///
/// let mut sortable = SortableVec::from_unsorted([1, 4, 2], Ascending).unwrap();
/// assert_eq!(sortable.as_slice(), &[1, 2, 4]);
/// sortable.add(3);
/// assert_eq!(sortable.as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(sortable[2], 3);
/// ```
#[derive(Clone)]
pub struct SortableVec<T, P> {
	predicate: P,
	items: Vec<T>,
}

impl<T, P> SortableVec<T, P> {
	/// Create an empty container sorted by `predicate`.
	pub fn new(predicate: P) -> Self {
		SortableVec {
			predicate,
			items: Vec::new(),
		}
	}

	pub fn predicate(&self) -> &P {
		&self.predicate
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.items.get(index)
	}

	pub fn first(&self) -> Option<&T> {
		self.items.first()
	}

	pub fn last(&self) -> Option<&T> {
		self.items.last()
	}

	pub fn iter(&self) -> std::slice::Iter<T> {
		self.items.iter()
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	pub fn into_vec(self) -> Vec<T> {
		self.items
	}

	/// Remove and return the element at position `index`.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn remove(&mut self, index: usize) -> T {
		self.items.remove(index)
	}

	/// Remove every element.
	pub fn clear(&mut self) {
		self.items.clear()
	}
}

impl<T, P: Predicate<T>> SortableVec<T, P> {
	/// Build a container from unsorted elements.
	///
	/// Elements are sorted once, stably. The first predicate failure aborts
	/// the construction and is returned as is.
	pub fn from_unsorted<I>(items: I, predicate: P) -> Result<Self, P::Error>
	where
		I: IntoIterator<Item = T>,
	{
		let mut result = SortableVec::new(predicate);

		for item in items {
			let index = result.insertion_index(&item)?;
			result.items.insert(index, item);
		}

		Ok(result)
	}

	/// Position of the first element `e` such that `item < e`.
	fn insertion_index(&self, item: &T) -> Result<usize, P::Error> {
		for (i, e) in self.items.iter().enumerate() {
			if self.predicate.less(item, e)? {
				return Ok(i);
			}
		}

		Ok(self.items.len())
	}

	/// Insert an element at its sorted position and return that position.
	///
	/// The element goes right before the first element it is less than, or
	/// at the end. A failing comparison counts as "not less".
	pub fn add(&mut self, item: T) -> usize {
		let index = self
			.items
			.iter()
			.position(|e| self.predicate.less(&item, e).unwrap_or(false))
			.unwrap_or(self.items.len());

		self.items.insert(index, item);
		index
	}

	/// Copy of this container with `item` added, sorted from scratch.
	pub fn adding(&self, item: T) -> Result<Self, P::Error>
	where
		T: Clone,
		P: Clone,
	{
		Self::from_unsorted(
			self.items.iter().cloned().chain(std::iter::once(item)),
			self.predicate.clone(),
		)
	}
}

/// Sort any collection into a [`SortableVec`].
pub trait IntoSortable: IntoIterator + Sized {
	/// Same as [`SortableVec::from_unsorted`], discarding the predicate error.
	fn sortable<P>(self, predicate: P) -> Option<SortableVec<Self::Item, P>>
	where
		P: Predicate<Self::Item>,
	{
		SortableVec::from_unsorted(self, predicate).ok()
	}
}

impl<I: IntoIterator> IntoSortable for I {}

impl<T, P> Index<usize> for SortableVec<T, P> {
	type Output = T;

	fn index(&self, index: usize) -> &T {
		&self.items[index]
	}
}

impl<'a, T, P> IntoIterator for &'a SortableVec<T, P> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: fmt::Debug, P> fmt::Debug for SortableVec<T, P> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_list().entries(self.items.iter()).finish()
	}
}

impl<T, P> cc_traits::Collection for SortableVec<T, P> {
	type Item = T;
}

impl<T, P> cc_traits::CollectionRef for SortableVec<T, P> {
	type ItemRef<'a> = &'a T where Self: 'a;

	fn upcast_item_ref<'short, 'long: 'short>(r: &'long T) -> &'short T
	where
		Self: 'long,
	{
		r
	}
}

impl<T, P> cc_traits::Len for SortableVec<T, P> {
	fn len(&self) -> usize {
		self.items.len()
	}

	fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T, P> cc_traits::Get<usize> for SortableVec<T, P> {
	fn get(&self, index: usize) -> Option<&T> {
		self.items.get(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq)]
	struct Incomparable;

	fn fails_on_zero(a: &i32, b: &i32) -> Result<bool, Incomparable> {
		if *a == 0 || *b == 0 {
			Err(Incomparable)
		} else {
			Ok(a < b)
		}
	}

	#[test]
	fn from_unsorted_sorts() {
		let sortable = SortableVec::from_unsorted([5, 1, 4, 2, 3], Ascending).unwrap();
		assert_eq!(sortable.as_slice(), &[1, 2, 3, 4, 5]);
	}

	#[test]
	fn from_unsorted_is_stable() {
		let by_first =
			FnPredicate(|a: &(i32, char), b: &(i32, char)| Ok::<_, Infallible>(a.0 < b.0));
		let items = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
		let sortable = SortableVec::from_unsorted(items, by_first).unwrap();
		assert_eq!(sortable.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
	}

	#[test]
	fn from_unsorted_propagates_failure() {
		let result = SortableVec::from_unsorted([3, 0, 1], FnPredicate(fails_on_zero));
		assert_eq!(result.err(), Some(Incomparable));
	}

	#[test]
	fn into_sortable() {
		let sortable = vec![3, 1, 2].sortable(Ascending).unwrap();
		assert_eq!(sortable.as_slice(), &[1, 2, 3]);
		assert!([3, 0, 1].sortable(FnPredicate(fails_on_zero)).is_none());
	}

	#[test]
	fn add_skips_failing_comparisons() {
		let mut sortable = SortableVec::from_unsorted([1, 3], FnPredicate(fails_on_zero)).unwrap();
		assert_eq!(sortable.add(2), 1);
		assert_eq!(sortable.add(0), 3);
		assert_eq!(sortable.as_slice(), &[1, 2, 3, 0]);
	}

	#[test]
	fn add_returns_position() {
		let mut sortable = SortableVec::new(Ascending);
		assert_eq!(sortable.add(4), 0);
		assert_eq!(sortable.add(1), 0);
		assert_eq!(sortable.add(4), 2);
		assert_eq!(sortable.add(2), 1);
		assert_eq!(sortable.as_slice(), &[1, 2, 4, 4]);
		assert_eq!(sortable.first(), Some(&1));
		assert_eq!(sortable.last(), Some(&4));
	}

	#[test]
	fn adding_leaves_original_untouched() {
		let sortable = SortableVec::from_unsorted([2, 1], Ascending).unwrap();
		let grown = sortable.adding(0).unwrap();
		assert_eq!(sortable.as_slice(), &[1, 2]);
		assert_eq!(grown.as_slice(), &[0, 1, 2]);
	}

	#[test]
	fn remove_and_clear() {
		let mut sortable = SortableVec::from_unsorted([3, 1, 2], Ascending).unwrap();
		assert_eq!(sortable.remove(1), 2);
		assert_eq!(sortable.as_slice(), &[1, 3]);
		sortable.clear();
		assert!(sortable.is_empty());
		assert_eq!(sortable.first(), None);
	}

	#[test]
	#[should_panic]
	fn remove_out_of_bounds() {
		let mut sortable = SortableVec::from_unsorted([1], Ascending).unwrap();
		sortable.remove(1);
	}

	#[test]
	fn non_transitive_predicate_does_not_panic() {
		// rock, paper, scissors
		let beats = FnPredicate(|a: &u8, b: &u8| Ok::<_, Infallible>((a + 1) % 3 == *b));
		let sortable = SortableVec::from_unsorted([0, 1, 2, 0, 2, 1], beats).unwrap();
		assert_eq!(sortable.len(), 6);
	}

	#[test]
	fn collection_traits() {
		use cc_traits::{Get, Len};

		fn second<C: Get<usize> + Len>(c: &C) -> Option<C::ItemRef<'_>> {
			if c.len() > 1 {
				c.get(1)
			} else {
				None
			}
		}

		let sortable = SortableVec::from_unsorted([9, 7, 8], Ascending).unwrap();
		assert_eq!(second(&sortable).copied(), Some(8));
	}
}
