use crate::{
	error::Error,
	range::{Lexicographic, RangeExt},
	sortable::{Predicate, SortableVec},
	util::{Step, Stride},
};
use std::{collections::HashMap, fmt, hash::Hash, ops::Range};

/// Map from disjoint half-open key ranges to values.
///
/// Setting a value on a range overlapping stored ranges removes the
/// overlapped parts of those ranges. What remains of them outside the new
/// range keeps its previous value.
///
/// Ranges are kept in a [`SortableVec`] sorted with the order `O`, and
/// every operation scans it linearly. This map is meant for small range
/// counts.
///
/// The map is not synchronized: callers sharing it between threads must
/// prevent reads concurrent with [`RangeMap::set`].
///
/// ```
/// use sorted_range_map::RangeMap;
///
/// let mut map: RangeMap<i32, &str> = RangeMap::new();
/// map.set(0..42, "meaning");
/// assert_eq!(map.values_in(0..3), [&"meaning"]);
///
/// map.set(9..10, "hidden");
/// assert_eq!(map.values_in(0..10), [&"meaning", &"hidden"]);
/// assert_eq!(map.values_in(0..100), [&"meaning", &"hidden", &"meaning"]);
/// ```
#[derive(Clone)]
pub struct RangeMap<K, V, O = Lexicographic> {
	ranges: SortableVec<Range<K>, O>,
	store: HashMap<Range<K>, V>,
}

impl<K, V, O: Default> RangeMap<K, V, O> {
	/// Create a new empty map.
	pub fn new() -> Self {
		Self::with_order(O::default())
	}
}

impl<K, V, O: Default> Default for RangeMap<K, V, O> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V, O> RangeMap<K, V, O> {
	/// Create a new empty map sorting its ranges with `order`.
	pub fn with_order(order: O) -> Self {
		RangeMap {
			ranges: SortableVec::new(order),
			store: HashMap::new(),
		}
	}

	/// Number of stored ranges.
	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	pub fn order(&self) -> &O {
		self.ranges.predicate()
	}

	/// Stored ranges, in order.
	pub fn ranges(&self) -> &SortableVec<Range<K>, O> {
		&self.ranges
	}

	/// First stored range.
	pub fn first_range(&self) -> Option<&Range<K>> {
		self.ranges.first()
	}

	/// Last stored range.
	pub fn last_range(&self) -> Option<&Range<K>> {
		self.ranges.last()
	}

	pub fn as_mapping(&self) -> &HashMap<Range<K>, V> {
		&self.store
	}

	pub fn into_mapping(self) -> HashMap<Range<K>, V> {
		self.store
	}
}

impl<K: Ord + Hash + Clone, V, O: Predicate<Range<K>>> RangeMap<K, V, O> {
	/// Build a map from existing bindings.
	///
	/// Ranges are sorted once. They are expected to be disjoint: this is not
	/// checked, see [`RangeMap::from_disjoint_mapping`]. Void ranges are
	/// dropped.
	pub fn from_mapping(mapping: HashMap<Range<K>, V>) -> Result<Self, Error<O::Error>>
	where
		O: Default,
	{
		Self::from_mapping_with(mapping, O::default())
	}

	/// Build a map from existing bindings, sorting ranges with `order`.
	pub fn from_mapping_with(
		mut mapping: HashMap<Range<K>, V>,
		order: O,
	) -> Result<Self, Error<O::Error>> {
		mapping.retain(|range, _| !range.is_void());
		let ranges = SortableVec::from_unsorted(mapping.keys().cloned(), order)
			.map_err(Error::Predicate)?;
		log::debug!("range map built from {} ranges", ranges.len());

		Ok(RangeMap {
			ranges,
			store: mapping,
		})
	}

	/// Build a map from existing bindings, failing if two ranges overlap.
	pub fn from_disjoint_mapping(mapping: HashMap<Range<K>, V>) -> Result<Self, Error<O::Error>>
	where
		O: Default,
	{
		let map = Self::from_mapping(mapping)?;

		if map.has_overlaps() {
			Err(Error::Overlap)
		} else {
			Ok(map)
		}
	}

	fn has_overlaps(&self) -> bool {
		let ranges = self.ranges.as_slice();
		ranges
			.iter()
			.enumerate()
			.any(|(i, a)| ranges[i + 1..].iter().any(|b| a.overlaps(b)))
	}

	/// Bindings in range order.
	pub fn iter(&self) -> Iter<K, V> {
		Iter {
			ranges: self.ranges.iter(),
			store: &self.store,
		}
	}

	/// Get the value bound to the given range, if this exact range is stored.
	pub fn get(&self, range: &Range<K>) -> Option<&V> {
		self.store.get(range)
	}

	/// Bind `value` to every key of `range`.
	///
	/// Stored ranges overlapping `range` are removed. Their parts below and
	/// above `range` are stored back with their previous value. Void ranges
	/// are ignored.
	pub fn set(&mut self, range: Range<K>, value: V)
	where
		V: Clone,
	{
		if range.is_void() {
			log::trace!("void range ignored");
			return;
		}

		let Some(mut index) = self.ranges.iter().position(|r| r.overlaps(&range)) else {
			// there are no overlapping ranges. We can freely insert this new range.
			self.insert_unchecked(range, value);
			return;
		};

		let mut value = Some(value);
		loop {
			if self.ranges[index] == range {
				// only another overlapping range may be left after this one if
				// the map was built from overlapping bindings.
				log::trace!("overwriting range #{index}");
				if let Some(value) = value.take() {
					self.store.insert(range.clone(), value);
				}

				index += 1;
			} else {
				let old_range = self.ranges.remove(index);
				if let Some(old_value) = self.store.remove(&old_range) {
					match old_range.without(&range) {
						(Some(left), Some(right)) => {
							// the new range is strictly inside the old one.
							log::trace!("splitting range #{index}");
							self.insert_remainder(&mut index, left, old_value.clone());
							self.insert_remainder(&mut index, right, old_value);
						}
						(Some(left), None) => {
							log::trace!("truncating range #{index} above");
							self.insert_remainder(&mut index, left, old_value);
						}
						(None, Some(right)) => {
							log::trace!("truncating range #{index} below");
							self.insert_remainder(&mut index, right, old_value);
						}
						(None, None) => {
							log::trace!("range #{index} subsumed");
						}
					}
				}
			}

			match self.ranges.get(index) {
				Some(next) if next.overlaps(&range) => (),
				_ => break,
			}
		}

		if let Some(value) = value {
			self.insert_unchecked(range, value);
		}
	}

	/// Insert what is left of an overlapped range, keeping `index` on the
	/// same scanned range.
	fn insert_remainder(&mut self, index: &mut usize, range: Range<K>, value: V) {
		if self.insert_unchecked(range, value) <= *index {
			*index += 1
		}
	}

	fn insert_unchecked(&mut self, range: Range<K>, value: V) -> usize {
		self.store.insert(range.clone(), value);
		self.ranges.add(range)
	}

	/// Value of the first stored range overlapping the unit range
	/// `key..succ(key)`.
	pub fn value_at(&self, key: K) -> Option<&V>
	where
		K: Step,
	{
		let unit = key.successor().map(|next| key..next)?;
		self.ranges
			.iter()
			.find(|r| r.overlaps(&unit))
			.and_then(|r| self.store.get(r))
	}

	/// Values of every stored range overlapping `range`, in range order.
	///
	/// A stored range only partially overlapping `range` still contributes
	/// its value.
	pub fn values_in(&self, range: Range<K>) -> Vec<&V> {
		self.ranges
			.iter()
			.filter(|r| r.overlaps(&range))
			.filter_map(|r| self.store.get(r))
			.collect()
	}

	/// Values overlapping each consecutive `stride` step.
	///
	/// Steps cover the whole stored extent, from the start of the first
	/// range to the end of the last one. The given range does not bound the
	/// sampling.
	///
	/// # Panics
	///
	/// Panics if `stride` does not move keys forward.
	pub fn values_in_by(&self, _range: Range<K>, stride: K::Stride) -> Vec<Vec<&V>>
	where
		K: Step,
	{
		match (self.ranges.first(), self.ranges.last()) {
			(Some(first), Some(last)) => Stride::new(first.start.clone(), last.end.clone(), stride)
				.map(|step| self.values_in(step))
				.collect(),
			_ => Vec::new(),
		}
	}

	/// Value at every `stride` step from `from` up to `to` (excluded).
	///
	/// # Panics
	///
	/// Panics if `stride` does not move keys forward.
	pub fn values_from(&self, from: K, to: K, stride: K::Stride) -> Vec<Option<&V>>
	where
		K: Step,
	{
		Stride::new(from, to, stride)
			.map(|step| self.value_at(step.start))
			.collect()
	}
}

/// Iterator over the bindings of a [`RangeMap`], in range order.
pub struct Iter<'a, K, V> {
	ranges: std::slice::Iter<'a, Range<K>>,
	store: &'a HashMap<Range<K>, V>,
}

impl<'a, K: Hash + Eq, V> Iterator for Iter<'a, K, V> {
	type Item = (&'a Range<K>, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		let store = self.store;
		self.ranges
			.by_ref()
			.find_map(|range| store.get(range).map(|value| (range, value)))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.ranges.size_hint().1)
	}
}

impl<'a, K: Ord + Hash + Clone, V, O: Predicate<Range<K>>> IntoIterator for &'a RangeMap<K, V, O> {
	type Item = (&'a Range<K>, &'a V);
	type IntoIter = Iter<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K, V, O> Extend<(Range<K>, V)> for RangeMap<K, V, O>
where
	K: Ord + Hash + Clone,
	V: Clone,
	O: Predicate<Range<K>>,
{
	fn extend<I: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: I) {
		for (range, value) in iter {
			self.set(range, value)
		}
	}
}

impl<K: Ord + Hash + Clone, V: Clone, O: Predicate<Range<K>> + Default> FromIterator<(Range<K>, V)>
	for RangeMap<K, V, O>
{
	fn from_iter<I: IntoIterator<Item = (Range<K>, V)>>(iter: I) -> Self {
		let mut result = RangeMap::new();
		result.extend(iter);
		result
	}
}

impl<K: Hash + Eq, V: PartialEq, O> PartialEq for RangeMap<K, V, O> {
	fn eq(&self, other: &Self) -> bool {
		self.store == other.store
	}
}

impl<K: Hash + Eq, V: Eq, O> Eq for RangeMap<K, V, O> {}

impl<K: Ord + Hash + Clone + fmt::Debug, V: fmt::Debug, O: Predicate<Range<K>>> fmt::Debug
	for RangeMap<K, V, O>
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
