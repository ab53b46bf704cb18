//! Building range maps out of grouped values.
use crate::{error::Error, range::Lexicographic, sortable::Predicate, RangeMap};
use std::{collections::HashMap, hash::Hash, ops::Range};

/// Group the items of an iterator by key.
pub trait GroupBy: Iterator + Sized {
	/// Collect items into lists sharing the same `key(item)`, keeping their
	/// iteration order.
	fn grouped<G, F>(self, mut key: F) -> HashMap<G, Vec<Self::Item>>
	where
		G: Hash + Eq,
		F: FnMut(&Self::Item) -> G,
	{
		let mut result: HashMap<G, Vec<Self::Item>> = HashMap::new();

		for item in self {
			result.entry(key(&item)).or_default().push(item)
		}

		result
	}
}

impl<I: Iterator> GroupBy for I {}

/// Conversion of range keyed maps into [`RangeMap`].
pub trait IntoRangeMap<K, V> {
	fn into_range_map<O>(self) -> Result<RangeMap<K, V, O>, Error<O::Error>>
	where
		O: Predicate<Range<K>> + Default;
}

impl<K: Ord + Hash + Clone, V> IntoRangeMap<K, V> for HashMap<Range<K>, V> {
	fn into_range_map<O>(self) -> Result<RangeMap<K, V, O>, Error<O::Error>>
	where
		O: Predicate<Range<K>> + Default,
	{
		RangeMap::from_mapping(self)
	}
}

impl<K: Ord + Hash + Clone, V> TryFrom<HashMap<Range<K>, V>> for RangeMap<K, V, Lexicographic> {
	type Error = Error<std::convert::Infallible>;

	fn try_from(mapping: HashMap<Range<K>, V>) -> Result<Self, Self::Error> {
		RangeMap::from_mapping(mapping)
	}
}
