use std::{collections::HashMap, hash::Hash, marker::PhantomData, ops::Range};

use serde::{de::Error as _, ser::SerializeSeq, Deserialize, Serialize};

use crate::{error::Error, sortable::Predicate, RangeMap};

/// Bindings are serialized as a sequence of `[[start, end], value]`, in range
/// order.
impl<K, V, O> Serialize for RangeMap<K, V, O>
where
	K: Ord + Hash + Clone + Serialize,
	V: Serialize,
	O: Predicate<Range<K>>,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.len()))?;

		for (range, value) in self {
			seq.serialize_element(&((&range.start, &range.end), value))?;
		}

		seq.end()
	}
}

impl<'de, K, V, O> Deserialize<'de> for RangeMap<K, V, O>
where
	K: Ord + Hash + Clone + Deserialize<'de>,
	V: Deserialize<'de>,
	O: Predicate<Range<K>> + Default,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<K, V, O>(PhantomData<(K, V, O)>);

		impl<'de, K, V, O> serde::de::Visitor<'de> for Visitor<K, V, O>
		where
			K: Ord + Hash + Clone + Deserialize<'de>,
			V: Deserialize<'de>,
			O: Predicate<Range<K>> + Default,
		{
			type Value = RangeMap<K, V, O>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a range map")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let mut mapping = HashMap::with_capacity(seq.size_hint().unwrap_or(0));

				while let Some(((start, end), value)) = seq.next_element::<((K, K), V)>()? {
					if mapping.insert(start..end, value).is_some() {
						return Err(A::Error::custom("duplicate range"));
					}
				}

				RangeMap::from_disjoint_mapping(mapping).map_err(|e| match e {
					Error::Predicate(_) => A::Error::custom("range ordering predicate failed"),
					Error::Overlap => A::Error::custom("unexpected overlapping range"),
				})
			}
		}

		deserializer.deserialize_seq(Visitor(PhantomData))
	}
}
