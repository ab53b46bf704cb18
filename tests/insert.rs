use proptest::prelude::*;
use sorted_range_map::{RangeExt, RangeMap};
use std::ops::Range;

fn bindings(map: &RangeMap<u32, bool>) -> Vec<(Range<u32>, bool)> {
	map.iter().map(|(r, v)| (r.clone(), *v)).collect()
}

fn assert_disjoint<V>(map: &RangeMap<u32, V>) {
	let ranges = map.ranges().as_slice();
	for (i, a) in ranges.iter().enumerate() {
		for b in &ranges[i + 1..] {
			assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
		}
	}
}

#[test]
fn insert_range() {
	let mut range_map: RangeMap<i32, bool> = RangeMap::new();

	range_map.set(0..42, true);
	assert_eq!(range_map.len(), 1);
	assert_eq!(range_map.value_at(41), Some(&true));
	assert_eq!(range_map.value_at(42), None);
}

// Every insertion order of disjoint ranges yields the same map.
#[test]
fn disjoint_ranges_in_any_order() {
	use permutator::Permutation;

	let mut ranges_with_values = [
		(0..2, false),
		(2..3, true),
		(5..6, false),
		(6..7, true),
		(7..8, false),
	];

	ranges_with_values.permutation().for_each(|permutation| {
		let mut range_map: RangeMap<u32, bool> = RangeMap::new();

		for (k, v) in permutation {
			range_map.set(k, v);
		}

		assert_eq!(
			bindings(&range_map),
			[(0..2, false), (2..3, true), (5..6, false), (6..7, true), (7..8, false)]
		);
		assert_eq!(range_map.values_in(0..8), [&false, &true, &false, &true, &false]);
	});
}

// Test every permutation of a bunch of touching and overlapping ranges
// against a key by key model.
#[test]
fn lots_of_interesting_ranges() {
	use permutator::Permutation;

	let mut ranges_with_values = [
		(2..3, false),
		// a duplicate
		(2..3, false),
		// almost a duplicate, but with a different value
		(2..3, true),
		(3..5, true),
		(4..6, true),
		(5..7, true),
		// a really big range
		(2..6, false),
	];

	ranges_with_values.permutation().for_each(|permutation| {
		let mut range_map: RangeMap<u32, bool> = RangeMap::new();
		let mut model = [None; 10];

		for (k, v) in permutation {
			for key in k.clone() {
				model[key as usize] = Some(v);
			}
			range_map.set(k, v);

			assert_disjoint(&range_map);
			for (key, expected) in model.iter().enumerate() {
				assert_eq!(range_map.value_at(key as u32), expected.as_ref());
			}
		}
	});
}

#[test]
fn overwrite_keeps_a_single_range() {
	let mut range_map: RangeMap<u32, bool> = RangeMap::new();
	range_map.set(0..10, true);
	range_map.set(3..6, true);
	range_map.set(3..6, false);

	assert_eq!(bindings(&range_map), [(0..3, true), (3..6, false), (6..10, true)]);
	assert_eq!(range_map.ranges().iter().filter(|r| **r == (3..6)).count(), 1);
	for key in 3..6 {
		assert_eq!(range_map.value_at(key), Some(&false));
	}
}

#[test]
fn store_matches_ranges() {
	let mut range_map: RangeMap<u32, bool> = RangeMap::new();
	range_map.set(0..4, true);
	range_map.set(6..9, false);
	range_map.set(2..7, true);
	range_map.set(3..4, false);

	let mapping = range_map.as_mapping();
	assert_eq!(mapping.len(), range_map.ranges().len());
	for range in range_map.ranges() {
		assert!(mapping.contains_key(range));
	}
}

proptest! {
	#[test]
	fn matches_reference_model(ops in prop::collection::vec((0u32..32, 0u32..32, 0u8..4), 0..24)) {
		let mut range_map: RangeMap<u32, u8> = RangeMap::new();
		let mut model = [None; 40];

		for (a, b, v) in ops {
			let range = a.min(b)..a.max(b);
			for key in range.clone() {
				model[key as usize] = Some(v);
			}
			range_map.set(range, v);
		}

		let ranges = range_map.ranges().as_slice();
		for (i, a) in ranges.iter().enumerate() {
			for b in &ranges[i + 1..] {
				prop_assert!(!a.overlaps(b));
			}
		}

		prop_assert_eq!(range_map.as_mapping().len(), ranges.len());

		for (key, expected) in model.iter().enumerate() {
			prop_assert_eq!(range_map.value_at(key as u32), expected.as_ref());
		}
	}
}
