/// Range map construction errors.
///
/// `E` is the error type of the range ordering predicate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error<E> {
	/// The ordering predicate failed while sorting the initial ranges.
	#[error("range ordering predicate failed: {0}")]
	Predicate(E),

	/// Two of the given ranges overlap.
	#[error("overlapping ranges")]
	Overlap,
}
