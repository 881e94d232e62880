//! A module containing the error types of this crate.

use thiserror::Error;

use crate::{Dimension, Disco};

/// The ways an operation on a sequence of discos can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DiscoError {
	/// The disco at `position` does not follow its predecessor on both
	/// dimensions, so the sequence would contain overlapping or crossing
	/// ranges.
	#[error(
		"disco at position {position} does not follow its predecessor on both dimensions"
	)]
	SequencingViolation {
		/// The position of the offending disco in the sequence.
		position: usize,
	},
	/// The disco at `position` covers no index (`d < 1`) or its end does
	/// not fit in a `usize`.
	#[error("disco at position {position} does not describe a valid range")]
	DegenerateRange {
		/// The position of the offending disco in the sequence.
		position: usize,
	},
	/// No disco covers `index` on `dimension`.
	#[error("index {index} is not covered by any disco on the {dimension} dimension")]
	OutOfRange {
		/// The dimension the index was looked up on.
		dimension: Dimension,
		/// The uncovered index.
		index: usize,
	},
}

/// The error returned when appending a disco fails. Contains the disco
/// that was not appended.
///
/// # Examples
/// ```
/// use discomap::{Disco, DiscoError, DiscoMap, InsertError};
///
/// let mut map = DiscoMap::new();
/// map.append(Disco::new(2, 2, 2)).unwrap();
///
/// let error = map.append(Disco::new(3, 4, 1)).unwrap_err();
///
/// assert_eq!(error.kind, DiscoError::SequencingViolation { position: 1 });
/// assert_eq!(error.disco, Disco::new(3, 4, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct InsertError<P> {
	/// Why the disco was rejected.
	pub kind: DiscoError,
	/// The disco which was not appended.
	pub disco: Disco<P>,
}

impl<P> From<InsertError<P>> for DiscoError {
	fn from(error: InsertError<P>) -> Self {
		error.kind
	}
}
