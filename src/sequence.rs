//! A module containing the pure functions over plain, ordered slices of
//! discos that [`DiscoMap`](crate::DiscoMap) is built on.
//!
//! None of these functions mutate their arguments. The ones that produce
//! a new sequence return freshly cloned discos.

use alloc::vec::Vec;

use itertools::Itertools;

use crate::{Dimension, Disco, DiscoError, Extent};

/// Returns `true` if `next` follows `previous` on both dimensions.
///
/// See [`Extent::is_followed_by()`](crate::Extent::is_followed_by).
pub fn is_sequential<P, Q>(previous: &Disco<P>, next: &Disco<Q>) -> bool {
	previous.is_followed_by(next)
}

/// Returns `true` if every adjacent pair of discos in the slice is
/// sequential. Empty and single-element slices are trivially sequential.
///
/// # Examples
/// ```
/// use discomap::sequence::is_fully_sequential;
/// use discomap::Disco;
///
/// let valid = [Disco::new(0, 0, 1), Disco::new(10, 2, 2), Disco::new(20, 5, 4)];
/// let overlapping = [Disco::new(0, 0, 1), Disco::new(1, 1, 2), Disco::new(3, 2, 1)];
///
/// assert_eq!(is_fully_sequential(&valid), true);
/// assert_eq!(is_fully_sequential(&overlapping), false);
/// assert_eq!(is_fully_sequential::<()>(&[]), true);
/// ```
pub fn is_fully_sequential<P>(discos: &[Disco<P>]) -> bool {
	discos
		.iter()
		.tuple_windows()
		.all(|(previous, next)| is_sequential(previous, next))
}

/// Checks a whole sequence ab initio: every disco must follow its
/// predecessor on both dimensions and describe a valid range.
///
/// The first failure in sequence order is reported. A disco failing both
/// checks is reported as a [`DiscoError::SequencingViolation`].
///
/// # Examples
/// ```
/// use discomap::sequence::validate;
/// use discomap::{Disco, DiscoError};
///
/// assert_eq!(validate(&[Disco::new(0, 0, 1), Disco::new(1, 1, 2)]), Ok(()));
/// assert_eq!(
/// 	validate(&[Disco::new(0, 0, 1), Disco::new(1, 1, 2), Disco::new(3, 2, 1)]),
/// 	Err(DiscoError::SequencingViolation { position: 2 })
/// );
/// assert_eq!(
/// 	validate(&[Disco::new(0, 0, 0)]),
/// 	Err(DiscoError::DegenerateRange { position: 0 })
/// );
/// ```
pub fn validate<P>(discos: &[Disco<P>]) -> Result<(), DiscoError> {
	let mut last = None;
	for (position, disco) in discos.iter().enumerate() {
		validate_next(last, disco.extent(), position)?;
		last = Some(disco.extent());
	}

	Ok(())
}

/// Checks `candidate` as the next disco after `last`, the inductive
/// counterpart of [`validate()`]. `position` is where the candidate
/// would land in its sequence.
pub(crate) fn validate_next(
	last: Option<Extent>,
	candidate: Extent,
	position: usize,
) -> Result<(), DiscoError> {
	if last.is_some_and(|last| !last.is_followed_by(&candidate)) {
		return Err(DiscoError::SequencingViolation { position });
	}
	if !candidate.is_valid() {
		return Err(DiscoError::DegenerateRange { position });
	}

	Ok(())
}

/// Returns a clone of `discos` with a clone of `candidate` appended.
///
/// Only the last disco of `discos` is checked against `candidate`, the
/// rest of the slice is assumed to already be sequential.
///
/// # Examples
/// ```
/// use discomap::sequence::push_disco;
/// use discomap::{Disco, DiscoError};
///
/// let discos = [Disco::new(0, 0, 1), Disco::new(2, 2, 2)];
///
/// assert_eq!(push_disco(&discos, &Disco::new(4, 4, 1)).map(|d| d.len()), Ok(3));
/// assert_eq!(
/// 	push_disco(&discos, &Disco::new(3, 4, 1)),
/// 	Err(DiscoError::SequencingViolation { position: 2 })
/// );
/// assert_eq!(
/// 	push_disco(&discos, &Disco::new(4, 4, 0)),
/// 	Err(DiscoError::DegenerateRange { position: 2 })
/// );
/// ```
pub fn push_disco<P>(
	discos: &[Disco<P>],
	candidate: &Disco<P>,
) -> Result<Vec<Disco<P>>, DiscoError>
where
	P: Clone,
{
	validate_next(
		discos.last().map(Disco::extent),
		candidate.extent(),
		discos.len(),
	)?;

	let mut result = discos.to_vec();
	result.push(candidate.clone());
	Ok(result)
}

/// Returns the position of the first disco (in sequence order) covering
/// `index` on `dimension`, if any.
///
/// # Examples
/// ```
/// use discomap::sequence::find_disco_for_index;
/// use discomap::{Dimension, Disco};
///
/// let discos = [Disco::new(0, 0, 1), Disco::new(10, 2, 2)];
///
/// assert_eq!(find_disco_for_index(Dimension::X, 11, &discos), Some(1));
/// assert_eq!(find_disco_for_index(Dimension::Y, 2, &discos), Some(1));
/// assert_eq!(find_disco_for_index(Dimension::X, 5, &discos), None);
/// ```
pub fn find_disco_for_index<P>(
	dimension: Dimension,
	index: usize,
	discos: &[Disco<P>],
) -> Option<usize> {
	discos
		.iter()
		.position(|disco| disco.contains_index(dimension, index))
}

/// Maps `index` on `from` to its counterpart on the other dimension using
/// the first disco covering it.
///
/// # Examples
/// ```
/// use discomap::sequence::translate;
/// use discomap::{Dimension, Disco, DiscoError};
///
/// let discos = [Disco::new(0, 0, 1), Disco::new(10, 2, 2), Disco::new(20, 5, 4)];
///
/// assert_eq!(translate(Dimension::X, 21, &discos), Ok(6));
/// assert_eq!(translate(Dimension::Y, 6, &discos), Ok(21));
/// assert_eq!(
/// 	translate(Dimension::X, 24, &discos),
/// 	Err(DiscoError::OutOfRange { dimension: Dimension::X, index: 24 })
/// );
/// ```
pub fn translate<P>(
	from: Dimension,
	index: usize,
	discos: &[Disco<P>],
) -> Result<usize, DiscoError> {
	find_disco_for_index(from, index, discos)
		.and_then(|position| discos[position].extent().translate(from, index))
		.ok_or(DiscoError::OutOfRange {
			dimension: from,
			index,
		})
}

/// Returns clones of every disco overlapping `[start, start + length)` on
/// `dimension`, in sequence order.
///
/// # Examples
/// ```
/// use discomap::sequence::find_overlapping;
/// use discomap::{Dimension, Disco};
///
/// let discos = [Disco::new(0, 0, 1), Disco::new(10, 2, 2), Disco::new(20, 5, 4)];
///
/// assert_eq!(
/// 	find_overlapping(Dimension::Y, 1, 5, &discos),
/// 	[Disco::new(10, 2, 2), Disco::new(20, 5, 4)]
/// );
/// assert!(find_overlapping(Dimension::X, 12, 8, &discos).is_empty());
/// ```
pub fn find_overlapping<P>(
	dimension: Dimension,
	start: usize,
	length: usize,
	discos: &[Disco<P>],
) -> Vec<Disco<P>>
where
	P: Clone,
{
	discos
		.iter()
		.filter(|disco| disco.overlaps(dimension, start, length))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use alloc::vec;

	use pretty_assertions::assert_eq;
	use rstest::{fixture, rstest};

	use super::*;

	#[fixture]
	fn valid() -> Vec<Disco> {
		vec![Disco::new(0, 0, 1), Disco::new(10, 2, 2), Disco::new(20, 5, 4)]
	}

	#[fixture]
	fn prepush() -> Vec<Disco> {
		vec![Disco::new(0, 0, 1), Disco::new(2, 2, 2)]
	}

	#[fixture]
	fn overlapping() -> Vec<Disco> {
		vec![Disco::new(0, 0, 1), Disco::new(1, 1, 2), Disco::new(3, 2, 1)]
	}

	#[rstest]
	fn is_fully_sequential_tests(valid: Vec<Disco>, overlapping: Vec<Disco>) {
		assert!(is_fully_sequential(&valid));
		assert!(!is_fully_sequential(&overlapping));
		assert!(is_fully_sequential(&valid[..1]));
	}

	#[rstest]
	#[case::touching(Disco::new(4, 4, 1), Ok(3))]
	#[case::gapped(Disco::new(9, 40, 7), Ok(3))]
	#[case::bad_x(
		Disco::new(3, 4, 1),
		Err(DiscoError::SequencingViolation { position: 2 })
	)]
	#[case::bad_y(
		Disco::new(4, 3, 1),
		Err(DiscoError::SequencingViolation { position: 2 })
	)]
	#[case::bad_d(
		Disco::new(4, 4, 0),
		Err(DiscoError::DegenerateRange { position: 2 })
	)]
	#[case::bad_x_and_d(
		Disco::new(3, 4, 0),
		Err(DiscoError::SequencingViolation { position: 2 })
	)]
	#[case::unrepresentable_end(
		Disco::new(4, usize::MAX, 1),
		Err(DiscoError::DegenerateRange { position: 2 })
	)]
	fn push_disco_tests(
		prepush: Vec<Disco>,
		#[case] candidate: Disco,
		#[case] expected: Result<usize, DiscoError>,
	) {
		let result = push_disco(&prepush, &candidate);

		assert_eq!(result.as_ref().map(Vec::len).map_err(|e| *e), expected);
		if let Ok(pushed) = result {
			assert_eq!(pushed.last(), Some(&candidate));
			assert_eq!(&pushed[..2], &prepush[..]);
		}
		assert_eq!(prepush.len(), 2);
	}

	#[test]
	fn push_disco_onto_empty() {
		assert_eq!(
			push_disco(&[], &Disco::new(7, 3, 2)),
			Ok(vec![Disco::new(7, 3, 2)])
		);
	}

	#[test]
	fn push_disco_clones_payload() {
		let discos = [Disco::with_payload(0, 0, 1, vec![1u8])];
		let candidate = Disco::with_payload(1, 1, 1, vec![42u8]);

		let mut pushed = push_disco(&discos, &candidate).unwrap();
		pushed[1].payload.push(7);

		assert_eq!(candidate.payload, vec![42]);
		assert_eq!(pushed[1].payload, vec![42, 7]);
	}

	#[rstest]
	fn validate_tests(valid: Vec<Disco>, overlapping: Vec<Disco>) {
		assert_eq!(validate(&valid), Ok(()));
		assert_eq!(validate::<()>(&[]), Ok(()));
		assert_eq!(
			validate(&overlapping),
			Err(DiscoError::SequencingViolation { position: 2 })
		);
		assert_eq!(
			validate(&[Disco::new(0, 0, 1), Disco::new(5, 5, 0)]),
			Err(DiscoError::DegenerateRange { position: 1 })
		);
		assert_eq!(
			validate(&[Disco::new(0, 0, 2), Disco::new(1, 5, 0)]),
			Err(DiscoError::SequencingViolation { position: 1 })
		);
		assert_eq!(
			validate(&[Disco::new(0, 0, 0), Disco::new(0, 0, 1)]),
			Err(DiscoError::DegenerateRange { position: 0 })
		);
	}

	#[rstest]
	fn find_disco_for_index_tests(valid: Vec<Disco>) {
		assert_eq!(find_disco_for_index(Dimension::X, 0, &valid), Some(0));
		assert_eq!(find_disco_for_index(Dimension::X, 1, &valid), None);
		assert_eq!(find_disco_for_index(Dimension::X, 23, &valid), Some(2));
		assert_eq!(find_disco_for_index(Dimension::Y, 4, &valid), None);
		assert_eq!(find_disco_for_index(Dimension::Y, 8, &valid), Some(2));
		assert_eq!(find_disco_for_index(Dimension::Y, 9, &valid), None);
	}

	#[rstest]
	fn translate_round_trips(valid: Vec<Disco>) {
		for disco in &valid {
			for k in 0..disco.d {
				let y = translate(Dimension::X, disco.x + k, &valid).unwrap();
				assert_eq!(y, disco.y + k);
				assert_eq!(translate(Dimension::Y, y, &valid), Ok(disco.x + k));
			}
		}
	}

	#[rstest]
	#[case(Dimension::X, 1)]
	#[case(Dimension::X, 12)]
	#[case(Dimension::X, 24)]
	#[case(Dimension::Y, 4)]
	#[case(Dimension::Y, 9)]
	fn translate_misses(
		valid: Vec<Disco>,
		#[case] dimension: Dimension,
		#[case] index: usize,
	) {
		assert_eq!(
			translate(dimension, index, &valid),
			Err(DiscoError::OutOfRange { dimension, index })
		);
	}

	#[rstest]
	#[case(Dimension::X, 0)]
	#[case(Dimension::X, 4)]
	#[case(Dimension::Y, 0)]
	#[case(Dimension::Y, 2)]
	fn translate_misses_before_first(
		#[case] dimension: Dimension,
		#[case] index: usize,
	) {
		let discos = [Disco::new(5, 3, 2), Disco::new(8, 6, 4)];

		assert_eq!(find_disco_for_index(dimension, index, &discos), None);
		assert_eq!(
			translate(dimension, index, &discos),
			Err(DiscoError::OutOfRange { dimension, index })
		);
		assert_eq!(translate(Dimension::X, 5, &discos), Ok(3));
		assert_eq!(translate(Dimension::Y, 3, &discos), Ok(5));
	}

	#[rstest]
	fn find_overlapping_keeps_order(valid: Vec<Disco>) {
		assert_eq!(find_overlapping(Dimension::X, 0, 100, &valid), valid);
		assert_eq!(
			find_overlapping(Dimension::X, 11, 10, &valid),
			[Disco::new(10, 2, 2), Disco::new(20, 5, 4)]
		);
		assert!(find_overlapping(Dimension::Y, 1, 1, &valid).is_empty());
		assert!(find_overlapping(Dimension::X, 12, 8, &valid).is_empty());
	}
}
