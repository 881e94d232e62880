//! A module containing [`DiscoMap`].

use alloc::vec::Vec;

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;
use tracing::{debug, trace};

use crate::sequence::{validate, validate_next};
use crate::utils::{last_query_point, overlapping_comp, starts_comp};
use crate::{Dimension, Disco, DiscoError, Extent, InsertError};

/// An ordered, append-only sequence of [`Disco`]s based on [`BTreeMap`],
/// relating the X-space and the Y-space piecewise and bijectively.
///
/// `P` is the generic type parameter for the payload carried by each
/// disco. The map never looks at it.
///
/// Every mutation keeps the sequencing invariant: each disco covers at
/// least one index and follows its predecessor on both dimensions. Since
/// the discos are then ordered identically in both spaces, one tree
/// answers searches on either dimension.
///
/// # Examples
/// ```
/// use discomap::{Disco, DiscoMap};
///
/// let mut map = DiscoMap::from_discos([
/// 	Disco::new(0, 0, 1),
/// 	Disco::new(10, 2, 2),
/// ])
/// .unwrap();
///
/// map.append(Disco::new(20, 5, 4)).unwrap();
///
/// assert_eq!(map.x_to_y(21), Ok(6));
/// assert_eq!(map.y_to_x(6), Ok(21));
/// assert!(map.x_to_y(24).is_err());
///
/// for (extent, _) in map.iter() {
/// 	println!("{extent}");
/// }
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoMap<P = ()> {
	inner: BTreeMap<Extent, P>,
}

impl<P> DiscoMap<P> {
	/// Makes a new, empty `DiscoMap`.
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoMap};
	///
	/// let map: DiscoMap<&str> = DiscoMap::new();
	///
	/// assert_eq!(map.is_empty(), true);
	///
	/// let mut map = DiscoMap::new();
	/// map.append(Disco::with_payload(0, 0, 1, "a")).unwrap();
	///
	/// assert_eq!(map.len(), 1);
	/// ```
	pub fn new() -> Self {
		DiscoMap {
			inner: BTreeMap::new(),
		}
	}

	/// Makes a new `DiscoMap` seeded with the given discos.
	///
	/// The whole sequence is validated before anything is stored, see
	/// [`DiscoMap::set_all()`].
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoError, DiscoMap};
	///
	/// let map = DiscoMap::from_discos([
	/// 	Disco::with_payload(0, 0, 1, "a"),
	/// 	Disco::with_payload(2, 1, 3, "man"),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(map.len(), 2);
	///
	/// assert_eq!(
	/// 	DiscoMap::from_discos([Disco::new(0, 0, 2), Disco::new(1, 5, 1)]),
	/// 	Err(DiscoError::SequencingViolation { position: 1 })
	/// );
	/// ```
	pub fn from_discos(
		discos: impl IntoIterator<Item = Disco<P>>,
	) -> Result<Self, DiscoError> {
		let mut map = DiscoMap::default();
		map.set_all(discos)?;
		Ok(map)
	}

	/// Replaces every disco in the map with the given sequence.
	///
	/// The sequence is checked as a whole: every disco must cover at least
	/// one index and every adjacent pair must be sequential. If it is not
	/// valid an error is returned and the map is left as it was.
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoError, DiscoMap};
	///
	/// let valid = [Disco::new(0, 0, 1), Disco::new(10, 2, 2)];
	///
	/// let mut map = DiscoMap::new();
	/// assert_eq!(map.set_all(valid.clone()), Ok(()));
	///
	/// assert_eq!(
	/// 	map.set_all([
	/// 		Disco::new(0, 0, 1),
	/// 		Disco::new(1, 1, 2),
	/// 		Disco::new(3, 2, 1),
	/// 	]),
	/// 	Err(DiscoError::SequencingViolation { position: 2 })
	/// );
	/// assert_eq!(map.discos(), valid);
	/// ```
	pub fn set_all(
		&mut self,
		discos: impl IntoIterator<Item = Disco<P>>,
	) -> Result<(), DiscoError> {
		let discos = discos.into_iter().collect::<Vec<_>>();

		if let Err(error) = validate(&discos) {
			debug!(%error, len = discos.len(), "rejected disco sequence");
			return Err(error);
		}

		let mut inner = BTreeMap::new();
		for disco in discos {
			let (extent, payload) = disco.into_parts();
			inner.insert(extent, payload, starts_comp());
		}
		self.inner = inner;

		trace!(len = self.len(), "replaced disco sequence");

		Ok(())
	}

	/// Appends a disco to the end of the sequence.
	///
	/// The disco is only checked against the current last disco. If it
	/// covers no index or does not follow the last disco on both
	/// dimensions, an [`InsertError`] holding the rejected disco is
	/// returned and the map is not updated.
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoError, DiscoMap};
	///
	/// let mut map =
	/// 	DiscoMap::from_discos([Disco::new(0, 0, 1), Disco::new(2, 2, 2)])
	/// 		.unwrap();
	///
	/// assert_eq!(map.append(Disco::new(4, 4, 1)), Ok(()));
	/// assert_eq!(map.len(), 3);
	///
	/// let error = map.append(Disco::new(5, 5, 0)).unwrap_err();
	/// assert_eq!(error.kind, DiscoError::DegenerateRange { position: 3 });
	/// assert_eq!(map.len(), 3);
	///
	/// // a disco failing both checks is reported as out of sequence
	/// let error = map.append(Disco::new(4, 5, 0)).unwrap_err();
	/// assert_eq!(error.kind, DiscoError::SequencingViolation { position: 3 });
	/// ```
	pub fn append(&mut self, disco: Disco<P>) -> Result<(), InsertError<P>> {
		let position = self.len();
		let last = self.inner.last_key_value().map(|(extent, _)| *extent);

		if let Err(kind) = validate_next(last, disco.extent(), position) {
			debug!(
				%kind,
				x = disco.x,
				y = disco.y,
				d = disco.d,
				"rejected disco"
			);
			return Err(InsertError { kind, disco });
		}

		trace!(position, x = disco.x, y = disco.y, d = disco.d, "appended disco");

		let (extent, payload) = disco.into_parts();
		self.inner.insert(extent, payload, starts_comp());

		Ok(())
	}

	/// Returns an independent copy of every disco in the map, in sequence
	/// order.
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoMap};
	///
	/// let map = DiscoMap::from_discos([Disco::with_payload(0, 0, 1, 42)])
	/// 	.unwrap();
	///
	/// let mut discos = map.discos();
	/// discos[0].payload = 7;
	///
	/// assert_eq!(map.discos(), [Disco::with_payload(0, 0, 1, 42)]);
	/// ```
	pub fn discos(&self) -> Vec<Disco<P>>
	where
		P: Clone,
	{
		self.iter()
			.map(|(extent, payload)| Disco::from_parts(*extent, payload.clone()))
			.collect()
	}

	/// Returns the extent and payload of the disco covering `index` on
	/// `dimension`, if any.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Disco, DiscoMap, Extent};
	///
	/// let map = DiscoMap::from_discos([
	/// 	Disco::with_payload(0, 0, 1, "a"),
	/// 	Disco::with_payload(2, 1, 3, "man"),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(
	/// 	map.get_at(Dimension::Y, 3),
	/// 	Some((&Extent::new(2, 1, 3), &"man"))
	/// );
	/// assert_eq!(map.get_at(Dimension::X, 1), None);
	/// ```
	pub fn get_at(
		&self,
		dimension: Dimension,
		index: usize,
	) -> Option<(&Extent, &P)> {
		self.inner
			.get_key_value(overlapping_comp(dimension, index))
	}

	/// Returns `true` if a disco covers `index` on `dimension`, and
	/// `false` if not.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Disco, DiscoMap};
	///
	/// let map = DiscoMap::from_discos([Disco::new(10, 20, 10)]).unwrap();
	///
	/// assert_eq!(map.contains_index(Dimension::X, 10), true);
	/// assert_eq!(map.contains_index(Dimension::X, 20), false);
	/// assert_eq!(map.contains_index(Dimension::Y, 29), true);
	/// ```
	pub fn contains_index(&self, dimension: Dimension, index: usize) -> bool {
		self.get_at(dimension, index).is_some()
	}

	/// Maps `index` on `from` to its counterpart on the other dimension.
	///
	/// Only indexes covered by a disco are mapped: gaps between discos and
	/// points before the first or after the last disco give
	/// [`DiscoError::OutOfRange`].
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Disco, DiscoError, DiscoMap};
	///
	/// let map =
	/// 	DiscoMap::from_discos([Disco::new(0, 0, 1), Disco::new(10, 2, 2)])
	/// 		.unwrap();
	///
	/// assert_eq!(map.translate(Dimension::X, 11), Ok(3));
	/// assert_eq!(map.translate(Dimension::Y, 3), Ok(11));
	/// assert_eq!(
	/// 	map.translate(Dimension::Y, 1),
	/// 	Err(DiscoError::OutOfRange { dimension: Dimension::Y, index: 1 })
	/// );
	/// ```
	pub fn translate(
		&self,
		from: Dimension,
		index: usize,
	) -> Result<usize, DiscoError> {
		self.get_at(from, index)
			.and_then(|(extent, _)| extent.translate(from, index))
			.ok_or(DiscoError::OutOfRange {
				dimension: from,
				index,
			})
	}

	/// Maps an X-space index to its Y-space counterpart. See
	/// [`DiscoMap::translate()`].
	pub fn x_to_y(&self, index: usize) -> Result<usize, DiscoError> {
		self.translate(Dimension::X, index)
	}

	/// Maps a Y-space index to its X-space counterpart. See
	/// [`DiscoMap::translate()`].
	pub fn y_to_x(&self, index: usize) -> Result<usize, DiscoError> {
		self.translate(Dimension::Y, index)
	}

	/// Returns an iterator over every disco whose range on `dimension`
	/// overlaps `[start, start + length)`, in sequence order.
	///
	/// Ranges that only touch the query range are not included.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Disco, DiscoMap, Extent};
	///
	/// let map = DiscoMap::from_discos([
	/// 	Disco::new(0, 0, 1),
	/// 	Disco::new(10, 2, 2),
	/// 	Disco::new(20, 5, 4),
	/// ])
	/// .unwrap();
	///
	/// let overlapping = map
	/// 	.overlapping(Dimension::X, 1, 20)
	/// 	.map(|(extent, _)| *extent)
	/// 	.collect::<Vec<_>>();
	///
	/// assert_eq!(overlapping, [Extent::new(10, 2, 2), Extent::new(20, 5, 4)]);
	/// ```
	pub fn overlapping(
		&self,
		dimension: Dimension,
		start: usize,
		length: usize,
	) -> impl DoubleEndedIterator<Item = (&Extent, &P)> {
		self.inner
			.range(
				overlapping_comp(dimension, start),
				SearchBoundCustom::Included,
				overlapping_comp(dimension, last_query_point(start, length)),
				SearchBoundCustom::Included,
			)
			.filter(move |(extent, _)| extent.overlaps(dimension, start, length))
	}

	/// Returns copies of every disco overlapping `[start, start + length)`
	/// in the X-space, in sequence order. See [`DiscoMap::overlapping()`].
	pub fn x_overlaps(&self, start: usize, length: usize) -> Vec<Disco<P>>
	where
		P: Clone,
	{
		self.overlaps_cloned(Dimension::X, start, length)
	}

	/// Returns copies of every disco overlapping `[start, start + length)`
	/// in the Y-space, in sequence order. See [`DiscoMap::overlapping()`].
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoMap};
	///
	/// let map = DiscoMap::from_discos([
	/// 	Disco::with_payload(2, 1, 3, "man"),
	/// 	Disco::with_payload(8, 5, 1, "a"),
	/// 	Disco::with_payload(10, 6, 4, "Plan"),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(
	/// 	map.y_overlaps(5, 2),
	/// 	[
	/// 		Disco::with_payload(8, 5, 1, "a"),
	/// 		Disco::with_payload(10, 6, 4, "Plan"),
	/// 	]
	/// );
	/// assert!(map.y_overlaps(4, 1).is_empty());
	/// ```
	pub fn y_overlaps(&self, start: usize, length: usize) -> Vec<Disco<P>>
	where
		P: Clone,
	{
		self.overlaps_cloned(Dimension::Y, start, length)
	}

	fn overlaps_cloned(
		&self,
		dimension: Dimension,
		start: usize,
		length: usize,
	) -> Vec<Disco<P>>
	where
		P: Clone,
	{
		self.overlapping(dimension, start, length)
			.map(|(extent, payload)| Disco::from_parts(*extent, payload.clone()))
			.collect()
	}

	/// Returns the number of discos in the map.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the map contains no discos, and `false` if it
	/// does.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over the extent and payload of every disco in
	/// the map, in sequence order.
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoMap, Extent};
	///
	/// let map =
	/// 	DiscoMap::from_discos([Disco::new(0, 0, 1), Disco::new(10, 2, 2)])
	/// 		.unwrap();
	///
	/// let mut iter = map.iter();
	///
	/// assert_eq!(iter.next(), Some((&Extent::new(0, 0, 1), &())));
	/// assert_eq!(iter.next(), Some((&Extent::new(10, 2, 2), &())));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Extent, &P)> {
		self.inner.iter()
	}

	/// Returns the first disco in the map, if any.
	pub fn first(&self) -> Option<(&Extent, &P)> {
		self.inner.first_key_value()
	}

	/// Returns the last disco in the map, if any.
	///
	/// # Examples
	/// ```
	/// use discomap::{Disco, DiscoMap, Extent};
	///
	/// let map =
	/// 	DiscoMap::from_discos([Disco::new(0, 0, 1), Disco::new(10, 2, 2)])
	/// 		.unwrap();
	///
	/// assert_eq!(map.last(), Some((&Extent::new(10, 2, 2), &())));
	/// ```
	pub fn last(&self) -> Option<(&Extent, &P)> {
		self.inner.last_key_value()
	}
}

// Trait Impls ==========================

impl<P> Default for DiscoMap<P> {
	fn default() -> Self {
		DiscoMap::new()
	}
}

impl<P> TryFrom<Vec<Disco<P>>> for DiscoMap<P> {
	type Error = DiscoError;

	fn try_from(discos: Vec<Disco<P>>) -> Result<Self, Self::Error> {
		DiscoMap::from_discos(discos)
	}
}

impl<P> IntoIterator for DiscoMap<P> {
	type Item = Disco<P>;
	type IntoIter = IntoIter<P>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.inner.into_iter(),
		}
	}
}
/// An owning iterator over the discos of a [`DiscoMap`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`DiscoMap`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<P> {
	inner: BTreeMapIntoIter<Extent, P>,
}
impl<P> Iterator for IntoIter<P> {
	type Item = Disco<P>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.next()
			.map(|(extent, payload)| Disco::from_parts(extent, payload))
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Disco, DiscoMap};

	impl<P> Serialize for DiscoMap<P>
	where
		P: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for (extent, payload) in self.iter() {
				seq.serialize_element(&Disco::from_parts(*extent, payload))?;
			}
			seq.end()
		}
	}

	impl<'de, P> Deserialize<'de> for DiscoMap<P>
	where
		P: Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(DiscoMapVisitor { p: PhantomData })
		}
	}

	struct DiscoMapVisitor<P> {
		p: PhantomData<P>,
	}

	impl<'de, P> Visitor<'de> for DiscoMapVisitor<P>
	where
		P: Deserialize<'de>,
	{
		type Value = DiscoMap<P>;

		fn expecting(
			&self,
			formatter: &mut core::fmt::Formatter,
		) -> core::fmt::Result {
			formatter.write_str("a sequence of discos")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut map = DiscoMap::default();
			while let Some(disco) = access.next_element::<Disco<P>>()? {
				map.append(disco)
					.map_err(|error| serde::de::Error::custom(error.kind))?;
			}
			Ok(map)
		}
	}
}
