//! A module containing [`Disco`], [`Extent`] and [`Dimension`].

use core::fmt;

/// One of the two coordinate spaces related by a [`Disco`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
	/// The X-space.
	X,
	/// The Y-space.
	Y,
}

impl Dimension {
	/// Returns the dimension on the other side of the mapping.
	///
	/// # Examples
	/// ```
	/// use discomap::Dimension;
	///
	/// assert_eq!(Dimension::X.other(), Dimension::Y);
	/// assert_eq!(Dimension::Y.other(), Dimension::X);
	/// ```
	pub fn other(self) -> Self {
		match self {
			Dimension::X => Dimension::Y,
			Dimension::Y => Dimension::X,
		}
	}
}

impl fmt::Display for Dimension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Dimension::X => f.write_str("x"),
			Dimension::Y => f.write_str("y"),
		}
	}
}

/// The payload-free core of a [`Disco`]: two half-open ranges of the
/// same length, `[x, x + d)` in the X-space and `[y, y + d)` in the
/// Y-space.
///
/// Index `x + k` corresponds exactly to `y + k` for every `0 <= k < d`.
///
/// All the arithmetic in this type is overflow-aware: a range whose end
/// does not fit in a `usize` behaves as if it extended past `usize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
	/// The inclusive start of the range in the X-space.
	pub x: usize,
	/// The inclusive start of the range in the Y-space.
	pub y: usize,
	/// The length shared by both ranges.
	pub d: usize,
}

impl Extent {
	/// Makes a new `Extent`.
	pub fn new(x: usize, y: usize, d: usize) -> Self {
		Extent { x, y, d }
	}

	/// Returns the inclusive start of the range on the given dimension.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Extent};
	///
	/// let extent = Extent::new(10, 20, 5);
	///
	/// assert_eq!(extent.start(Dimension::X), 10);
	/// assert_eq!(extent.start(Dimension::Y), 20);
	/// ```
	pub fn start(&self, dimension: Dimension) -> usize {
		match dimension {
			Dimension::X => self.x,
			Dimension::Y => self.y,
		}
	}

	/// Returns the exclusive end of the range on the given dimension, or
	/// `None` if it does not fit in a `usize`.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Extent};
	///
	/// let extent = Extent::new(10, 20, 5);
	///
	/// assert_eq!(extent.end(Dimension::X), Some(15));
	/// assert_eq!(extent.end(Dimension::Y), Some(25));
	/// assert_eq!(Extent::new(usize::MAX, 0, 2).end(Dimension::X), None);
	/// ```
	pub fn end(&self, dimension: Dimension) -> Option<usize> {
		self.start(dimension).checked_add(self.d)
	}

	/// Returns `true` if the extent covers at least one index and both of
	/// its ends are representable, and `false` if not.
	///
	/// # Examples
	/// ```
	/// use discomap::Extent;
	///
	/// assert_eq!(Extent::new(4, 4, 1).is_valid(), true);
	/// assert_eq!(Extent::new(4, 4, 0).is_valid(), false);
	/// assert_eq!(Extent::new(0, usize::MAX, 1).is_valid(), false);
	/// ```
	pub fn is_valid(&self) -> bool {
		self.d >= 1
			&& self.end(Dimension::X).is_some()
			&& self.end(Dimension::Y).is_some()
	}

	/// Returns `true` if `next` follows `self` on both dimensions, that is
	/// `self.x + self.d <= next.x` and `self.y + self.d <= next.y`.
	///
	/// Touching ranges follow one another, overlapping or crossing ones
	/// do not.
	///
	/// # Examples
	/// ```
	/// use discomap::Extent;
	///
	/// let first = Extent::new(2, 2, 2);
	///
	/// assert_eq!(first.is_followed_by(&Extent::new(4, 4, 1)), true);
	/// assert_eq!(first.is_followed_by(&Extent::new(3, 4, 1)), false);
	/// assert_eq!(first.is_followed_by(&Extent::new(4, 3, 1)), false);
	/// ```
	pub fn is_followed_by(&self, next: &Extent) -> bool {
		let follows = |dimension| {
			self.end(dimension)
				.is_some_and(|end| end <= next.start(dimension))
		};

		follows(Dimension::X) && follows(Dimension::Y)
	}

	/// Returns `true` if `start(dimension) <= index < end(dimension)`.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Extent};
	///
	/// let extent = Extent::new(10, 20, 10);
	///
	/// assert_eq!(extent.contains_index(Dimension::X, 10), true);
	/// assert_eq!(extent.contains_index(Dimension::X, 9), false);
	/// assert_eq!(extent.contains_index(Dimension::X, 20), false);
	/// assert_eq!(extent.contains_index(Dimension::Y, 29), true);
	/// ```
	pub fn contains_index(&self, dimension: Dimension, index: usize) -> bool {
		self.start(dimension) <= index
			&& self.end(dimension).map_or(true, |end| index < end)
	}

	/// Returns `true` if the range on the given dimension overlaps the
	/// half-open range `[start, start + length)`.
	///
	/// Ranges that only touch do not overlap, and an empty query range
	/// overlaps nothing it does not strictly cut through.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Extent};
	///
	/// let extent = Extent::new(10, 10, 10);
	///
	/// assert_eq!(extent.overlaps(Dimension::X, 8, 4), true);
	/// assert_eq!(extent.overlaps(Dimension::X, 8, 2), false);
	/// assert_eq!(extent.overlaps(Dimension::X, 20, 2), false);
	/// ```
	pub fn overlaps(
		&self,
		dimension: Dimension,
		start: usize,
		length: usize,
	) -> bool {
		let own_start = self.start(dimension);

		start
			.checked_add(length)
			.map_or(true, |query_end| own_start < query_end)
			&& self.end(dimension).map_or(true, |own_end| own_end > start)
	}

	/// Maps an index covered on `from` to its counterpart on the other
	/// dimension, or returns `None` if the extent does not cover it.
	///
	/// # Examples
	/// ```
	/// use discomap::{Dimension, Extent};
	///
	/// let extent = Extent::new(20, 5, 4);
	///
	/// assert_eq!(extent.translate(Dimension::X, 21), Some(6));
	/// assert_eq!(extent.translate(Dimension::Y, 6), Some(21));
	/// assert_eq!(extent.translate(Dimension::X, 24), None);
	/// ```
	pub fn translate(&self, from: Dimension, index: usize) -> Option<usize> {
		if !self.contains_index(from, index) {
			return None;
		}

		let offset = index - self.start(from);
		self.start(from.other()).checked_add(offset)
	}
}

impl fmt::Display for Extent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{x: {}, y: {}, d: {}}}", self.x, self.y, self.d)
	}
}

/// A discontinuous mapping: an [`Extent`] plus an opaque payload.
///
/// `P` is carried along verbatim and never inspected, every clone of a
/// `Disco` clones its payload too. With the `serde` feature the payload
/// is flattened next to `x`, `y` and `d`, so arbitrary extra fields of an
/// incoming record survive a round trip when `P` is a map type.
///
/// # Examples
/// ```
/// use discomap::{Dimension, Disco};
///
/// let plain = Disco::new(2, 1, 3);
/// let tagged = Disco::with_payload(2, 1, 3, "man");
///
/// assert_eq!(plain.extent(), tagged.extent());
/// assert_eq!(tagged.payload, "man");
/// assert_eq!(tagged.contains_index(Dimension::X, 4), true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disco<P = ()> {
	/// The inclusive start of the range in the X-space.
	pub x: usize,
	/// The inclusive start of the range in the Y-space.
	pub y: usize,
	/// The length shared by both ranges.
	pub d: usize,
	/// Caller-attached data riding along with the disco.
	#[cfg_attr(feature = "serde", serde(flatten))]
	pub payload: P,
}

impl Disco {
	/// Makes a new `Disco` without a payload.
	pub fn new(x: usize, y: usize, d: usize) -> Self {
		Disco::with_payload(x, y, d, ())
	}
}

impl<P> Disco<P> {
	/// Makes a new `Disco` carrying the given payload.
	pub fn with_payload(x: usize, y: usize, d: usize, payload: P) -> Self {
		Disco { x, y, d, payload }
	}

	/// Reassembles a `Disco` from its extent and payload.
	pub fn from_parts(extent: Extent, payload: P) -> Self {
		Disco::with_payload(extent.x, extent.y, extent.d, payload)
	}

	/// Splits the `Disco` into its extent and payload.
	pub fn into_parts(self) -> (Extent, P) {
		(Extent::new(self.x, self.y, self.d), self.payload)
	}

	/// Returns the payload-free core of the disco.
	pub fn extent(&self) -> Extent {
		Extent::new(self.x, self.y, self.d)
	}

	/// See [`Extent::is_followed_by()`].
	pub fn is_followed_by<Q>(&self, next: &Disco<Q>) -> bool {
		self.extent().is_followed_by(&next.extent())
	}

	/// See [`Extent::contains_index()`].
	pub fn contains_index(&self, dimension: Dimension, index: usize) -> bool {
		self.extent().contains_index(dimension, index)
	}

	/// See [`Extent::overlaps()`].
	pub fn overlaps(
		&self,
		dimension: Dimension,
		start: usize,
		length: usize,
	) -> bool {
		self.extent().overlaps(dimension, start, length)
	}
}

impl<P> From<Disco<P>> for Extent {
	fn from(disco: Disco<P>) -> Self {
		disco.extent()
	}
}

impl From<Extent> for Disco {
	fn from(extent: Extent) -> Self {
		Disco::from_parts(extent, ())
	}
}
