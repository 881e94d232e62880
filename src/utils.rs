use core::cmp::Ordering;

use crate::{Dimension, Extent};

/// Compares `point` against the range `extent` covers on `dimension`.
pub(crate) fn cmp_point_with_extent(
	dimension: Dimension,
	point: usize,
	extent: &Extent,
) -> Ordering {
	if point < extent.start(dimension) {
		Ordering::Less
	} else if extent.contains_index(dimension, point) {
		Ordering::Equal
	} else {
		Ordering::Greater
	}
}

/// Search comparator for the stored extent covering `point`.
///
/// Valid only for sequences where every adjacent pair satisfies
/// [`Extent::is_followed_by()`], since then the order by `x` and the
/// order by `y` coincide.
pub(crate) fn overlapping_comp(
	dimension: Dimension,
	point: usize,
) -> impl FnMut(&Extent) -> Ordering {
	move |inner_extent: &Extent| {
		cmp_point_with_extent(dimension, point, inner_extent)
	}
}

/// Insertion comparator ordering extents by their start on the X-space.
pub(crate) fn starts_comp() -> impl FnMut(&Extent, &Extent) -> Ordering {
	|inner_extent: &Extent, new_extent: &Extent| {
		new_extent.x.cmp(&inner_extent.x)
	}
}

/// The inclusive last point of the half-open query `[start, start +
/// length)`, clamped to `start` for empty queries so it can bound a tree
/// search.
pub(crate) fn last_query_point(start: usize, length: usize) -> usize {
	start.saturating_add(length.saturating_sub(1))
}
