//! This crate provides [`DiscoMap`], a Data Structure relating two
//! otherwise unrelated coordinate spaces through an ordered sequence of
//! discontinuous mappings ("discos"), based off [`BTreeMap`].
//!
//! A disco `{x, y, d}` declares that the half-open ranges `[x, x + d)` in
//! the X-space and `[y, y + d)` in the Y-space are isomorphic: index
//! `x + k` corresponds exactly to `y + k`. A sequence of discos then
//! describes a piecewise-linear bijection between the covered parts of
//! both spaces, for example between the characters of a string and the
//! characters left over after a lossy transformation of it.
//!
//! ## Example aligning a string with its letters
//!
//! ```rust
//! use discomap::{Disco, DiscoMap};
//!
//! let text = "a man, a plan";
//! let letters = "amanaplan";
//!
//! let map = DiscoMap::from_discos([
//! 	Disco::with_payload(0, 0, 1, "a"),
//! 	Disco::with_payload(2, 1, 3, "man"),
//! 	Disco::with_payload(7, 4, 1, "a"),
//! 	Disco::with_payload(9, 5, 4, "plan"),
//! ])
//! .unwrap();
//!
//! // the 'p' of "plan"
//! let y = map.x_to_y(9).unwrap();
//! assert_eq!(&letters[y..=y], &text[9..=9]);
//!
//! // the ", " after "man" is not mapped
//! assert!(map.x_to_y(5).is_err());
//!
//! // everything in the letters' "nap" region
//! let names: Vec<&str> =
//! 	map.y_overlaps(3, 3).into_iter().map(|d| d.payload).collect();
//! assert_eq!(names, ["man", "a", "plan"]);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Ranges
//!
//! All ranges are half-open, `[min, max)` with `max = min + d`. A disco
//! with `d = 0` covers nothing and is never accepted. `[0, 3)` and
//! `[3, 6)` touch but do not overlap.
//!
//! ### Sequencing
//!
//! Discos in a [`DiscoMap`] are kept in sequence order and each one must
//! follow its predecessor on both dimensions:
//!
//! `d[n].x >= d[n-1].x + d[n-1].d` and `d[n].y >= d[n-1].y + d[n-1].d`
//!
//! So ranges never overlap within a dimension and mappings never cross.
//! [`DiscoMap::append()`] checks a new disco against the last one only,
//! which is enough to keep an already valid sequence valid, whereas
//! [`DiscoMap::set_all()`] checks a whole new sequence from scratch.
//!
//! ### Translation
//!
//! Only covered indexes translate. Gaps between discos, and everything
//! before the first or after the last disco, are unmapped and give
//! [`DiscoError::OutOfRange`].
//!
//! ### Payloads
//!
//! Each disco carries a payload of a generic type `P` which the map stores
//! and clones but never inspects. Methods handing out discos by value
//! return independent copies.
//!
//! The pure functions the map is built on are also available over plain
//! slices in the [`sequence`] module.
//!
//! [`btreemap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub(crate) mod utils;

pub mod disco;
pub mod error;
pub mod map;
pub mod sequence;

pub use crate::disco::{Dimension, Disco, Extent};
pub use crate::error::{DiscoError, InsertError};
pub use crate::map::DiscoMap;
