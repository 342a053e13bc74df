//! This crate provides [`Point`] and [`Range`], value types for describing
//! locations in biological sequences (proteins, genes) using the 1-based,
//! inclusive numbering biologists use, while converting losslessly to the
//! 0-based indexes and half-open slices Rust uses to index into a `str`.
//!
//! ## Example
//!
//! ```rust
//! use seqloc::{Location, Point, Range};
//!
//! let protein = "ELVISLIVES";
//!
//! // the 6th residue, counting from 1
//! let mutation = Point::new(6).unwrap();
//! assert_eq!(mutation.index(), 5);
//! assert_eq!(&protein[mutation.slice()], "L");
//!
//! // residues 6 to 9, both inclusive
//! let peptide = Range::from_sequence(protein, "LIVE").unwrap();
//! assert_eq!(peptide.pos(), (6, 9));
//! assert_eq!(peptide.index(), (5, 8));
//! assert_eq!(&protein[peptide.slice()], "LIVE");
//!
//! assert_eq!(peptide.contains(mutation), true);
//! assert_eq!(peptide.to_string(), "6:9");
//! assert_eq!("6:9".parse::<Range>().unwrap(), Range::new(6, 9).unwrap());
//!
//! // comparisons can cast loosely typed values
//! assert_eq!(mutation.try_eq("6"), true);
//! assert_eq!(Range::new(6, 9).unwrap().try_eq((6, 9)), true);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Positions, Indexes and Slices
//!
//! Every location can be expressed three ways:
//!
//! | location         | pos      | index    | slice   |
//! | ---------------- | -------- | -------- | ------- |
//! | `Point(6)`       | `6`      | `5`      | `5..6`  |
//! | `Range(6, 9)`    | `(6, 9)` | `(5, 8)` | `5..9`  |
//!
//! The `pos` is the canonical form: ordering, equality and hashing are all
//! derived from it.
//!
//! ### Validity
//!
//! A `Point` is valid if its position is at least 1, a `Range` is valid if
//! its start is a valid `Point` and its stop is not before its start.
//!
//! The constructors validate eagerly by default, but unvalidated values
//! can be built on purpose (see [`Point::with_validation()`] and
//! [`RangeBuilder::validate()`]) and are produced by arithmetic, they can
//! be checked later with [`Location::validate()`],
//! [`Location::is_valid()`] or [`Location::validated()`].
//!
//! ### Arithmetic
//!
//! `+` and `-` operate on **indexes**, not on positions. This means that
//! `Point(1) + Point(1) == Point(1)` since `0 + 0 == 0`, and that a plain
//! integer on either side is an offset:
//!
//! ```rust
//! use seqloc::{Location, Point, Range};
//!
//! let p = |pos: i64| Point::new(pos).unwrap();
//! let r = |start: i64, stop: i64| Range::new(start, stop).unwrap();
//!
//! assert_eq!(p(1) + p(1), p(1));
//! assert_eq!(p(1) + 1, p(2));
//! assert_eq!(r(2, 5) - 1, r(1, 4));
//! assert_eq!(3_i64 + r(2, 5), r(5, 8));
//! assert_eq!(r(5, 10) - (3_i64, 2_i64), r(2, 8));
//!
//! // results are not validated
//! assert_eq!((p(2) - 2).is_valid(), false);
//! ```
//!
//! ### Sequences
//!
//! Sequences are treated as byte strings, which is all biological
//! alphabets need: lengths are byte lengths and slices are byte slices.
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` implementations for [`Point`]
//!   and [`Range`], deserializing re-validates the values.

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

#[cfg(test)]
pub(crate) mod test_locations;
pub(crate) mod utils;

pub mod error;
pub mod input;
pub mod location;
pub mod ops;
pub mod point;
pub mod range;

pub use crate::error::{ErrorKind, LocationError};
pub use crate::input::{PointInput, RangeInput, RangeParts, SliceInput};
pub use crate::location::{CastFrom, Location};
pub use crate::point::Point;
pub use crate::range::{Part, Points, Range, RangeBuilder};
