//! A module containing the [`Location`] trait, the contract shared by
//! [`Point`] and [`Range`], and the [`CastFrom`] trait it uses to compare
//! locations against loosely typed values.
//!
//! [`Point`]: crate::Point
//! [`Range`]: crate::Range

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::hash::Hash;

use crate::LocationError;

/// Casting a loosely typed value into a location *without* validating
/// it, the same way the unvalidated constructors do.
///
/// This is what allows `Point(2)` to be compared with `"2"`, or a
/// `Range(5, 9)` with `(5, 9)`.
pub trait CastFrom<T>: Sized {
	/// Casts `value` into `Self`, returning an error if `value` cannot be
	/// normalized.
	fn cast_from(value: T) -> Result<Self, LocationError>;
}

/// The behaviour shared by all sequence locations.
///
/// Ordering, equality and hashing come from the standard traits and are
/// derived from the canonical 1-based `pos` of a location. The methods on
/// this trait add:
///
/// - validation, which is lazy for values built without it (see
///   [`Location::validate()`]),
/// - loosely typed comparisons, which cast the other operand with
///   [`CastFrom`] first. Equality never fails ([`Location::try_eq()`]
///   returns `false` when the cast fails), ordering does (the
///   `try_lt`-family return the cast error).
///
/// Arithmetic (`+`, `-`) is implemented on the concrete types and always
/// happens in index space, see the crate-level documentation.
pub trait Location: Clone + Eq + Ord + Hash + Debug + Display {
	/// The 1-based position representation: `i64` for a point,
	/// `(start, stop)` for a range.
	type Pos: Copy + Ord + Hash + Debug;
	/// The 0-based index representation.
	type Index: Copy + Ord + Hash + Debug;

	/// The canonical 1-based position(s) of the location.
	fn pos(&self) -> Self::Pos;

	/// The 0-based index(es) of the location.
	fn index(&self) -> Self::Index;

	/// The half-open slice selecting the location out of a sequence.
	///
	/// Only meaningful for valid locations, negative indexes saturate at 0.
	fn slice(&self) -> core::ops::Range<usize>;

	/// Checks the invariants of the location, returning an error of kind
	/// [`ErrorKind::OutOfRange`] if they do not hold.
	///
	/// [`ErrorKind::OutOfRange`]: crate::ErrorKind::OutOfRange
	fn validate(&self) -> Result<(), LocationError>;

	/// Returns `true` if [`Location::validate()`] succeeds.
	fn is_valid(&self) -> bool {
		self.validate().is_ok()
	}

	/// Returns `self` if it is valid and the validation error otherwise,
	/// useful for ending a chain of unvalidated arithmetic.
	///
	/// # Examples
	/// ```
	/// use seqloc::{Location, Point};
	///
	/// let point = Point::new(2).unwrap();
	///
	/// // passes through an invalid intermediate value
	/// let shifted = (point - 5 + 4).validated().unwrap();
	///
	/// assert_eq!(shifted, Point::new(1).unwrap());
	/// assert!((point - 5).validated().is_err());
	/// ```
	fn validated(self) -> Result<Self, LocationError> {
		self.validate()?;
		Ok(self)
	}

	/// Loosely typed equality, `other` is cast into `Self` first and the
	/// result is `false` if that fails.
	///
	/// # Examples
	/// ```
	/// use seqloc::{Location, Range};
	///
	/// let range = Range::new(5, 9).unwrap();
	///
	/// assert_eq!(range.try_eq("5:9"), true);
	/// assert_eq!(range.try_eq((5, 9)), true);
	/// assert_eq!(range.try_eq("five:nine"), false);
	/// ```
	fn try_eq<T>(&self, other: T) -> bool
	where
		Self: CastFrom<T>,
	{
		Self::cast_from(other).is_ok_and(|other| *self == other)
	}

	/// Loosely typed ordering, `other` is cast into `Self` first and the
	/// cast error is returned if that fails.
	fn try_cmp<T>(&self, other: T) -> Result<Ordering, LocationError>
	where
		Self: CastFrom<T>,
	{
		Ok(self.cmp(&Self::cast_from(other)?))
	}

	/// Loosely typed `<`, see [`Location::try_cmp()`].
	///
	/// # Examples
	/// ```
	/// use seqloc::{Location, Point};
	///
	/// let point = Point::new(5).unwrap();
	///
	/// assert_eq!(point.try_lt("6"), Ok(true));
	/// assert!(point.try_lt("six").is_err());
	/// ```
	fn try_lt<T>(&self, other: T) -> Result<bool, LocationError>
	where
		Self: CastFrom<T>,
	{
		self.try_cmp(other).map(Ordering::is_lt)
	}

	/// Loosely typed `>`, see [`Location::try_cmp()`].
	fn try_gt<T>(&self, other: T) -> Result<bool, LocationError>
	where
		Self: CastFrom<T>,
	{
		self.try_cmp(other).map(Ordering::is_gt)
	}

	/// Loosely typed `<=`, see [`Location::try_cmp()`].
	fn try_le<T>(&self, other: T) -> Result<bool, LocationError>
	where
		Self: CastFrom<T>,
	{
		self.try_cmp(other).map(Ordering::is_le)
	}

	/// Loosely typed `>=`, see [`Location::try_cmp()`].
	fn try_ge<T>(&self, other: T) -> Result<bool, LocationError>
	where
		Self: CastFrom<T>,
	{
		self.try_cmp(other).map(Ordering::is_ge)
	}
}
