//! A module containing [`Point`], a single 1-based position in a sequence.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::utils::saturating_usize;
use crate::{CastFrom, Location, LocationError, PointInput, Range};

/// A single 1-based position in a biological sequence, along with its
/// 0-based index and the slice that selects it.
///
/// ```text
/// protein:    ELVISLIVES
/// positions:  1234567890
/// mutation:        ^
///                  6
/// ```
///
/// # Examples
/// ```
/// use seqloc::Point;
///
/// let seq = "ELVISLIVES";
/// let mutation = Point::new(6).unwrap();
///
/// assert_eq!(mutation.pos(), 6);
/// assert_eq!(mutation.index(), 5);
/// assert_eq!(&seq[mutation.slice()], "L");
/// assert_eq!(mutation.extract(seq), Some("L"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
	pos: i64,
}

impl Point {
	/// Makes a new, validated `Point` from a 1-based position.
	///
	/// `position` can be any [`PointInput`]: an integer, a numeric string,
	/// another `Point`, or a [`Range`] of length 1.
	///
	/// # Examples
	/// ```
	/// use seqloc::{ErrorKind, Point, Range};
	///
	/// assert_eq!(Point::new(3).unwrap().pos(), 3);
	/// assert_eq!(Point::new("3").unwrap().pos(), 3);
	/// assert_eq!(Point::new(Range::new(3, 3).unwrap()).unwrap().pos(), 3);
	///
	/// assert_eq!(Point::new(0).unwrap_err().kind(), ErrorKind::OutOfRange);
	/// assert_eq!(
	/// 	Point::new(Range::new(3, 4).unwrap()).unwrap_err().kind(),
	/// 	ErrorKind::IllegalConversion
	/// );
	/// ```
	pub fn new<P>(position: P) -> Result<Self, LocationError>
	where
		P: PointInput,
	{
		Self::with_validation(position, true)
	}

	/// Makes a new `Point`, only checking `pos >= 1` if `validate` is
	/// `true`.
	///
	/// Unvalidated points can later be checked with
	/// [`Location::validate()`] or [`Location::is_valid()`].
	pub fn with_validation<P>(
		position: P,
		validate: bool,
	) -> Result<Self, LocationError>
	where
		P: PointInput,
	{
		let point = Point::at(position.into_pos()?);
		if validate {
			point.validate()?;
		}
		Ok(point)
	}

	/// Makes a new, validated `Point` from a 0-based index.
	///
	/// # Examples
	/// ```
	/// use seqloc::Point;
	///
	/// let seq = "ELVISLIVES";
	/// let index = seq.find('L').unwrap() as i64;
	///
	/// assert_eq!(Point::from_index(index).unwrap().pos(), 2);
	/// assert!(Point::from_index(-1).is_err());
	/// ```
	pub fn from_index(index: i64) -> Result<Self, LocationError> {
		Self::from_index_with_validation(index, true)
	}

	/// Makes a new `Point` from a 0-based index, only checking
	/// `index >= 0` if `validate` is `true`.
	pub fn from_index_with_validation(
		index: i64,
		validate: bool,
	) -> Result<Self, LocationError> {
		Self::with_validation(index.saturating_add(1), validate)
	}

	pub(crate) const fn at(pos: i64) -> Self {
		Point { pos }
	}

	pub(crate) fn from_index_unchecked(index: i64) -> Self {
		Point::at(index.saturating_add(1))
	}

	/// Combines two points in index space.
	pub(crate) fn join(self, other: Point, op: fn(i64, i64) -> i64) -> Self {
		Point::from_index_unchecked(op(self.index(), other.index()))
	}

	/// The 1-based position.
	pub fn pos(&self) -> i64 {
		self.pos
	}

	/// The 0-based index, `pos - 1`.
	pub fn index(&self) -> i64 {
		self.pos.saturating_sub(1)
	}

	/// The half-open slice, `index..index + 1`, selecting this position out
	/// of a sequence.
	pub fn slice(&self) -> core::ops::Range<usize> {
		saturating_usize(self.index())..saturating_usize(self.pos)
	}

	/// Returns the residue at this position in `full_sequence`, or `None`
	/// if the point is invalid or outside of the sequence.
	pub fn extract<'a>(&self, full_sequence: &'a str) -> Option<&'a str> {
		if !self.is_valid() {
			return None;
		}
		full_sequence.get(self.slice())
	}
}

impl Location for Point {
	type Pos = i64;
	type Index = i64;

	fn pos(&self) -> i64 {
		self.pos
	}

	fn index(&self) -> i64 {
		Point::index(self)
	}

	fn slice(&self) -> core::ops::Range<usize> {
		Point::slice(self)
	}

	fn validate(&self) -> Result<(), LocationError> {
		if self.pos < 1 {
			return Err(LocationError::PositionBelowOne { pos: self.pos });
		}
		Ok(())
	}
}

impl<T> CastFrom<T> for Point
where
	T: PointInput,
{
	fn cast_from(value: T) -> Result<Self, LocationError> {
		Point::with_validation(value, false)
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.pos)
	}
}

impl fmt::Debug for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Point({})", self.pos)
	}
}

impl FromStr for Point {
	type Err = LocationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Point::new(s)
	}
}

impl TryFrom<&Range> for Point {
	type Error = LocationError;

	fn try_from(range: &Range) -> Result<Self, Self::Error> {
		Point::with_validation(range, false)
	}
}

impl TryFrom<Range> for Point {
	type Error = LocationError;

	fn try_from(range: Range) -> Result<Self, Self::Error> {
		Point::try_from(&range)
	}
}

impl PartialEq<i64> for Point {
	fn eq(&self, other: &i64) -> bool {
		self.pos == *other
	}
}
impl PartialEq<Point> for i64 {
	fn eq(&self, other: &Point) -> bool {
		*self == other.pos
	}
}
impl PartialOrd<i64> for Point {
	fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
		Some(self.pos.cmp(other))
	}
}
impl PartialOrd<Point> for i64 {
	fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
		Some(self.cmp(&other.pos))
	}
}

impl PartialEq<Range> for Point {
	fn eq(&self, other: &Range) -> bool {
		Range::from(*self) == *other
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::Point;

	impl Serialize for Point {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_i64(self.pos())
		}
	}

	impl<'de> Deserialize<'de> for Point {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let pos = i64::deserialize(deserializer)?;
			Point::new(pos).map_err(serde::de::Error::custom)
		}
	}
}
