//! A module containing the input traits [`PointInput`], [`RangeInput`] and
//! [`SliceInput`], which describe every shape of value the constructors of
//! [`Point`] and [`Range`] accept.
//!
//! I use these "newtype" traits instead of [`TryFrom`] because the casting
//! constructors must also accept a [`Point`] for a [`Point`] (and a
//! [`Range`] for a [`Range`]), and the blanket `TryFrom<T> for T`
//! implementation in `core` makes that impossible with a custom error type.

use core::fmt::Debug;

use crate::{LocationError, Point, Range};

/// Values that can be normalized to a single 1-based position.
///
/// Implemented for the primitive integers, numeric strings, [`Point`] and
/// [`Range`] (only when the range has a length of exactly 1).
pub trait PointInput {
	/// Normalizes `self` to a 1-based position without validating it.
	fn into_pos(self) -> Result<i64, LocationError>;

	/// Returns `true` if `self` is already a [`Point`] or [`Range`] rather
	/// than a raw number.
	fn is_location(&self) -> bool {
		false
	}
}

/// The normalized shape of a [`Range`] constructor argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeParts {
	/// A single scalar, the stop has to come from somewhere else.
	Single(i64),
	/// A `(start, stop)` pair.
	Pair(i64, i64),
	/// An existing range, its bounds and `seq` are reused.
	Range(Range),
}

/// Values that can be normalized to the start (and possibly the stop) of a
/// [`Range`].
///
/// Implemented for everything that implements [`PointInput`] except
/// [`Range`] itself, which is kept whole, as well as for colon strings
/// (`"5:10"`), 2-tuples, 2-arrays and slices of length 2.
pub trait RangeInput {
	/// Normalizes `self` to [`RangeParts`] without validating it.
	fn into_range_parts(self) -> Result<RangeParts, LocationError>;

	/// Returns `true` if `self` is already a [`Point`] or [`Range`] rather
	/// than raw numbers.
	fn is_location(&self) -> bool {
		false
	}
}

/// Values that describe a half-open, 0-based slice of a sequence.
pub trait SliceInput {
	/// Returns the `(start, stop)` slice coordinates of `self`.
	fn into_slice_bounds(self) -> Result<(i64, i64), LocationError>;
}

macro_rules! integer_input {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl PointInput for $ident {
			#[allow(clippy::useless_conversion)]
			fn into_pos(self) -> Result<i64, LocationError> {
				i64::try_from(self).map_err(|_| {
					LocationError::unparseable(self, "does not fit in an i64")
				})
			}
		}

		impl RangeInput for $ident {
			fn into_range_parts(self) -> Result<RangeParts, LocationError> {
				self.into_pos().map(RangeParts::Single)
			}
		}

		integer_input!($($t)*);
	};
}

integer_input!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize,);

fn parse_pos(input: &str) -> Result<i64, LocationError> {
	input
		.trim()
		.parse::<i64>()
		.map_err(|error| LocationError::unparseable(input, error.to_string()))
}

fn parse_range(input: &str) -> Result<RangeParts, LocationError> {
	if !input.contains(Range::SEPARATOR) {
		return parse_pos(input).map(RangeParts::Single);
	}

	let mut parts = input.split(Range::SEPARATOR);
	match (parts.next(), parts.next(), parts.next()) {
		(Some(start), Some(stop), None) => {
			Ok(RangeParts::Pair(parse_pos(start)?, parse_pos(stop)?))
		}
		_ => Err(LocationError::unparseable(
			input,
			format!("expected exactly one {:?}", Range::SEPARATOR),
		)),
	}
}

impl PointInput for &str {
	fn into_pos(self) -> Result<i64, LocationError> {
		parse_pos(self)
	}
}
impl PointInput for String {
	fn into_pos(self) -> Result<i64, LocationError> {
		parse_pos(&self)
	}
}
impl PointInput for &String {
	fn into_pos(self) -> Result<i64, LocationError> {
		parse_pos(self)
	}
}

impl RangeInput for &str {
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		parse_range(self)
	}
}
impl RangeInput for String {
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		parse_range(&self)
	}
}
impl RangeInput for &String {
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		parse_range(self)
	}
}

impl PointInput for Point {
	fn into_pos(self) -> Result<i64, LocationError> {
		Ok(self.pos())
	}

	fn is_location(&self) -> bool {
		true
	}
}
impl PointInput for &Point {
	fn into_pos(self) -> Result<i64, LocationError> {
		Ok(self.pos())
	}

	fn is_location(&self) -> bool {
		true
	}
}
impl PointInput for &Range {
	fn into_pos(self) -> Result<i64, LocationError> {
		if self.length() != 1 {
			return Err(LocationError::illegal_conversion(format!(
				"can only convert a Range to a Point if its length is 1, \
				 {self:?} has length {}",
				self.length()
			)));
		}
		Ok(self.start().pos())
	}

	fn is_location(&self) -> bool {
		true
	}
}
impl PointInput for Range {
	fn into_pos(self) -> Result<i64, LocationError> {
		(&self).into_pos()
	}

	fn is_location(&self) -> bool {
		true
	}
}

impl RangeInput for Point {
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		Ok(RangeParts::Single(self.pos()))
	}

	fn is_location(&self) -> bool {
		true
	}
}
impl RangeInput for &Point {
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		Ok(RangeParts::Single(self.pos()))
	}

	fn is_location(&self) -> bool {
		true
	}
}
impl RangeInput for Range {
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		Ok(RangeParts::Range(self))
	}

	fn is_location(&self) -> bool {
		true
	}
}
impl RangeInput for &Range {
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		Ok(RangeParts::Range(self.clone()))
	}

	fn is_location(&self) -> bool {
		true
	}
}

impl<A, B> RangeInput for (A, B)
where
	A: PointInput,
	B: PointInput,
{
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		Ok(RangeParts::Pair(self.0.into_pos()?, self.1.into_pos()?))
	}
}

impl<T> RangeInput for [T; 2]
where
	T: PointInput,
{
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		let [start, stop] = self;
		(start, stop).into_range_parts()
	}
}

impl<T> RangeInput for &[T]
where
	T: PointInput + Clone + Debug,
{
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		match self {
			[start, stop] => (start.clone(), stop.clone()).into_range_parts(),
			_ => Err(LocationError::unparseable(
				self,
				format!("expected 2 elements, found {}", self.len()),
			)),
		}
	}
}

impl<T> RangeInput for Vec<T>
where
	T: PointInput + Clone + Debug,
{
	fn into_range_parts(self) -> Result<RangeParts, LocationError> {
		self.as_slice().into_range_parts()
	}
}

impl SliceInput for core::ops::Range<usize> {
	fn into_slice_bounds(self) -> Result<(i64, i64), LocationError> {
		Ok((self.start.into_pos()?, self.end.into_pos()?))
	}
}
impl SliceInput for core::ops::Range<i64> {
	fn into_slice_bounds(self) -> Result<(i64, i64), LocationError> {
		Ok((self.start, self.end))
	}
}
impl SliceInput for (i64, i64) {
	fn into_slice_bounds(self) -> Result<(i64, i64), LocationError> {
		Ok(self)
	}
}
/// A `(start, stop, step)` slice, the step has to be 1.
impl SliceInput for (i64, i64, i64) {
	fn into_slice_bounds(self) -> Result<(i64, i64), LocationError> {
		let (start, stop, step) = self;
		if step != 1 {
			return Err(LocationError::unparseable(
				self,
				"a slice has to have a step of 1 to be a valid Range",
			));
		}
		Ok((start, stop))
	}
}
