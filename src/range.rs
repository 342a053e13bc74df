//! A module containing [`Range`], an inclusive interval of 1-based
//! positions in a sequence, along with its [`RangeBuilder`] and the
//! [`Points`] iterator.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

use log::{debug, trace};

use crate::input::RangeParts;
use crate::utils::{
	abbreviate, contains_bounds, len_i64, overlaps, saturating_usize,
};
use crate::{
	CastFrom, Location, LocationError, Point, PointInput, RangeInput,
	SliceInput,
};

/// An inclusive interval `[start, stop]` of 1-based positions in a
/// biological sequence, optionally carrying the subsequence it denotes.
///
/// ```text
/// protein:    ELVISLIVES
/// positions:  1234567890
/// peptide:         LIVE
///                  6  9
/// ```
///
/// A `Range` can be built from two positions, from a colon string, from a
/// pair, from 0-based indexes, from a slice, from a center and a window, or
/// by finding a subsequence, see the various constructors below.
///
/// `==` and [`Hash`] take the `seq` into account, use [`Range::equals()`]
/// to compare only the bounds. [`Ord`] compares the `(start, stop)`
/// positions lexicographically and breaks ties on `seq` (`None` first).
///
/// # Examples
/// ```
/// use seqloc::Range;
///
/// let seq = "ELVISLIVES";
/// let peptide = Range::builder(6).stop(9).full_sequence(seq).build().unwrap();
///
/// assert_eq!(peptide.pos(), (6, 9));
/// assert_eq!(peptide.index(), (5, 8));
/// assert_eq!(peptide.slice(), 5..9);
/// assert_eq!(peptide.seq(), Some("LIVE"));
/// assert_eq!(&seq[peptide.slice()], "LIVE");
///
/// // (1, 5) < (6, 9)
/// assert!(Range::new(1, 5).unwrap() < peptide);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
	start: Point,
	stop: Point,
	seq: Option<String>,
}

/// Which part of an item has to be inside a [`Range`] for
/// [`Range::contains_part()`] to return `true`.
///
/// ```text
/// range: -----ELVISLIVES
/// item:  ----------L----         All: true,  Any: true
/// item:  ----------LIVE-         All: true,  Any: true
/// item:  ----------LIVESANDDIES  All: false, Any: true
/// item:  ELVENELVISLIVESANDDIES  All: false, Any: true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Part {
	/// Every position of the item has to be inside the range.
	#[default]
	All,
	/// At least one position of the item has to be inside the range.
	Any,
}

/// The coordinate system the numbers given to a [`RangeBuilder`] are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coordinates {
	/// 1-based, inclusive positions.
	Position,
	/// 0-based, inclusive indexes.
	Index,
	/// 0-based, half-open slice bounds.
	Slice,
}

impl Coordinates {
	/// What has to be added to `(start, stop)` to get positions.
	fn offsets(self) -> (i64, i64) {
		match self {
			Coordinates::Position => (0, 0),
			Coordinates::Index => (1, 1),
			Coordinates::Slice => (1, 0),
		}
	}
}

/// A builder for the full [`Range`] constructor, see [`Range::builder()`].
///
/// Errors from converting the inputs are held until [`RangeBuilder::build()`]
/// is called.
#[derive(Debug)]
pub struct RangeBuilder<'a> {
	start: Result<RangeParts, LocationError>,
	stop: Option<Result<i64, LocationError>>,
	seq: Option<String>,
	full_sequence: Option<&'a str>,
	length: Option<i64>,
	validate: bool,
	coordinates: Coordinates,
	given_location: bool,
}

impl<'a> RangeBuilder<'a> {
	fn new<S>(start: S, coordinates: Coordinates) -> Self
	where
		S: RangeInput,
	{
		RangeBuilder {
			given_location: start.is_location(),
			start: start.into_range_parts(),
			stop: None,
			seq: None,
			full_sequence: None,
			length: None,
			validate: true,
			coordinates,
		}
	}

	/// Sets the stop of the range, in the same coordinates as the start.
	///
	/// Must not be used when the start was already a pair, a colon string or
	/// a [`Range`].
	pub fn stop<P>(mut self, stop: P) -> Self
	where
		P: PointInput,
	{
		self.given_location |= stop.is_location();
		self.stop = Some(stop.into_pos());
		self
	}

	/// Sets the subsequence the range denotes, its length has to match the
	/// length of the range.
	///
	/// If no stop was given, the stop is inferred from the length of `seq`.
	pub fn seq(mut self, seq: impl Into<String>) -> Self {
		self.seq = Some(seq.into());
		self
	}

	/// Sets the full sequence the range is a part of, the subsequence is
	/// sliced out of it when no [`RangeBuilder::seq()`] is given.
	pub fn full_sequence(mut self, full_sequence: &'a str) -> Self {
		self.full_sequence = Some(full_sequence);
		self
	}

	/// Sets the length of the range, used to infer the stop if none was
	/// given.
	pub fn length(mut self, length: i64) -> Self {
		self.length = Some(length);
		self
	}

	/// Whether to check the invariants of the range when building it,
	/// defaults to `true`.
	///
	/// An unvalidated range can later be checked with
	/// [`Location::validate()`] or [`Location::is_valid()`].
	pub fn validate(mut self, validate: bool) -> Self {
		self.validate = validate;
		self
	}

	/// Builds the [`Range`].
	///
	/// The stop is resolved in the following order: the explicit stop (or
	/// the stop in a pair, colon string or range given as the start), then
	/// `start + length - 1`, then `start + seq.len() - 1`, and lastly the
	/// start itself, giving a range of length 1. Inferred stops are counted
	/// from the 1-based start whatever coordinates the builder takes, so an
	/// empty `seq` gives a stop before the start.
	pub fn build(self) -> Result<Range, LocationError> {
		let RangeBuilder {
			start,
			stop,
			seq,
			full_sequence,
			length,
			validate,
			coordinates,
			given_location,
		} = self;

		if coordinates != Coordinates::Position && given_location {
			return Err(LocationError::illegal_conversion(
				"indexes and slice bounds have to be raw numbers, not a Point \
				 or Range",
			));
		}

		let parts = start?;
		if stop.is_some() && !matches!(parts, RangeParts::Single(_)) {
			return Err(LocationError::unparseable(
				&parts,
				"either start and stop are both scalars, or start is a pair \
				 (or a range) and stop is omitted: use Range::new(2, 5) or \
				 Range::builder((2, 5)) but not Range::builder((2, 5)).stop(5)",
			));
		}
		let stop = stop.transpose()?;

		let (start, stop, inherited_seq) = match parts {
			RangeParts::Single(start) => (start, stop, None),
			RangeParts::Pair(start, stop) => (start, Some(stop), None),
			RangeParts::Range(range) => {
				(range.start.pos(), Some(range.stop.pos()), range.seq)
			}
		};

		//inferred stops are resolved in position space
		let (start_offset, stop_offset) = coordinates.offsets();
		let start = start.saturating_add(start_offset);
		let stop = match (stop, length, &seq) {
			(Some(stop), _, _) => stop.saturating_add(stop_offset),
			(None, Some(length), _) => {
				start.saturating_add(length).saturating_sub(1)
			}
			(None, None, Some(seq)) => {
				start.saturating_add(len_i64(seq)).saturating_sub(1)
			}
			(None, None, None) => start,
		};

		let seq = match (seq, full_sequence) {
			(None, None) => inherited_seq,
			(seq, _) => seq,
		};

		let start = Point::with_validation(start, validate)?;
		let stop = Point::with_validation(stop, validate)?;

		let range = Range::from_parts_unchecked(start, stop, None);
		if validate {
			range.validate()?;
		}

		let seq = range.resolve_seq(seq, full_sequence)?;
		return Ok(Range { seq, ..range });
	}
}

impl Range {
	/// The separator used in the colon string form of a range: `"5:10"`.
	pub const SEPARATOR: char = ':';

	/// Makes a new, validated `Range` from its 1-based inclusive start and
	/// stop.
	///
	/// # Examples
	/// ```
	/// use seqloc::{ErrorKind, Point, Range};
	///
	/// let range = Range::new(3, 6).unwrap();
	///
	/// assert_eq!(range.length(), 4);
	/// assert_eq!(Range::new("3", Point::new(6).unwrap()), Ok(range));
	///
	/// assert_eq!(Range::new(6, 3).unwrap_err().kind(), ErrorKind::OutOfRange);
	/// assert_eq!(Range::new(0, 3).unwrap_err().kind(), ErrorKind::OutOfRange);
	/// ```
	pub fn new<S, P>(start: S, stop: P) -> Result<Self, LocationError>
	where
		S: PointInput,
		P: PointInput,
	{
		Range::builder(start.into_pos()?).stop(stop).build()
	}

	/// Returns a [`RangeBuilder`] for the full constructor, taking 1-based
	/// positions.
	///
	/// `start` can be a scalar, a numeric string, a [`Point`], a colon
	/// string (`"5:10"`), a pair (`(5, 10)`), or another `Range` whose
	/// bounds (and `seq` if no other `seq` or `full_sequence` is given) are
	/// copied.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let expected = Range::new(1, 3).unwrap();
	///
	/// assert_eq!(Range::builder(1).stop(3).build(), Ok(expected.clone()));
	/// assert_eq!(Range::builder((1, 3)).build(), Ok(expected.clone()));
	/// assert_eq!(Range::builder("1:3").build(), Ok(expected.clone()));
	/// assert_eq!(Range::builder(1).length(3).build(), Ok(expected.clone()));
	///
	/// // a seq is kept, so the ranges are only equal in their bounds
	/// let with_seq = Range::builder(1).seq("ELV").build().unwrap();
	/// assert!(with_seq.equals(&expected, false, true));
	///
	/// // without a stop, length or seq, the range has a length of 1
	/// assert_eq!(Range::builder(1).build().unwrap().pos(), (1, 1));
	/// ```
	pub fn builder<'a, S>(start: S) -> RangeBuilder<'a>
	where
		S: RangeInput,
	{
		RangeBuilder::new(start, Coordinates::Position)
	}

	/// Returns a [`RangeBuilder`] taking 0-based inclusive indexes.
	///
	/// A pair given as `start_index` is unpacked into the start and stop
	/// indexes. [`Point`]s and `Range`s are rejected since they are not
	/// indexes.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let range = Range::index_builder((5, 8)).build().unwrap();
	///
	/// assert_eq!(range.pos(), (6, 9));
	/// ```
	pub fn index_builder<'a, S>(start_index: S) -> RangeBuilder<'a>
	where
		S: RangeInput,
	{
		RangeBuilder::new(start_index, Coordinates::Index)
	}

	/// Returns a [`RangeBuilder`] taking 0-based half-open slice bounds.
	pub fn slice_builder<'a, S>(start_slice: S) -> RangeBuilder<'a>
	where
		S: RangeInput,
	{
		RangeBuilder::new(start_slice, Coordinates::Slice)
	}

	/// Makes a new, validated `Range` from 0-based inclusive indexes.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let range = Range::new(6, 9).unwrap();
	///
	/// assert_eq!(Range::from_index(5, 8), Ok(range.clone()));
	/// assert_eq!(Range::from_index(range.index().0, range.index().1), Ok(range));
	/// ```
	pub fn from_index(
		start_index: i64,
		stop_index: i64,
	) -> Result<Self, LocationError> {
		Range::index_builder(start_index).stop(stop_index).build()
	}

	/// Makes a new, validated `Range` of `center ± window`, clamped to 1 at
	/// the start and to `max_length` (if given) at the stop.
	///
	/// See [`Range::center_and_window_builder()`] for attaching a `seq` or
	/// skipping validation.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let window = |center, window, max_length| {
	/// 	Range::from_center_and_window(center, window, max_length)
	/// 		.unwrap()
	/// 		.pos()
	/// };
	///
	/// assert_eq!(window(10, 5, None), (5, 15));
	/// // cannot extend past position 1
	/// assert_eq!(window(10, 15, None), (1, 25));
	/// // cannot extend past max_length
	/// assert_eq!(window(100, 10, Some(105)), (90, 105));
	/// ```
	pub fn from_center_and_window(
		center: i64,
		window: i64,
		max_length: Option<i64>,
	) -> Result<Self, LocationError> {
		Range::center_and_window_builder(center, window, max_length).build()
	}

	/// Returns a [`RangeBuilder`] with the bounds of
	/// [`Range::from_center_and_window()`] already set, the remaining
	/// builder options (`seq`, `full_sequence`, `validate`) can still be
	/// given.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let range = Range::center_and_window_builder(7, 1, None)
	/// 	.full_sequence("ELVISLIVES")
	/// 	.build()
	/// 	.unwrap();
	///
	/// assert_eq!(range.pos(), (6, 8));
	/// assert_eq!(range.seq(), Some("LIV"));
	/// ```
	pub fn center_and_window_builder<'a>(
		center: i64,
		window: i64,
		max_length: Option<i64>,
	) -> RangeBuilder<'a> {
		let start = center.saturating_sub(window).max(1);
		let stop = center.saturating_add(window);
		let stop = max_length.map_or(stop, |max_length| stop.min(max_length));

		Range::builder(start).stop(stop)
	}

	/// Makes a new, validated `Range` from a 0-based half-open slice.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let seq = "ELVISLIVES";
	/// let peptide = Range::from_slice(5..9_usize).unwrap();
	///
	/// assert_eq!(peptide.pos(), (6, 9));
	/// assert_eq!(&seq[peptide.slice()], "LIVE");
	///
	/// assert_eq!(Range::from_slice((5, 9)), Ok(peptide));
	/// assert!(Range::from_slice((5, 9, 2)).is_err());
	/// ```
	pub fn from_slice<S>(slice: S) -> Result<Self, LocationError>
	where
		S: SliceInput,
	{
		let (start, stop) = slice.into_slice_bounds()?;
		Range::slice_builder(start).stop(stop).build()
	}

	/// Makes a new, validated `Range` by finding `sequence` in
	/// `full_sequence`, the range carries `sequence` as its `seq`.
	///
	/// **Warning:** if `sequence` occurs multiple times in `full_sequence`,
	/// the first occurrence is used.
	///
	/// # Examples
	/// ```
	/// use seqloc::{ErrorKind, Range};
	///
	/// let range = Range::from_sequence("EVILELVISLIVES", "ELVIS").unwrap();
	///
	/// assert_eq!(range.pos(), (5, 9));
	/// assert_eq!(range.seq(), Some("ELVIS"));
	///
	/// assert_eq!(
	/// 	Range::from_sequence("PROTEINSEQ", "PEPTIDESEQ").unwrap_err().kind(),
	/// 	ErrorKind::NotFound
	/// );
	/// ```
	pub fn from_sequence(
		full_sequence: &str,
		sequence: &str,
	) -> Result<Self, LocationError> {
		let Some(start_index) = full_sequence.find(sequence) else {
			return Err(LocationError::NotFound {
				sequence: sequence.to_string(),
				full_sequence: full_sequence.to_string(),
			});
		};

		let range = Range::index_builder(start_index).seq(sequence).build()?;

		if full_sequence
			.get(start_index + 1..)
			.is_some_and(|rest| rest.contains(sequence))
		{
			debug!(
				"{sequence:?} occurs more than once in {full_sequence:?}, \
				 using the first occurrence at index {start_index}"
			);
		}

		Ok(range)
	}

	pub(crate) fn from_parts_unchecked(
		start: Point,
		stop: Point,
		seq: Option<String>,
	) -> Self {
		Range { start, stop, seq }
	}

	fn from_pos_pair(pos: (i64, i64)) -> Self {
		Range::from_parts_unchecked(Point::at(pos.0), Point::at(pos.1), None)
	}

	pub(crate) fn from_index_pair_unchecked(index: (i64, i64)) -> Self {
		Range::from_parts_unchecked(
			Point::from_index_unchecked(index.0),
			Point::from_index_unchecked(index.1),
			None,
		)
	}

	/// Combines two ranges in index space, bound by bound.
	///
	/// The `seq` is only kept when `other` has a length of 1, in which case
	/// the length cannot have changed.
	pub(crate) fn join(&self, other: &Range, op: fn(i64, i64) -> i64) -> Self {
		self.shift(other.index(), op)
	}

	/// Applies `op` to the start and stop indexes with the given index
	/// offsets, the `seq` is kept when both offsets are equal.
	pub(crate) fn shift(
		&self,
		(start_offset, stop_offset): (i64, i64),
		op: fn(i64, i64) -> i64,
	) -> Self {
		let seq = if start_offset == stop_offset {
			self.seq.clone()
		} else {
			None
		};

		Range::from_parts_unchecked(
			Point::from_index_unchecked(op(self.start.index(), start_offset)),
			Point::from_index_unchecked(op(self.stop.index(), stop_offset)),
			seq,
		)
	}

	fn resolve_seq(
		&self,
		seq: Option<String>,
		full_sequence: Option<&str>,
	) -> Result<Option<String>, LocationError> {
		match (seq, full_sequence) {
			(Some(seq), _) if !seq.is_empty() => {
				if len_i64(&seq) != self.length() {
					return Err(LocationError::SequenceLengthMismatch {
						range: self.to_string(),
						expected: self.length(),
						actual: len_i64(&seq),
						seq,
					});
				}
				Ok(Some(seq))
			}
			(_, Some(full_sequence)) if !full_sequence.is_empty() => {
				match full_sequence.get(self.slice()) {
					Some(seq) if len_i64(seq) == self.length() => {
						Ok(Some(seq.to_string()))
					}
					_ => Err(LocationError::SequenceTooShort {
						full_sequence: full_sequence.to_string(),
						range: self.to_string(),
					}),
				}
			}
			(seq, _) => Ok(seq.filter(|seq| !seq.is_empty())),
		}
	}

	/// The inclusive start of the range.
	pub fn start(&self) -> Point {
		self.start
	}

	/// The inclusive stop of the range.
	pub fn stop(&self) -> Point {
		self.stop
	}

	/// The subsequence the range denotes, if it is known.
	pub fn seq(&self) -> Option<&str> {
		self.seq.as_deref()
	}

	/// The number of positions in the range, `stop - start + 1`.
	pub fn length(&self) -> i64 {
		self.stop
			.pos()
			.saturating_sub(self.start.pos())
			.saturating_add(1)
	}

	/// The 1-based `(start, stop)` positions.
	pub fn pos(&self) -> (i64, i64) {
		(self.start.pos(), self.stop.pos())
	}

	/// The 0-based `(start, stop)` indexes.
	pub fn index(&self) -> (i64, i64) {
		(self.start.index(), self.stop.index())
	}

	/// The half-open slice, `start.index..stop.pos`, selecting the range out
	/// of a sequence.
	pub fn slice(&self) -> core::ops::Range<usize> {
		saturating_usize(self.start.index())..saturating_usize(self.stop.pos())
	}

	/// Returns the part of `full_sequence` the range denotes, or `None` if
	/// the range is invalid or does not fit in the sequence.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let range = Range::new(6, 9).unwrap();
	///
	/// assert_eq!(range.extract("ELVISLIVES"), Some("LIVE"));
	/// assert_eq!(range.extract("ELVIS"), None);
	/// ```
	pub fn extract<'a>(&self, full_sequence: &'a str) -> Option<&'a str> {
		if !self.is_valid() {
			return None;
		}
		full_sequence.get(self.slice())
	}

	/// Returns an iterator over every [`Point`] in the range in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use seqloc::{Point, Range};
	///
	/// let range = Range::new(3, 5).unwrap();
	///
	/// assert_eq!(
	/// 	range.iter().map(|point| point.pos()).collect::<Vec<_>>(),
	/// 	[3, 4, 5]
	/// );
	/// ```
	pub fn iter(&self) -> Points {
		Points {
			inner: self.start.pos()..=self.stop.pos(),
		}
	}

	/// Returns `true` if every position of `item` is inside the range, see
	/// [`Range::contains_part()`].
	///
	/// # Examples
	/// ```
	/// use seqloc::{Point, Range};
	///
	/// let range = Range::new(5, 20).unwrap();
	///
	/// assert_eq!(range.contains(4), false);
	/// assert_eq!(range.contains(5), true);
	/// assert_eq!(range.contains(20), true);
	/// assert_eq!(range.contains(21), false);
	///
	/// assert_eq!(range.contains(Point::new(7).unwrap()), true);
	/// assert_eq!(range.contains((7, 9)), true);
	/// assert_eq!(range.contains((7, 29)), false);
	/// ```
	pub fn contains<T>(&self, item: T) -> bool
	where
		T: RangeInput,
	{
		self.contains_part(item, Part::All)
	}

	/// Returns `true` if the given [`Part`] of `item` is inside the range.
	///
	/// `item` can be anything that builds a valid [`Range`], items that
	/// don't give `false`.
	///
	/// # Examples
	/// ```
	/// use seqloc::{Part, Range};
	///
	/// let range = Range::new(6, 15).unwrap();
	///
	/// assert_eq!(range.contains_part((11, 15), Part::All), true);
	/// assert_eq!(range.contains_part((11, 22), Part::All), false);
	/// assert_eq!(range.contains_part((11, 22), Part::Any), true);
	/// assert_eq!(range.contains_part((1, 22), Part::Any), true);
	/// assert_eq!(range.contains_part((16, 22), Part::Any), false);
	/// ```
	pub fn contains_part<T>(&self, item: T, part: Part) -> bool
	where
		T: RangeInput,
	{
		let item = match Range::builder(item).build() {
			Ok(item) => item,
			Err(error) => {
				trace!("{self:?} does not contain an invalid item: {error}");
				return false;
			}
		};

		match part {
			Part::All => contains_bounds(self.pos(), item.pos()),
			Part::Any => overlaps(self.pos(), item.pos()),
		}
	}

	/// Generalized equality.
	///
	/// With `compare_seq == false` only the bounds are compared. With
	/// `cast == false`, `other` has to already be a [`Point`] or `Range`,
	/// anything else is not equal.
	///
	/// # Examples
	/// ```
	/// use seqloc::Range;
	///
	/// let with_seq = Range::builder(10).seq("A".repeat(11)).build().unwrap();
	/// let without_seq = Range::new(10, 20).unwrap();
	///
	/// // the == behaviour
	/// assert!(with_seq != (10_i64, 20_i64));
	/// assert!(without_seq == (10_i64, 20_i64));
	/// assert_eq!(without_seq.equals((10, 20), true, true), true);
	///
	/// // no casting
	/// assert_eq!(without_seq.equals((10, 20), true, false), false);
	/// // different seq
	/// assert_eq!(without_seq.equals(&with_seq, true, false), false);
	/// // same bounds
	/// assert_eq!(without_seq.equals(&with_seq, false, false), true);
	/// ```
	pub fn equals<T>(&self, other: T, compare_seq: bool, cast: bool) -> bool
	where
		T: RangeInput,
	{
		if !cast && !other.is_location() {
			return false;
		}

		match Range::cast_from(other) {
			Ok(other) => {
				self.pos() == other.pos() && (!compare_seq || self.seq == other.seq)
			}
			Err(error) => {
				trace!("{self:?} is not equal to an uncastable value: {error}");
				false
			}
		}
	}
}

impl Location for Range {
	type Pos = (i64, i64);
	type Index = (i64, i64);

	fn pos(&self) -> (i64, i64) {
		Range::pos(self)
	}

	fn index(&self) -> (i64, i64) {
		Range::index(self)
	}

	fn slice(&self) -> core::ops::Range<usize> {
		Range::slice(self)
	}

	fn validate(&self) -> Result<(), LocationError> {
		self.start.validate()?;
		if self.stop < self.start {
			return Err(LocationError::StopBeforeStart {
				start: self.start.pos(),
				stop: self.stop.pos(),
			});
		}
		Ok(())
	}
}

impl<T> CastFrom<T> for Range
where
	T: RangeInput,
{
	fn cast_from(value: T) -> Result<Self, LocationError> {
		Range::builder(value).validate(false).build()
	}
}

/// An iterator over the [`Point`]s of a [`Range`], see [`Range::iter()`].
///
/// The points are not validated, they are all valid when the range is.
///
/// The length saturates at `usize::MAX` for unvalidated ranges spanning
/// more points than that.
#[derive(Debug, Clone)]
pub struct Points {
	inner: core::ops::RangeInclusive<i64>,
}

impl Iterator for Points {
	type Item = Point;

	fn next(&mut self) -> Option<Point> {
		self.inner.next().map(Point::at)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = if self.inner.is_empty() {
			0
		} else {
			let span = self.inner.end().abs_diff(*self.inner.start());
			usize::try_from(span)
				.ok()
				.and_then(|span| span.checked_add(1))
				.unwrap_or(usize::MAX)
		};
		(len, Some(len))
	}
}
impl DoubleEndedIterator for Points {
	fn next_back(&mut self) -> Option<Point> {
		self.inner.next_back().map(Point::at)
	}
}
impl ExactSizeIterator for Points {}
impl FusedIterator for Points {}

impl<'a> IntoIterator for &'a Range {
	type Item = Point;
	type IntoIter = Points;

	fn into_iter(self) -> Points {
		self.iter()
	}
}

impl fmt::Display for Range {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.start == self.stop {
			return write!(f, "{}", self.start);
		}
		write!(f, "{}{}{}", self.start, Range::SEPARATOR, self.stop)
	}
}

impl fmt::Debug for Range {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.seq {
			Some(seq) => write!(
				f,
				"Range({}, {}, seq=\"{}\")",
				self.start,
				self.stop,
				abbreviate(seq)
			),
			None => write!(f, "Range({}, {}, seq=None)", self.start, self.stop),
		}
	}
}

impl FromStr for Range {
	type Err = LocationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Range::builder(s).build()
	}
}

impl From<Point> for Range {
	fn from(point: Point) -> Self {
		Range::from_parts_unchecked(point, point, None)
	}
}

impl PartialEq<(i64, i64)> for Range {
	fn eq(&self, other: &(i64, i64)) -> bool {
		*self == Range::from_pos_pair(*other)
	}
}
impl PartialEq<Range> for (i64, i64) {
	fn eq(&self, other: &Range) -> bool {
		Range::from_pos_pair(*self) == *other
	}
}
impl PartialOrd<(i64, i64)> for Range {
	fn partial_cmp(&self, other: &(i64, i64)) -> Option<Ordering> {
		Some(self.cmp(&Range::from_pos_pair(*other)))
	}
}
impl PartialOrd<Range> for (i64, i64) {
	fn partial_cmp(&self, other: &Range) -> Option<Ordering> {
		Some(Range::from_pos_pair(*self).cmp(other))
	}
}

impl PartialEq<Point> for Range {
	fn eq(&self, other: &Point) -> bool {
		*self == Range::from(*other)
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::ser::SerializeStruct;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::Range;

	impl Serialize for Range {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut state = serializer.serialize_struct("Range", 3)?;
			state.serialize_field("start", &self.start().pos())?;
			state.serialize_field("stop", &self.stop().pos())?;
			state.serialize_field("seq", &self.seq())?;
			state.end()
		}
	}

	/// The constructor arguments a [`Range`] is restored from.
	#[derive(Deserialize)]
	#[serde(rename = "Range")]
	struct RangeArgs {
		start: i64,
		stop: i64,
		#[serde(default)]
		seq: Option<String>,
	}

	impl<'de> Deserialize<'de> for Range {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let RangeArgs { start, stop, seq } =
				RangeArgs::deserialize(deserializer)?;

			let builder = Range::builder(start).stop(stop);
			let builder = match seq {
				Some(seq) => builder.seq(seq),
				None => builder,
			};
			builder.build().map_err(serde::de::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::test_locations::{p, r, rs};
	use crate::ErrorKind;

	//           1234567890
	const PROTEIN: &str = "ELVISLIVES";

	// human proglucagon
	const GLUCAGON: &str = "MKSIYFVAGLFVMLVQGSWQRSLQDTEEKSRSFSASQADPLSDPDQMNEDKRHSQGTFTSDYSKYLDSRRAQDFVQWLMNTKRNRNNIAKRHDEFERHAEGTFTSDVSSYLEGQAAKEFIAWLVKGRGRRDFPEEVAIVEELGRRHADGSFSDEMNTILDNLAARDFINWLIQTKITDRK";
	const GLUCAGON_PEPTIDES: &[&str] = &[
		"HSQGTFTSDYSKYLDSRRAQDFVQWLMNT",
		"HAEGTFTSDVSSYLEGQAAKEFIAWLVKGR",
		"HADGSFSDEMNTILDNLAARDFINWLIQTKITD",
		"MKSIYFVAGLFVMLVQGSWQ",
		"DRK",
	];

	fn assert_denotes(range: &Range, peptide: &str, protein: &str) {
		let bytes = protein.as_bytes();
		let (start_index, stop_index) = range.index();
		assert_eq!(bytes[start_index as usize], peptide.as_bytes()[0]);
		assert_eq!(
			bytes[stop_index as usize],
			peptide.as_bytes()[peptide.len() - 1]
		);
		assert_eq!(&protein[range.slice()], peptide);
		assert_eq!(range.extract(protein), Some(peptide));
		assert_eq!(range.length(), peptide.len() as i64);
	}

	#[test]
	fn new_tests() {
		let range = r(3, 6);
		assert_eq!(range.pos(), (3, 6));
		assert_eq!(range.index(), (2, 5));
		assert_eq!(range.slice(), 2..6);
		assert_eq!(range.start(), p(3));
		assert_eq!(range.stop(), p(6));
		assert_eq!(range.seq(), None);
		assert_denotes(&range, "VISL", PROTEIN);

		for (a, b) in [(1, 1), (1, 10), (5, 20), (42, 1000)] {
			let range = r(a, b);
			assert_eq!(range.length(), b - a + 1);
		}

		assert_eq!(Range::new(p(3), "6"), Ok(r(3, 6)));
		assert_eq!(
			Range::new(6, 3),
			Err(LocationError::StopBeforeStart { start: 6, stop: 3 })
		);
		assert_eq!(
			Range::new(0, 3),
			Err(LocationError::PositionBelowOne { pos: 0 })
		);
		assert_eq!(
			Range::new("x", 3).map_err(|e| e.kind()),
			Err(ErrorKind::UnparseableInput)
		);
	}

	#[test]
	fn builder_start_tests() {
		assert_eq!(Range::builder(3).build(), Ok(r(3, 3)));
		assert_eq!(Range::builder("3").build(), Ok(r(3, 3)));
		assert_eq!(Range::builder(p(3)).build(), Ok(r(3, 3)));
		assert_eq!(Range::builder(p(3)).stop(p(6)).build(), Ok(r(3, 6)));
		assert_eq!(Range::builder("3:6").build(), Ok(r(3, 6)));
		assert_eq!(Range::builder((3_i64, 6_i64)).build(), Ok(r(3, 6)));
		assert_eq!(Range::builder([3_i64, 6]).build(), Ok(r(3, 6)));
		assert_eq!(Range::builder(r(3, 6)).build(), Ok(r(3, 6)));
		assert_eq!(Range::builder(&r(3, 6)).build(), Ok(r(3, 6)));

		assert_eq!(
			Range::builder((3_i64, 6_i64)).stop(6).build().map_err(|e| e.kind()),
			Err(ErrorKind::UnparseableInput)
		);
		assert_eq!(
			Range::builder("3:6").stop(6).build().map_err(|e| e.kind()),
			Err(ErrorKind::UnparseableInput)
		);
		assert_eq!(
			Range::builder(r(3, 6)).stop(6).build().map_err(|e| e.kind()),
			Err(ErrorKind::UnparseableInput)
		);
	}

	#[test]
	fn builder_seq_tests() {
		// the stop is inferred from the length first, then from the seq
		assert_eq!(Range::builder(3).length(4).build(), Ok(r(3, 6)));
		assert_eq!(Range::builder(3).seq("VISL").build(), Ok(rs(3, 6, "VISL")));
		// an empty seq still infers the stop, which is then before the start
		assert_eq!(
			Range::builder(3).seq("").build(),
			Err(LocationError::StopBeforeStart { start: 3, stop: 2 })
		);
		assert_eq!(
			Range::builder(3).length(4).seq("VISL").build(),
			Ok(rs(3, 6, "VISL"))
		);
		assert_eq!(
			Range::builder(3).length(3).seq("VISL").build(),
			Err(LocationError::SequenceLengthMismatch {
				seq: "VISL".to_string(),
				range: "3:5".to_string(),
				expected: 3,
				actual: 4,
			})
		);
		assert_eq!(
			Range::builder(3).stop(7).seq("VISL").build().map_err(|e| e.kind()),
			Err(ErrorKind::IncompatibleLength)
		);

		assert_eq!(
			Range::builder(3).stop(6).full_sequence(PROTEIN).build(),
			Ok(rs(3, 6, "VISL"))
		);
		assert_eq!(
			Range::builder(8).stop(11).full_sequence(PROTEIN).build(),
			Err(LocationError::SequenceTooShort {
				full_sequence: PROTEIN.to_string(),
				range: "8:11".to_string(),
			})
		);
		// an explicit seq wins over the full sequence
		assert_eq!(
			Range::builder(3)
				.stop(6)
				.seq("ABCD")
				.full_sequence(PROTEIN)
				.build(),
			Ok(rs(3, 6, "ABCD"))
		);
	}

	#[test]
	fn builder_inherits_seq_tests() {
		let original = rs(3, 6, "VISL");

		assert_eq!(Range::builder(&original).build(), Ok(original.clone()));
		assert_eq!(
			Range::builder(&original).seq("ABCD").build(),
			Ok(rs(3, 6, "ABCD"))
		);
		assert_eq!(
			Range::builder(&original).full_sequence("ABCDEFGHIJ").build(),
			Ok(rs(3, 6, "CDEF"))
		);
	}

	#[test]
	fn builder_validate_tests() {
		let range = Range::builder(6).stop(3).validate(false).build().unwrap();
		assert_eq!(range.pos(), (6, 3));
		assert_eq!(
			range.validate(),
			Err(LocationError::StopBeforeStart { start: 6, stop: 3 })
		);
		assert!(!range.is_valid());
		assert_eq!(range.extract(PROTEIN), None);
		assert_eq!(range.iter().count(), 0);

		let range = Range::builder(0).stop(3).validate(false).build().unwrap();
		assert_eq!(
			range.validate(),
			Err(LocationError::PositionBelowOne { pos: 0 })
		);
	}

	#[test]
	fn from_index_tests() {
		assert_eq!(Range::from_index(2, 5), Ok(r(3, 6)));
		assert_eq!(Range::index_builder((2_i64, 5_i64)).build(), Ok(r(3, 6)));
		assert_eq!(Range::index_builder(2).length(4).build(), Ok(r(3, 6)));
		assert_eq!(Range::index_builder(2).build(), Ok(r(3, 3)));

		for (a, b) in [(1, 1), (1, 10), (5, 20), (42, 1000)] {
			let range = r(a, b);
			let (start_index, stop_index) = range.index();
			assert_eq!(Range::from_index(start_index, stop_index), Ok(range));
		}

		assert_eq!(
			Range::from_index(-1, 5),
			Err(LocationError::PositionBelowOne { pos: 0 })
		);
		assert_eq!(
			Range::index_builder(p(3)).build().map_err(|e| e.kind()),
			Err(ErrorKind::IllegalConversion)
		);
		assert_eq!(
			Range::index_builder(2).stop(p(5)).build().map_err(|e| e.kind()),
			Err(ErrorKind::IllegalConversion)
		);
		assert_eq!(
			Range::index_builder(r(3, 6)).build().map_err(|e| e.kind()),
			Err(ErrorKind::IllegalConversion)
		);
	}

	#[test]
	fn from_center_and_window_tests() {
		assert_eq!(Range::from_center_and_window(10, 5, None), Ok(r(5, 15)));
		assert_eq!(Range::from_center_and_window(10, 15, None), Ok(r(1, 25)));
		assert_eq!(
			Range::from_center_and_window(100, 10, Some(105)),
			Ok(r(90, 105))
		);
		assert_eq!(Range::from_center_and_window(3, 0, None), Ok(r(3, 3)));
		assert!(Range::from_center_and_window(100, 10, Some(50)).is_err());

		assert_eq!(
			Range::center_and_window_builder(7, 1, None)
				.full_sequence(PROTEIN)
				.build(),
			Ok(rs(6, 8, "LIV"))
		);
		assert_eq!(
			Range::center_and_window_builder(7, 1, None).seq("LIV").build(),
			Ok(rs(6, 8, "LIV"))
		);
		assert!(Range::center_and_window_builder(7, 1, None)
			.seq("LIVE")
			.build()
			.is_err());

		let range = Range::center_and_window_builder(100, 10, Some(50))
			.validate(false)
			.build()
			.unwrap();
		assert_eq!(range.pos(), (90, 50));
		assert!(!range.is_valid());
	}

	#[test]
	fn from_slice_tests() {
		assert_eq!(Range::from_slice(2..6_usize), Ok(r(3, 6)));
		assert_eq!(Range::from_slice(2..6_i64), Ok(r(3, 6)));
		assert_eq!(Range::from_slice((2_i64, 6_i64)), Ok(r(3, 6)));
		assert_eq!(Range::from_slice((2_i64, 6_i64, 1_i64)), Ok(r(3, 6)));
		assert_eq!(
			Range::from_slice((2_i64, 6_i64, 2_i64)).map_err(|e| e.kind()),
			Err(ErrorKind::UnparseableInput)
		);
		assert_eq!(Range::slice_builder((2_i64, 6_i64)).build(), Ok(r(3, 6)));
		assert_eq!(Range::slice_builder(2).stop(6).build(), Ok(r(3, 6)));
		assert_eq!(Range::slice_builder(2).length(4).build(), Ok(r(3, 6)));
		assert_eq!(
			Range::slice_builder(2).seq("VISL").build(),
			Ok(rs(3, 6, "VISL"))
		);
		assert_eq!(Range::slice_builder(2).build(), Ok(r(3, 3)));
		assert_eq!(
			Range::slice_builder(2).length(4).full_sequence(PROTEIN).build(),
			Ok(rs(3, 6, "VISL"))
		);

		let range = Range::from_slice(2..6_usize).unwrap();
		assert_eq!(&PROTEIN[range.slice()], "VISL");
		assert_eq!(range.slice(), 2..6);
	}

	#[test]
	fn from_sequence_tests() {
		assert_eq!(
			Range::from_sequence(PROTEIN, "LIVE"),
			Ok(rs(6, 9, "LIVE"))
		);
		assert_eq!(&PROTEIN[r(6, 9).slice()], "LIVE");
		assert_eq!(Range::from_sequence(PROTEIN, "VISL"), Ok(rs(3, 6, "VISL")));
		// the first occurrence wins
		assert_eq!(Range::from_sequence(PROTEIN, "LVI"), Ok(rs(2, 4, "LVI")));

		assert_eq!(
			Range::from_sequence(PROTEIN, ""),
			Err(LocationError::PositionBelowOne { pos: 0 })
		);
		assert_eq!(
			Range::from_sequence("PROTEINSEQ", "PEPTIDESEQ"),
			Err(LocationError::NotFound {
				sequence: "PEPTIDESEQ".to_string(),
				full_sequence: "PROTEINSEQ".to_string(),
			})
		);

		for peptide in GLUCAGON_PEPTIDES {
			let range = Range::from_sequence(GLUCAGON, peptide).unwrap();
			assert_eq!(range.seq(), Some(*peptide));
			assert_denotes(&range, peptide, GLUCAGON);
		}
	}

	#[test]
	fn contains_tests() {
		let range = r(5, 20);
		assert!(!range.contains(4));
		assert!(range.contains(5));
		assert!(range.contains(20));
		assert!(!range.contains(21));

		assert!(range.contains(p(10)));
		assert!(range.contains(r(5, 20)));
		assert!(range.contains(&r(6, 19)));
		assert!(range.contains("7:9"));
		assert!(!range.contains((4_i64, 6_i64)));
		assert!(!range.contains(r(19, 21)));

		// invalid and malformed items are not contained
		assert!(!range.contains(0));
		assert!(!range.contains((9_i64, 7_i64)));
		assert!(!range.contains("five"));
		assert!(!range.contains("5:6:7"));
	}

	#[test]
	fn contains_part_tests() {
		// -----ELVISLIVES
		let range = r(6, 15);

		// ----------L----
		assert!(range.contains_part(11, Part::All));
		assert!(range.contains_part(11, Part::Any));
		// ----------LIVE-
		assert!(range.contains_part((11_i64, 14_i64), Part::All));
		assert!(range.contains_part((11_i64, 14_i64), Part::Any));
		// ----------LIVESANDDIES
		assert!(!range.contains_part((11_i64, 22_i64), Part::All));
		assert!(range.contains_part((11_i64, 22_i64), Part::Any));
		// ELVENELVISLIVESANDDIES
		assert!(!range.contains_part((1_i64, 22_i64), Part::All));
		assert!(range.contains_part((1_i64, 22_i64), Part::Any));
		// ELVEN
		assert!(!range.contains_part((1_i64, 5_i64), Part::Any));

		assert_eq!(Part::default(), Part::All);
	}

	#[test]
	fn equals_tests() {
		let with_seq = rs(10, 20, &"A".repeat(11));
		let without_seq = r(10, 20);

		assert!(with_seq != (10_i64, 20_i64));
		assert!(without_seq == (10_i64, 20_i64));
		assert!((10_i64, 20_i64) == without_seq);

		assert!(without_seq.equals((10_i64, 20_i64), true, true));
		assert!(!without_seq.equals((10_i64, 20_i64), true, false));
		assert!(!without_seq.equals(&with_seq, true, false));
		assert!(without_seq.equals(&with_seq, false, false));
		assert!(without_seq.equals(&with_seq, false, true));
		assert!(!without_seq.equals("10:20:30", false, true));
		assert!(r(10, 10).equals(p(10), true, false));
	}

	#[test]
	fn comparison_tests() {
		let p00 = r(3, 6);
		let p01 = r(3, 7);
		let p10 = r(4, 6);
		let tuple = (3_i64, 6_i64);

		assert_eq!(p00, r(3, 6));
		assert_eq!(p00, tuple);
		assert_eq!(tuple, p00);
		assert!(tuple != p01);

		assert!(p00 < p01 && p01 < p10);
		assert!(p10 > p01 && p01 > p00);
		assert!(tuple < p01 && p01 < p10);
		assert!(p10 > p01 && p01 > tuple);

		assert!(r(1, 5) < r(5, 9));
		assert!(r(5, 9) > r(1, 5));

		assert_eq!(r(4, 4), p(4));
		assert!(rs(4, 4, "S") != p(4));
	}

	#[test]
	fn iter_tests() {
		for (a, b) in [(1, 1), (1, 10), (5, 20)] {
			let range = r(a, b);
			let points: Vec<Point> = range.iter().collect();
			let expected: Vec<Point> = (a..=b).map(p).collect();
			assert_eq!(points, expected);
			assert_eq!(range.iter().len() as i64, range.length());
		}

		let range = r(3, 5);
		// restartable
		assert_eq!(range.iter().count(), 3);
		assert_eq!((&range).into_iter().count(), 3);
		assert_eq!(range.iter().rev().collect::<Vec<_>>(), [p(5), p(4), p(3)]);

		let mut points = range.iter();
		assert_eq!(points.next(), Some(p(3)));
		assert_eq!(points.len(), 2);
		assert_eq!(points.next_back(), Some(p(5)));
		assert_eq!(points.len(), 1);
		points.next();
		assert_eq!(points.len(), 0);
		assert_eq!(points.next(), None);

		// more points than fit in a usize
		let huge = Range::builder(i64::MIN)
			.stop(i64::MAX)
			.validate(false)
			.build()
			.unwrap();
		assert_eq!(huge.iter().len(), usize::MAX);
		assert_eq!(huge.iter().next().map(|point| point.pos()), Some(i64::MIN));

		let mut total = 0;
		for point in &range {
			total += point.pos();
		}
		assert_eq!(total, 12);
	}

	#[test]
	fn fmt_tests() {
		assert_eq!(r(10, 20).to_string(), "10:20");
		assert_eq!(r(10, 10).to_string(), "10");

		assert_eq!(format!("{:?}", r(10, 20)), "Range(10, 20, seq=None)");
		assert_eq!(
			format!("{:?}", rs(6, 9, "LIVE")),
			"Range(6, 9, seq=\"LIVE\")"
		);

		let long = format!("ELVIS{}LIVES", "X".repeat(40));
		let range = Range::builder(1).seq(long).build().unwrap();
		assert_eq!(format!("{range:?}"), "Range(1, 50, seq=\"ELVIS..LIVES\")");
	}

	#[test]
	fn from_str_tests() {
		for (a, b) in [(1, 1), (1, 10), (5, 20), (42, 1000)] {
			let range = r(a, b);
			assert_eq!(range.to_string().parse::<Range>(), Ok(range));
		}
		assert_eq!("6".parse::<Range>(), Ok(r(6, 6)));
		assert!("9:6".parse::<Range>().is_err());
		assert!("6:".parse::<Range>().is_err());
	}

	#[test]
	fn conversion_tests() {
		assert_eq!(Range::from(p(4)), r(4, 4));
		assert_eq!(Point::try_from(Range::from(p(4))), Ok(p(4)));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_tests() {
		let range = rs(6, 9, "LIVE");
		let json = serde_json::to_string(&range).unwrap();
		assert_eq!(json, r#"{"start":6,"stop":9,"seq":"LIVE"}"#);
		assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), range);

		let json = serde_json::to_string(&r(6, 9)).unwrap();
		assert_eq!(json, r#"{"start":6,"stop":9,"seq":null}"#);
		assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r(6, 9));

		assert!(serde_json::from_str::<Range>(r#"{"start":9,"stop":6}"#).is_err());
		assert!(serde_json::from_str::<Range>(
			r#"{"start":6,"stop":9,"seq":"LIV"}"#
		)
		.is_err());

		assert_eq!(serde_json::to_string(&p(6)).unwrap(), "6");
		assert_eq!(serde_json::from_str::<Point>("6").unwrap(), p(6));
		assert!(serde_json::from_str::<Point>("0").is_err());
	}
}
