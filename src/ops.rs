//! A module containing the `+` and `-` implementations for [`Point`] and
//! [`Range`].
//!
//! All arithmetic happens in index space and saturates at the `i64`
//! bounds. Since a position is stored, an index of `i64::MAX` is held as
//! `i64::MAX - 1`. Results are never validated, use
//! [`Location::validated()`] at the end of a chain.
//!
//! `+` commutes: a scalar or [`Point`] on the left of a [`Range`] gives the
//! same range (`seq` included) as on the right. With `-` the left operand
//! is promoted to a `Range` first.
//!
//! [`Location::validated()`]: crate::Location::validated

use core::ops::{Add, Sub};

use crate::{Point, Range};

macro_rules! point_ops {
	($($trait:ident, $method:ident, $op:path;)*) => {
		$(
			impl $trait<Point> for Point {
				type Output = Point;

				fn $method(self, rhs: Point) -> Point {
					self.join(rhs, $op)
				}
			}
			impl $trait<i64> for Point {
				type Output = Point;

				fn $method(self, rhs: i64) -> Point {
					Point::from_index_unchecked($op(self.index(), rhs))
				}
			}
			impl $trait<Point> for i64 {
				type Output = Point;

				fn $method(self, rhs: Point) -> Point {
					Point::from_index_unchecked($op(self, rhs.index()))
				}
			}
		)*
	};
}

macro_rules! range_scalar_ops {
	($trait:ident, $method:ident, $op:path, $lhs:ty) => {
		impl $trait<Point> for $lhs {
			type Output = Range;

			fn $method(self, rhs: Point) -> Range {
				self.$method(&Range::from(rhs))
			}
		}
		impl $trait<i64> for $lhs {
			type Output = Range;

			fn $method(self, rhs: i64) -> Range {
				self.$method((rhs, rhs))
			}
		}
		/// A `(start, stop)` pair of indexes.
		impl $trait<(i64, i64)> for $lhs {
			type Output = Range;

			fn $method(self, rhs: (i64, i64)) -> Range {
				self.shift(rhs, $op)
			}
		}
	};
}

macro_rules! range_ops {
	($($trait:ident, $method:ident, $op:path;)*) => {
		$(
			impl $trait<&Range> for &Range {
				type Output = Range;

				fn $method(self, rhs: &Range) -> Range {
					self.join(rhs, $op)
				}
			}
			impl $trait<Range> for &Range {
				type Output = Range;

				fn $method(self, rhs: Range) -> Range {
					self.$method(&rhs)
				}
			}
			impl $trait<&Range> for Range {
				type Output = Range;

				fn $method(self, rhs: &Range) -> Range {
					(&self).$method(rhs)
				}
			}
			impl $trait<Range> for Range {
				type Output = Range;

				fn $method(self, rhs: Range) -> Range {
					(&self).$method(&rhs)
				}
			}

			range_scalar_ops!($trait, $method, $op, Range);
			range_scalar_ops!($trait, $method, $op, &Range);
		)*
	};
}

//a point is promoted to a range of length 1, so the output is always a
//range even when `rhs` has length 1
macro_rules! left_operand_ops {
	($($lhs:ty;)*) => {
		$(
			impl Add<&Range> for $lhs {
				type Output = Range;

				fn add(self, rhs: &Range) -> Range {
					rhs + self
				}
			}
			impl Add<Range> for $lhs {
				type Output = Range;

				fn add(self, rhs: Range) -> Range {
					rhs + self
				}
			}
			impl Sub<Range> for $lhs {
				type Output = Range;

				fn sub(self, rhs: Range) -> Range {
					self - &rhs
				}
			}
		)*
	};
}

point_ops!(
	Add, add, i64::saturating_add;
	Sub, sub, i64::saturating_sub;
);

range_ops!(
	Add, add, i64::saturating_add;
	Sub, sub, i64::saturating_sub;
);

left_operand_ops!(
	Point;
	i64;
);

impl Sub<&Range> for Point {
	type Output = Range;

	fn sub(self, rhs: &Range) -> Range {
		Range::from(self) - rhs
	}
}
impl Sub<&Range> for i64 {
	type Output = Range;

	fn sub(self, rhs: &Range) -> Range {
		let (start, stop) = rhs.index();
		Range::from_index_pair_unchecked((
			self.saturating_sub(start),
			self.saturating_sub(stop),
		))
	}
}
