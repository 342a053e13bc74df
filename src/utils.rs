use alloc::borrow::Cow;
use core::cmp::Ordering;

/// Sequences longer than this are abbreviated in `Debug` output.
pub(crate) const ABBREVIATE_OVER: usize = 40;
/// How many characters are kept from each end of an abbreviated sequence.
const ABBREVIATION_KEEP: usize = 5;

/// `bounds` are the 1-based inclusive `(start, stop)` of a range.
pub(crate) fn cmp_point_with_bounds(pos: i64, bounds: (i64, i64)) -> Ordering {
	if pos < bounds.0 {
		Ordering::Less
	} else if pos > bounds.1 {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

pub(crate) fn contains_point(bounds: (i64, i64), pos: i64) -> bool {
	cmp_point_with_bounds(pos, bounds).is_eq()
}

///every position of `inner` lies within `outer`
pub(crate) fn contains_bounds(outer: (i64, i64), inner: (i64, i64)) -> bool {
	contains_point(outer, inner.0) && contains_point(outer, inner.1)
}

///at least one position of `b` lies within `a`
pub(crate) fn overlaps(a: (i64, i64), b: (i64, i64)) -> bool {
	!(b.1 < a.0 || b.0 > a.1)
}

/// Converts an index into a `usize`, saturating negative (invalid)
/// indexes at zero.
pub(crate) fn saturating_usize(index: i64) -> usize {
	usize::try_from(index).unwrap_or(0)
}

pub(crate) fn len_i64(seq: &str) -> i64 {
	i64::try_from(seq.len()).unwrap_or(i64::MAX)
}

pub(crate) fn abbreviate(seq: &str) -> Cow<'_, str> {
	let chars = seq.chars().count();
	if chars <= ABBREVIATE_OVER {
		return Cow::Borrowed(seq);
	}

	let head = seq.chars().take(ABBREVIATION_KEEP);
	let tail = seq.chars().skip(chars - ABBREVIATION_KEEP);
	return Cow::Owned(head.chain("..".chars()).chain(tail).collect());
}
