//! A module containing [`LocationError`], the error type returned by every
//! fallible operation in this crate, and its [`ErrorKind`] classification.

use thiserror::Error;

/// The broad category a [`LocationError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// A position below 1, or a stop before its start.
	OutOfRange,
	/// A subsequence whose length does not match the length of the range.
	IncompatibleLength,
	/// An input that cannot be normalized to a coordinate.
	UnparseableInput,
	/// A subsequence that could not be located in its full sequence.
	NotFound,
	/// A conversion between coordinate types that is not allowed.
	IllegalConversion,
}

/// The error type for constructing, casting and validating [`Point`]s and
/// [`Range`]s.
///
/// [`Point`]: crate::Point
/// [`Range`]: crate::Range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
	/// A position was smaller than 1.
	#[error("position({pos}) < 1")]
	PositionBelowOne {
		/// The offending 1-based position.
		pos: i64,
	},
	/// The stop of a range was before its start.
	#[error("stop({stop}) < start({start})")]
	StopBeforeStart {
		/// The 1-based start of the range.
		start: i64,
		/// The 1-based stop of the range.
		stop: i64,
	},
	/// The given subsequence does not have the length implied by the range.
	#[error(
		"the sequence {seq:?} has length {actual}, but {range} implies length {expected}"
	)]
	SequenceLengthMismatch {
		/// The subsequence that was given.
		seq: String,
		/// The colon form of the range.
		range: String,
		/// The length of the range.
		expected: i64,
		/// The length of `seq`.
		actual: i64,
	},
	/// The full sequence is too short to contain the range.
	#[error("the sequence {full_sequence:?} is too short to contain {range}")]
	SequenceTooShort {
		/// The full sequence that was given.
		full_sequence: String,
		/// The colon form of the range.
		range: String,
	},
	/// The input cannot be understood as a coordinate.
	#[error("{input} cannot be understood as a sequence location: {reason}")]
	Unparseable {
		/// The `Debug` rendering of the offending input.
		input: String,
		/// Why the input was rejected.
		reason: String,
	},
	/// The subsequence does not occur in the full sequence.
	#[error("{sequence:?} not in {full_sequence:?}")]
	NotFound {
		/// The subsequence that was searched for.
		sequence: String,
		/// The sequence that was searched.
		full_sequence: String,
	},
	/// A conversion between coordinate types that cannot be performed.
	#[error("illegal conversion: {reason}")]
	IllegalConversion {
		/// Why the conversion was rejected.
		reason: String,
	},
}

impl LocationError {
	/// Returns the [`ErrorKind`] of this error.
	///
	/// # Examples
	/// ```
	/// use seqloc::{ErrorKind, Point};
	///
	/// let error = Point::new(0).unwrap_err();
	///
	/// assert_eq!(error.kind(), ErrorKind::OutOfRange);
	/// ```
	pub fn kind(&self) -> ErrorKind {
		match self {
			LocationError::PositionBelowOne { .. }
			| LocationError::StopBeforeStart { .. } => ErrorKind::OutOfRange,
			LocationError::SequenceLengthMismatch { .. }
			| LocationError::SequenceTooShort { .. } => {
				ErrorKind::IncompatibleLength
			}
			LocationError::Unparseable { .. } => ErrorKind::UnparseableInput,
			LocationError::NotFound { .. } => ErrorKind::NotFound,
			LocationError::IllegalConversion { .. } => {
				ErrorKind::IllegalConversion
			}
		}
	}

	/// Returns `true` if this error is an invariant violation, i.e. of
	/// kind [`ErrorKind::OutOfRange`].
	pub fn is_out_of_range(&self) -> bool {
		self.kind() == ErrorKind::OutOfRange
	}

	pub(crate) fn unparseable(
		input: impl core::fmt::Debug,
		reason: impl Into<String>,
	) -> Self {
		LocationError::Unparseable {
			input: format!("{input:?}"),
			reason: reason.into(),
		}
	}

	pub(crate) fn illegal_conversion(reason: impl Into<String>) -> Self {
		LocationError::IllegalConversion {
			reason: reason.into(),
		}
	}
}
