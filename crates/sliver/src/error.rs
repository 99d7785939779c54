//! View-specific error types.
//!
//! Every variant is a precondition violation: a caller bug, not a
//! condition to recover from. The `try_*` methods on
//! [`View`](crate::View) surface them as values; the plain methods panic
//! with the variant's `Display` text.

use std::error::Error;
use std::fmt;

/// Errors that can occur during view operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// `make` was asked for more live elements than the buffer holds.
    LengthExceedsCapacity {
        /// Requested length.
        len: usize,
        /// Requested capacity.
        cap: usize,
    },
    /// Sub-view bounds with `start > end`.
    InvertedRange {
        /// Requested start.
        start: usize,
        /// Requested end.
        end: usize,
    },
    /// Sub-view start beyond the parent's length.
    StartOutOfRange {
        /// Requested start.
        start: usize,
        /// Length of the parent view.
        len: usize,
    },
    /// Sub-view end beyond the parent's capacity.
    EndOutOfRange {
        /// Requested end.
        end: usize,
        /// Capacity of the parent view.
        cap: usize,
    },
    /// Non-zero bounds applied to the absent view.
    AbsentBounds {
        /// Requested start.
        start: usize,
        /// Requested end.
        end: usize,
    },
    /// Element index at or past the live length.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Live length of the view or buffer.
        len: usize,
    },
    /// Growth arithmetic does not fit in `usize`.
    CapacityOverflow {
        /// Length the append would have produced.
        len: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthExceedsCapacity { len, cap } => {
                write!(f, "length and capacity swapped: len {len} > cap {cap}")
            }
            Self::InvertedRange { start, end } => {
                write!(f, "invalid slice indices: {start} > {end}")
            }
            Self::StartOutOfRange { start, len } => {
                write!(f, "slice bounds out of range: {start} > {len}")
            }
            Self::EndOutOfRange { end, cap } => {
                write!(f, "slice bounds out of range: {end} > {cap}")
            }
            Self::AbsentBounds { start, end } => {
                write!(f, "slice bounds out of range: [{start}:{end}] of absent view")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: {index} >= {len}")
            }
            Self::CapacityOverflow { len } => {
                write!(f, "capacity overflow growing to length {len}")
            }
        }
    }
}

impl Error for ViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_values() {
        let err = ViewError::EndOutOfRange { end: 9, cap: 4 };
        assert_eq!(err.to_string(), "slice bounds out of range: 9 > 4");
    }

    #[test]
    fn inverted_range_message() {
        let err = ViewError::InvertedRange { start: 3, end: 1 };
        assert_eq!(err.to_string(), "invalid slice indices: 3 > 1");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(ViewError::CapacityOverflow { len: usize::MAX });
        assert!(err.to_string().contains("capacity overflow"));
    }
}
