//! Error types for lanemat operations.
//!
//! The algebra and trig kernels never fail at runtime: shape mismatches are
//! type errors and the flat-list constructor asserts. These errors belong to
//! the fallible entry points around them, such as `TryFrom<&[T]>` for
//! matrices and the slice trig functions.

use std::fmt;

/// Errors that can occur in lanemat's fallible entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneMatError {
    /// A flat element list did not hold exactly `rows * cols` values.
    ElementCount {
        /// Number of elements the matrix shape requires.
        expected: usize,
        /// Number of elements that were supplied.
        actual: usize,
    },
    /// Input and output buffers of a slice operation differ in length.
    LengthMismatch {
        /// Length of the input slice.
        input: usize,
        /// Length of the offending output slice.
        output: usize,
    },
}

impl fmt::Display for LaneMatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneMatError::ElementCount { expected, actual } => write!(
                f,
                "Element count mismatch: matrix needs {} elements, got {}",
                expected, actual
            ),
            LaneMatError::LengthMismatch { input, output } => write!(
                f,
                "Length mismatch: input has {} elements, output has {}",
                input, output
            ),
        }
    }
}

impl std::error::Error for LaneMatError {}

/// Result type alias for lanemat operations.
pub type Result<T> = std::result::Result<T, LaneMatError>;

/// Creates an element count error.
pub fn element_count_error(expected: usize, actual: usize) -> LaneMatError {
    LaneMatError::ElementCount { expected, actual }
}

/// Creates a length mismatch error.
pub fn length_mismatch_error(input: usize, output: usize) -> LaneMatError {
    LaneMatError::LengthMismatch { input, output }
}
