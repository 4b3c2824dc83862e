//! Error types for lanemath's slice and lane-loading surface.
//!
//! The numeric kernels never fail: domain and range errors are reported the
//! IEEE-754 way, as NaN or infinity in the result. These errors only cover
//! misuse of the buffer-oriented API.

use std::fmt;

/// Errors that can occur when moving data in and out of lanes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaneMathError {
    /// Input and output buffers have different lengths.
    LengthMismatch {
        /// Length of the input slice.
        input: usize,
        /// Length of the output slice.
        output: usize,
    },
    /// A slice could not be loaded into a fixed-width vector.
    LaneCountMismatch {
        /// Lane count of the target vector.
        expected: usize,
        /// Length of the slice that was offered.
        actual: usize,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for LaneMathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneMathError::LengthMismatch { input, output } => write!(
                f,
                "Length mismatch: input has {} elements but output has {}",
                input, output
            ),
            LaneMathError::LaneCountMismatch { expected, actual } => write!(
                f,
                "Lane count mismatch: expected {} lanes, got a slice of {}",
                expected, actual
            ),
            LaneMathError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for LaneMathError {}

/// Result type alias for lanemath operations.
pub type Result<T> = std::result::Result<T, LaneMathError>;

/// Creates a length mismatch error.
pub fn length_mismatch(input: usize, output: usize) -> LaneMathError {
    LaneMathError::LengthMismatch { input, output }
}

/// Creates a lane count mismatch error.
pub fn lane_count_mismatch(expected: usize, actual: usize) -> LaneMathError {
    LaneMathError::LaneCountMismatch { expected, actual }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> LaneMathError {
    LaneMathError::ValidationError {
        message: message.into(),
    }
}
