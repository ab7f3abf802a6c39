//! Error types for the theory layer.

use thiserror::Error;

use crate::interval::Interval;

/// Result type for theory operations.
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Errors from spelled-pitch arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TheoryError {
    /// The quality does not exist for the step count, or the step count is
    /// out of range (e.g. a perfect third, a major fifth).
    #[error("no such interval: {interval}")]
    InvalidInterval {
        /// The rejected interval.
        interval: Interval,
    },
}
