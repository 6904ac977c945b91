//! Error types for door computations, cross-checks and argument validation

use std::fmt;

/// Main error type for all door operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorsError {
    /// An optimized algorithm disagreed with the baseline
    ///
    /// A logic defect rather than a transient fault, so nothing retries it
    Mismatch {
        /// Name of the algorithm whose output differed
        algorithm: &'static str,
        /// 0-based door index of the first difference
        index: usize,
        /// Baseline state at that index
        expected: bool,
        /// Optimized state at that index
        actual: bool,
    },

    /// Door count argument failed validation
    InvalidCount {
        /// Raw value as supplied
        value: String,
        /// Explanation of why the value is invalid
        reason: &'static str,
    },

    /// Square table does not cover every door that would be queried
    TableTooSmall {
        /// Highest 1-based door number that needs a lookup
        required: usize,
        /// Highest 1-based door number the table covers
        available: usize,
    },
}

impl fmt::Display for DoorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                algorithm,
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "({algorithm}) failed at doors[{index}]: expected {expected}, got {actual}"
                )
            }
            Self::InvalidCount { value, reason } => {
                write!(f, "Invalid door count '{value}': {reason}")
            }
            Self::TableTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "Square table covers doors 1..={available} but door {required} was requested"
                )
            }
        }
    }
}

impl std::error::Error for DoorsError {}

/// Convenience type alias for door results
pub type Result<T> = std::result::Result<T, DoorsError>;

/// Create an invalid count error
pub fn invalid_count(value: &impl ToString, reason: &'static str) -> DoorsError {
    DoorsError::InvalidCount {
        value: value.to_string(),
        reason,
    }
}
