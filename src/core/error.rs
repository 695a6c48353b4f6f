//! Error handling logic

use std::fmt;

/// Error types for failures of the upset-gambler process simulation.
/// Each variant is a distinct failure class; none of them are recoverable
/// inside the simulator itself, callers decide what to do.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum ProcessError {
    /// A probability parameter is outside `[0, 1]` or not a finite number.
    /// Raised at construction time so invalid biases never reach a sampler.
    InvalidParameter {
        /// InvalidParameter failure message
        message: String
    },

    /// Normalization was requested on a distribution with zero total count.
    /// Dividing by that total would produce NaN probabilities, so the
    /// operation is rejected instead.
    EmptyDistribution {
        /// EmptyDistribution failure message
        message: String
    },

    /// Text could not be parsed as a binary word (characters other than
    /// '0' and '1' where symbols were expected).
    InvalidWord {
        /// InvalidWord failure message
        message: String
    },

    /// The symbol-emission backend failed to return a sample.
    /// A `RetryingSource` wrapper treats this variant as transient.
    BackendFailure {
        /// BackendFailure failure message
        message: String
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidParameter { message } => write!(f, "Invalid Parameter: {}", message),
            ProcessError::EmptyDistribution { message } => write!(f, "Empty Distribution: {}", message),
            ProcessError::InvalidWord { message } => write!(f, "Invalid Word: {}", message),
            ProcessError::BackendFailure { message } => write!(f, "Backend Failure: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for ProcessError {}
