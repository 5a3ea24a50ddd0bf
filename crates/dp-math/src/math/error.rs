//! Domain errors for discrete probability inputs.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for fallible math operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Raised when an input violates a documented precondition.
///
/// Failures are terminal: no function recovers internally or returns a
/// partial result.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum DomainError {
    /// A count parameter was negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeCount { name: &'static str, value: i64 },

    /// A probability was NaN or outside `[0, 1]`.
    #[error("probability must be within [0, 1], got {p}")]
    ProbabilityOutOfRange { p: f64 },

    /// The subset size exceeded the set size in `C(n, r)`.
    #[error("r must not exceed n in C(n, r): n={n}, r={r}")]
    SubsetExceedsSet { n: i64, r: i64 },

    /// More successes requested than draws or trials performed.
    #[error("x must not exceed n: n={n}, x={x}")]
    OutcomeExceedsTrials { n: i64, x: i64 },

    /// More draws requested than the population holds.
    #[error("n must not exceed the population size: n={n}, population={population}")]
    DrawExceedsPopulation { n: i64, population: i64 },

    /// An exact integer result does not fit in `u128`.
    #[error("{operation} exceeds the exact integer range for input {value}")]
    ExactRangeExceeded { operation: &'static str, value: i64 },
}
