//! Binomial distribution mass and cumulative functions.

use super::combinatorics::combination;
use super::error::{DomainError, Result};

/// Probability of exactly `x` successes in `n` independent trials with
/// success probability `p`: `C(n, x) · p^x · (1-p)^(n-x)`.
///
/// `p = 0` with `x = 0` yields 1 (0^0 convention), as does `p = 1` with
/// `x = n`.
///
/// # Errors
///
/// Returns [`DomainError::ProbabilityOutOfRange`] when `p` is NaN or outside
/// `[0, 1]`, [`DomainError::NegativeCount`] when `n < 0` or `x < 0`, and
/// [`DomainError::OutcomeExceedsTrials`] when `x > n`.
pub fn binomial_pmf(p: f64, n: i64, x: i64) -> Result<f64> {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return Err(DomainError::ProbabilityOutOfRange { p });
    }
    if n < 0 {
        return Err(DomainError::NegativeCount {
            name: "n",
            value: n,
        });
    }
    if x < 0 {
        return Err(DomainError::NegativeCount {
            name: "x",
            value: x,
        });
    }
    if x > n {
        return Err(DomainError::OutcomeExceedsTrials { n, x });
    }
    let count = combination(n, x)? as f64;
    let successes = i32::try_from(x).map_err(|_| DomainError::ExactRangeExceeded {
        operation: "binomial_pmf",
        value: x,
    })?;
    let failures = i32::try_from(n - x).map_err(|_| DomainError::ExactRangeExceeded {
        operation: "binomial_pmf",
        value: n - x,
    })?;
    Ok(count * p.powi(successes) * (1.0 - p).powi(failures))
}

/// Probability of at most `x` successes in `n` trials:
/// `Σ_{i=0}^{x} binomial_pmf(p, n, i)`.
///
/// The summation is capped at `n`: once every outcome is covered the full
/// mass has accumulated, so `x > n` answers 1 rather than failing. The
/// result is monotonically non-decreasing in `x`.
///
/// # Errors
///
/// Returns [`DomainError::NegativeCount`] when `x < 0` or `n < 0`, and
/// propagates [`DomainError::ProbabilityOutOfRange`] from the PMF.
pub fn binomial_cdf(p: f64, n: i64, x: i64) -> Result<f64> {
    if n < 0 {
        return Err(DomainError::NegativeCount {
            name: "n",
            value: n,
        });
    }
    if x < 0 {
        return Err(DomainError::NegativeCount {
            name: "x",
            value: x,
        });
    }
    let mut total = 0.0;
    for i in 0..=x.min(n) {
        total += binomial_pmf(p, n, i)?;
    }
    Ok(total)
}
