//! Combination counts `C(n, r)`.

use super::error::{DomainError, Result};

/// Counts the unordered `r`-element subsets of an `n`-element set.
///
/// The defining formula is `C(n, r) = n! / (r! · (n - r)!)`. The
/// implementation accumulates multiplicatively instead of dividing
/// factorials: `C(n, i) = C(n, i-1) · (n - i + 1) / i`, iterating over
/// `min(r, n - r)` steps. Each partial product is itself a binomial
/// coefficient, so every division is exact and the result is an exact
/// integer for every `C(n, r)` that fits in `u128`.
///
/// # Errors
///
/// Returns [`DomainError::NegativeCount`] when `n < 0` or `r < 0`,
/// [`DomainError::SubsetExceedsSet`] when `r > n`, and
/// [`DomainError::ExactRangeExceeded`] when the count does not fit in
/// `u128`.
pub fn combination(n: i64, r: i64) -> Result<u128> {
    if n < 0 {
        return Err(DomainError::NegativeCount {
            name: "n",
            value: n,
        });
    }
    if r < 0 {
        return Err(DomainError::NegativeCount {
            name: "r",
            value: r,
        });
    }
    if r > n {
        return Err(DomainError::SubsetExceedsSet { n, r });
    }
    // C(n, r) == C(n, n - r); iterate the shorter side.
    let steps = r.min(n - r) as u128;
    let n_wide = n as u128;
    let mut count: u128 = 1;
    for i in 1..=steps {
        count = count
            .checked_mul(n_wide - i + 1)
            .ok_or(DomainError::ExactRangeExceeded {
                operation: "combination",
                value: n,
            })?
            / i;
    }
    Ok(count)
}
