//! Exact factorials over a bounded integer range.

use super::error::{DomainError, Result};

/// Largest input whose factorial fits in `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Computes `x!` by iterative multiplication.
///
/// The product of the empty range is 1, so `factorial(0) == 1`.
///
/// # Errors
///
/// Returns [`DomainError::NegativeCount`] when `x < 0`, and
/// [`DomainError::ExactRangeExceeded`] when `x!` does not fit in `u128`
/// (`x > 34`).
pub fn factorial(x: i64) -> Result<u128> {
    if x < 0 {
        return Err(DomainError::NegativeCount {
            name: "x",
            value: x,
        });
    }
    let mut product: u128 = 1;
    for i in 2..=x as u128 {
        product = product
            .checked_mul(i)
            .ok_or(DomainError::ExactRangeExceeded {
                operation: "factorial",
                value: x,
            })?;
    }
    Ok(product)
}
