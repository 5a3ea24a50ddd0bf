//! Hypergeometric distribution mass function.

use super::combinatorics::combination;
use super::error::{DomainError, Result};

/// Probability of drawing exactly `x` successes in `n` draws without
/// replacement from a population of `n1` successes and `n2` failures:
/// `C(n1, x) · C(n2, n-x) / C(n1+n2, n)`.
///
/// # Errors
///
/// Returns [`DomainError::NegativeCount`] when any input is negative,
/// [`DomainError::OutcomeExceedsTrials`] when `x > n`, and
/// [`DomainError::DrawExceedsPopulation`] when `n > n1 + n2`. When `x > n1`
/// or `n - x > n2` the inner [`combination`] calls fail and their
/// [`DomainError`] propagates; callers summing over a support must skip
/// those terms.
pub fn hypergeometric_pmf(n1: i64, n2: i64, n: i64, x: i64) -> Result<f64> {
    for (name, value) in [("N1", n1), ("N2", n2), ("n", n), ("x", x)] {
        if value < 0 {
            return Err(DomainError::NegativeCount { name, value });
        }
    }
    if x > n {
        return Err(DomainError::OutcomeExceedsTrials { n, x });
    }
    if n > n1 + n2 {
        return Err(DomainError::DrawExceedsPopulation {
            n,
            population: n1 + n2,
        });
    }
    let success_ways = combination(n1, x)? as f64;
    let failure_ways = combination(n2, n - x)? as f64;
    let total_ways = combination(n1 + n2, n)? as f64;
    Ok(success_ways * failure_ways / total_ways)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn even_split_population() {
        // C(5,2) * C(5,2) / C(10,4) = 100 / 210
        let p = hypergeometric_pmf(5, 5, 4, 2).unwrap();
        assert!(approx_eq(p, 10.0 / 21.0, 1e-12));
    }

    #[test]
    fn drawing_everything_is_certain() {
        assert!(approx_eq(hypergeometric_pmf(3, 2, 5, 3).unwrap(), 1.0, 1e-12));
    }

    #[test]
    fn mass_sums_to_one_over_support() {
        let (n1, n2, n) = (7, 5, 6);
        let mut total = 0.0;
        for x in 0..=n {
            if x > n1 || n - x > n2 {
                continue;
            }
            total += hypergeometric_pmf(n1, n2, n, x).unwrap();
        }
        assert!(approx_eq(total, 1.0, 1e-12));
    }

    #[test]
    fn rejects_negative_inputs() {
        assert_eq!(
            hypergeometric_pmf(-1, 5, 2, 1),
            Err(DomainError::NegativeCount {
                name: "N1",
                value: -1
            })
        );
        assert_eq!(
            hypergeometric_pmf(5, 5, 2, -1),
            Err(DomainError::NegativeCount {
                name: "x",
                value: -1
            })
        );
    }

    #[test]
    fn rejects_outcome_beyond_draws() {
        assert_eq!(
            hypergeometric_pmf(5, 5, 2, 3),
            Err(DomainError::OutcomeExceedsTrials { n: 2, x: 3 })
        );
    }

    #[test]
    fn rejects_draws_beyond_population() {
        assert_eq!(
            hypergeometric_pmf(3, 2, 6, 1),
            Err(DomainError::DrawExceedsPopulation {
                n: 6,
                population: 5
            })
        );
    }

    #[test]
    fn propagates_combination_failure_outside_support() {
        // x exceeds the successes in the population.
        assert_eq!(
            hypergeometric_pmf(2, 8, 5, 3),
            Err(DomainError::SubsetExceedsSet { n: 2, r: 3 })
        );
    }
}
