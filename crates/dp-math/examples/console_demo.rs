//! Prints the probability that one of two best-of series outcomes occurs,
//! combining binomial CDF terms. External driver over the public API only.

use dp_math::{binomial_cdf, Result};

fn main() -> Result<()> {
    let to_console = binomial_cdf(0.5, 3, 2)? * binomial_cdf(0.5, 5, 5)?
        + binomial_cdf(0.5, 3, 3)? * binomial_cdf(0.5, 5, 4)?;
    println!("{to_console}");
    Ok(())
}
