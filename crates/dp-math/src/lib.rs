//! Discrete probability math utilities.
//!
//! Exact factorials and combination counts over `u128`, plus the binomial
//! PMF/CDF and hypergeometric PMF as `f64` probabilities. Every function is
//! pure and stateless; any input outside its documented domain is rejected
//! with a [`DomainError`] rather than producing a partial result.

pub mod math;

pub use math::binomial::*;
pub use math::combinatorics::*;
pub use math::error::{DomainError, Result};
pub use math::factorial::*;
pub use math::hypergeometric::*;
