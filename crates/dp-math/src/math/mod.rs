//! Core math modules.

pub mod binomial;
pub mod combinatorics;
pub mod error;
pub mod factorial;
pub mod hypergeometric;
