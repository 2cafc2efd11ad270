//! Pure random sampling baseline.
//!
//! The minimal consumer of the non-dominated archive contract: draw a
//! random solution, evaluate it, offer it to the archive, repeat until the
//! evaluation budget runs out. No ranking, no population, no operators.
//! Exists as a correctness baseline for the ranked GA and as the simplest
//! [`Algorithm`](crate::algorithm::Algorithm) implementation.

mod runner;

pub use runner::RandomSearch;
