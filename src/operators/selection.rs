//! Parent selection.

use super::SelectionOperator;
use crate::error::{Error, Result};
use crate::solution::Solution;
use rand::Rng;
use std::cmp::Ordering;

/// Binary tournament on the ranked GA's fitness ordering.
///
/// Draws two members at random (with replacement) and keeps the one with
/// the lower rank, breaking rank ties by scalar fitness. Ties on both fall
/// to the first draw.
///
/// O(1) per selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTournament;

impl BinaryTournament {
    /// Creates the operator.
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for BinaryTournament {
    fn select<'a, R: Rng>(
        &self,
        population: &'a [Solution],
        rng: &mut R,
    ) -> Result<&'a Solution> {
        if population.is_empty() {
            return Err(Error::Operator(
                "cannot select from an empty population".into(),
            ));
        }
        let n = population.len();
        let a = &population[rng.random_range(0..n)];
        let b = &population[rng.random_range(0..n)];
        Ok(match a.compare_fitness(b) {
            Ordering::Greater => b,
            _ => a,
        })
    }
}
