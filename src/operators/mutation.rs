//! Real-coded mutation.

use super::MutationOperator;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;

/// Polynomial mutation for real-coded variables.
///
/// Each variable is perturbed independently with probability `probability`
/// by a delta drawn from a polynomial distribution whose shape respects the
/// distance to the variable's bounds, so mutants stay inside the box
/// without rejection sampling. A larger `distribution_index` keeps mutants
/// closer to the original value.
///
/// # Algorithm (Deb & Goyal, 1996)
#[derive(Debug, Clone, Copy)]
pub struct PolynomialMutation {
    probability: f64,
    distribution_index: f64,
}

impl PolynomialMutation {
    /// Creates the operator. A common `probability` is
    /// `1.0 / num_variables` (one expected mutation per solution).
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if `probability` is outside `[0, 1]` or
    /// `distribution_index` is negative or non-finite.
    pub fn new(probability: f64, distribution_index: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::Configuration(format!(
                "mutation probability must be in [0, 1], got {probability}"
            )));
        }
        if !distribution_index.is_finite() || distribution_index < 0.0 {
            return Err(Error::Configuration(format!(
                "mutation distribution index must be non-negative, got {distribution_index}"
            )));
        }
        Ok(Self {
            probability,
            distribution_index,
        })
    }
}

impl MutationOperator for PolynomialMutation {
    fn apply<R: Rng>(
        &self,
        problem: &dyn Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> Result<()> {
        if solution.variables().len() != problem.num_variables() {
            return Err(Error::Operator(format!(
                "mutation input has {} variables, problem expects {}",
                solution.variables().len(),
                problem.num_variables()
            )));
        }

        let eta = self.distribution_index;
        let mut_pow = 1.0 / (eta + 1.0);

        for i in 0..problem.num_variables() {
            if rng.random_range(0.0..1.0) > self.probability {
                continue;
            }
            let (lower, upper) = problem.bounds(i);
            let range = upper - lower;
            if range <= 0.0 {
                continue;
            }

            let y = solution.variables()[i];
            let delta1 = (y - lower) / range;
            let delta2 = (upper - y) / range;
            let u: f64 = rng.random_range(0.0..1.0);

            let deltaq = if u <= 0.5 {
                let xy = 1.0 - delta1;
                let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta + 1.0);
                val.powf(mut_pow) - 1.0
            } else {
                let xy = 1.0 - delta2;
                let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta + 1.0);
                1.0 - val.powf(mut_pow)
            };

            solution.variables_mut()[i] = (y + deltaq * range).clamp(lower, upper);
        }

        Ok(())
    }
}
