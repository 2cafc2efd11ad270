//! Real-coded crossover.

use super::CrossoverOperator;
use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;

/// Values closer than this are treated as identical; the SBX spread
/// computation degenerates on a zero parent distance.
const EPS: f64 = 1.0e-14;

/// Simulated binary crossover (SBX) for real-coded variables.
///
/// Mimics the spread of single-point binary crossover in continuous space:
/// children are placed around the parents with a spread factor drawn from a
/// polynomial distribution. A larger `distribution_index` concentrates
/// children near the parents; a smaller one explores further.
///
/// # Algorithm (Deb & Agrawal, 1995)
///
/// With probability `probability` the operator fires; each variable pair is
/// then recombined with probability 0.5, drawing a spread factor βq from
/// the bounded polynomial distribution and emitting
/// `c1,2 = 0.5 * ((y1 + y2) ∓ βq * (y2 − y1))`, clamped to the variable's
/// bounds. Children are swapped with probability 0.5 per variable.
#[derive(Debug, Clone, Copy)]
pub struct SbxCrossover {
    probability: f64,
    distribution_index: f64,
}

impl SbxCrossover {
    /// Creates the operator.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if `probability` is outside `[0, 1]` or
    /// `distribution_index` is negative or non-finite.
    pub fn new(probability: f64, distribution_index: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::Configuration(format!(
                "crossover probability must be in [0, 1], got {probability}"
            )));
        }
        if !distribution_index.is_finite() || distribution_index < 0.0 {
            return Err(Error::Configuration(format!(
                "crossover distribution index must be non-negative, got {distribution_index}"
            )));
        }
        Ok(Self {
            probability,
            distribution_index,
        })
    }
}

impl Default for SbxCrossover {
    /// Probability 0.9, distribution index 20.
    fn default() -> Self {
        Self {
            probability: 0.9,
            distribution_index: 20.0,
        }
    }
}

impl CrossoverOperator for SbxCrossover {
    fn apply<R: Rng>(
        &self,
        problem: &dyn Problem,
        parent1: &Solution,
        parent2: &Solution,
        rng: &mut R,
    ) -> Result<(Solution, Solution)> {
        let n = parent1.variables().len();
        if n != parent2.variables().len() {
            return Err(Error::Operator(format!(
                "crossover parents have mismatched variable counts: {} vs {}",
                n,
                parent2.variables().len()
            )));
        }
        if n != problem.num_variables() {
            return Err(Error::Operator(format!(
                "crossover parents have {} variables, problem expects {}",
                n,
                problem.num_variables()
            )));
        }

        let mut c1 = parent1.variables().to_vec();
        let mut c2 = parent2.variables().to_vec();

        if rng.random_range(0.0..1.0) <= self.probability {
            for i in 0..n {
                if rng.random_range(0.0..1.0) > 0.5 {
                    continue;
                }
                let x1 = parent1.variables()[i];
                let x2 = parent2.variables()[i];
                if (x1 - x2).abs() <= EPS {
                    continue;
                }

                let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
                let (lower, upper) = problem.bounds(i);
                let u: f64 = rng.random_range(0.0..1.0);

                let mut child1 = self.contract(y1, y2, y1 - lower, u);
                let mut child2 = self.expand(y1, y2, upper - y2, u);

                child1 = child1.clamp(lower, upper);
                child2 = child2.clamp(lower, upper);

                if rng.random_range(0.0..1.0) <= 0.5 {
                    std::mem::swap(&mut child1, &mut child2);
                }
                c1[i] = child1;
                c2[i] = child2;
            }
        }

        Ok((Solution::new(c1), Solution::new(c2)))
    }
}

impl SbxCrossover {
    /// Child on the lower side of the parent pair, spread bounded by the
    /// distance to the lower bound.
    fn contract(&self, y1: f64, y2: f64, room: f64, u: f64) -> f64 {
        let betaq = self.spread_factor(room / (y2 - y1), u);
        0.5 * ((y1 + y2) - betaq * (y2 - y1))
    }

    /// Child on the upper side, spread bounded by the distance to the upper
    /// bound.
    fn expand(&self, y1: f64, y2: f64, room: f64, u: f64) -> f64 {
        let betaq = self.spread_factor(room / (y2 - y1), u);
        0.5 * ((y1 + y2) + betaq * (y2 - y1))
    }

    /// Draws the spread factor βq from the bounded polynomial distribution.
    fn spread_factor(&self, normalized_room: f64, u: f64) -> f64 {
        let eta = self.distribution_index;
        let beta = 1.0 + 2.0 * normalized_room;
        let alpha = 2.0 - beta.powf(-(eta + 1.0));
        if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / (eta + 1.0))
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / (eta + 1.0))
        }
    }
}
