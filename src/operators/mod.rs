//! Genetic operators.
//!
//! The algorithms consume operators through three narrow contracts —
//! selection picks parents out of a scored population, crossover recombines
//! two parents into two children, mutation perturbs a single solution in
//! place. Each operator validates its parameters at construction and its
//! inputs per call; malformed input (e.g. parents with mismatched variable
//! counts) fails with [`Error::Operator`](crate::error::Error::Operator)
//! before any offspring is built.
//!
//! # Implementations
//!
//! - [`BinaryTournament`]: rank-then-fitness tournament of two
//! - [`SbxCrossover`]: simulated binary crossover for real-coded variables
//! - [`PolynomialMutation`]: bounded polynomial perturbation
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous
//!   Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for
//!   Engineering Design"

mod crossover;
mod mutation;
mod selection;

pub use crossover::SbxCrossover;
pub use mutation::PolynomialMutation;
pub use selection::BinaryTournament;

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;

/// Picks one parent from a population.
pub trait SelectionOperator {
    /// Selects a parent. Fails with
    /// [`Error::Operator`](crate::error::Error::Operator) on an empty
    /// population.
    fn select<'a, R: Rng>(&self, population: &'a [Solution], rng: &mut R)
        -> Result<&'a Solution>;
}

/// Recombines two parents into two unevaluated children.
pub trait CrossoverOperator {
    /// Applies the operator. The problem supplies variable bounds for
    /// clamping. Fails with
    /// [`Error::Operator`](crate::error::Error::Operator) when the parents'
    /// variable counts differ.
    fn apply<R: Rng>(
        &self,
        problem: &dyn Problem,
        parent1: &Solution,
        parent2: &Solution,
        rng: &mut R,
    ) -> Result<(Solution, Solution)>;
}

/// Perturbs one solution in place.
pub trait MutationOperator {
    /// Applies the operator. The problem supplies variable bounds for
    /// clamping. Fails with
    /// [`Error::Operator`](crate::error::Error::Operator) when the solution's
    /// variable count does not match the problem.
    fn apply<R: Rng>(
        &self,
        problem: &dyn Problem,
        solution: &mut Solution,
        rng: &mut R,
    ) -> Result<()>;
}
