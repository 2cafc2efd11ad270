//! The problem contract.
//!
//! A [`Problem`] is the external plug-in that gives an optimization run its
//! meaning: it declares the shape of the decision space and computes
//! objective and constraint values for candidate solutions. The core never
//! implements domain logic itself; benchmark problems in
//! [`problems`](crate::problems) implement this trait like any consumer
//! would.

use crate::error::Result;
use crate::solution::Solution;

/// A multi-objective optimization problem.
///
/// All objectives are **minimized**: lower values are better. For
/// maximization, negate the objective.
///
/// Implementations must be `Send + Sync`: the algorithms may evaluate
/// solutions in parallel (feature `parallel`), and the problem is only ever
/// read through `&self`. The algorithms never mutate the problem.
///
/// # Implementing
///
/// ```
/// use pareto_evo::problem::Problem;
/// use pareto_evo::solution::Solution;
/// use pareto_evo::error::Result;
///
/// /// f1 = x^2, f2 = (x - 2)^2 over x in [-10, 10].
/// struct TwoParabolas;
///
/// impl Problem for TwoParabolas {
///     fn name(&self) -> &str { "TwoParabolas" }
///     fn num_variables(&self) -> usize { 1 }
///     fn num_objectives(&self) -> usize { 2 }
///     fn bounds(&self, _i: usize) -> (f64, f64) { (-10.0, 10.0) }
///
///     fn evaluate(&self, solution: &mut Solution) -> Result<()> {
///         let x = solution.variables()[0];
///         solution.set_objectives(vec![x * x, (x - 2.0) * (x - 2.0)]);
///         Ok(())
///     }
/// }
/// ```
pub trait Problem: Send + Sync {
    /// Problem identifier, used by the registry and in logs.
    fn name(&self) -> &str;

    /// Number of decision variables.
    fn num_variables(&self) -> usize;

    /// Number of objectives. Every evaluated solution carries exactly this
    /// many objective values.
    fn num_objectives(&self) -> usize;

    /// Number of constraints. Zero for unconstrained problems.
    fn num_constraints(&self) -> usize {
        0
    }

    /// Lower and upper bound of variable `i`.
    fn bounds(&self, i: usize) -> (f64, f64);

    /// Computes objective values and stores them on the solution.
    ///
    /// A failure here is fatal: the run aborts and the error is surfaced to
    /// the caller as [`Error::Evaluation`](crate::error::Error::Evaluation),
    /// with no retry.
    fn evaluate(&self, solution: &mut Solution) -> Result<()>;

    /// Computes the overall constraint-violation measure (`0.0` = feasible)
    /// and stores it on the solution. The default is a no-op, which leaves
    /// the solution feasible.
    fn evaluate_constraints(&self, solution: &mut Solution) {
        let _ = solution;
    }
}
