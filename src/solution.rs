//! Candidate solutions.
//!
//! A [`Solution`] is a point in decision space plus the objective and
//! constraint values cached by evaluation. Solutions are created by the
//! algorithms (random sampling within the problem's bounds) or by crossover;
//! only [`Problem::evaluate`](crate::problem::Problem::evaluate) and
//! [`Problem::evaluate_constraints`](crate::problem::Problem::evaluate_constraints)
//! fill in objective and constraint values. Once evaluated, a solution is
//! treated as immutable for the rest of its generation.

use crate::problem::Problem;
use rand::Rng;
use std::cmp::Ordering;

/// A candidate point in decision space with cached evaluation results.
///
/// Objectives are empty until the problem evaluates the solution; components
/// that need objectives (dominance, ranking, archiving) reject unevaluated
/// solutions with [`Error::InvalidState`](crate::error::Error::InvalidState).
///
/// `rank` and `fitness` are derived values owned by the Pareto-ranked GA;
/// they carry no meaning outside one of its generations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    variables: Vec<f64>,
    objectives: Vec<f64>,
    constraint_violation: f64,
    rank: usize,
    fitness: f64,
}

impl Solution {
    /// Creates an unevaluated solution from explicit variable values.
    pub fn new(variables: Vec<f64>) -> Self {
        Self {
            variables,
            objectives: Vec::new(),
            constraint_violation: 0.0,
            rank: 0,
            fitness: 0.0,
        }
    }

    /// Creates an unevaluated solution with each variable drawn uniformly
    /// from the problem's bounds.
    pub fn random<R: Rng>(problem: &dyn Problem, rng: &mut R) -> Self {
        let variables = (0..problem.num_variables())
            .map(|i| {
                let (lower, upper) = problem.bounds(i);
                if lower < upper {
                    rng.random_range(lower..upper)
                } else {
                    lower
                }
            })
            .collect();
        Self::new(variables)
    }

    /// Decision-variable values.
    pub fn variables(&self) -> &[f64] {
        &self.variables
    }

    /// Mutable access for genetic operators. Operators run before
    /// evaluation; mutating an already-evaluated solution invalidates its
    /// cached objectives.
    pub fn variables_mut(&mut self) -> &mut [f64] {
        &mut self.variables
    }

    /// Objective values; empty until evaluated.
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// Stores objective values. Called by `Problem::evaluate`.
    pub fn set_objectives(&mut self, objectives: Vec<f64>) {
        self.objectives = objectives;
    }

    /// Overall constraint violation: `0.0` means feasible, larger is worse.
    pub fn constraint_violation(&self) -> f64 {
        self.constraint_violation
    }

    /// Stores the violation measure. Called by `Problem::evaluate_constraints`.
    pub fn set_constraint_violation(&mut self, violation: f64) {
        self.constraint_violation = violation;
    }

    /// Whether the solution carries objective values.
    pub fn is_evaluated(&self) -> bool {
        !self.objectives.is_empty()
    }

    /// Pareto-front index assigned by the ranked GA (0 = non-dominated).
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }

    /// Combined rank + density scalar assigned by the ranked GA. Lower is
    /// better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Ordering used everywhere the ranked GA compares solutions: rank
    /// first, scalar fitness as the tie-break. Lower rank always precedes,
    /// regardless of the fitness coefficients.
    pub fn compare_fitness(&self, other: &Solution) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            self.fitness
                .partial_cmp(&other.fitness)
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Whether both solutions sit at exactly the same point in objective
    /// space.
    pub fn same_objectives(&self, other: &Solution) -> bool {
        self.objectives == other.objectives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::Schaffer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_is_unevaluated() {
        let s = Solution::new(vec![1.0, 2.0]);
        assert!(!s.is_evaluated());
        assert!(s.objectives().is_empty());
        assert_eq!(s.constraint_violation(), 0.0);
    }

    #[test]
    fn test_random_respects_bounds() {
        let problem = Schaffer::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let s = Solution::random(&problem, &mut rng);
            assert_eq!(s.variables().len(), problem.num_variables());
            for (i, &v) in s.variables().iter().enumerate() {
                let (lower, upper) = problem.bounds(i);
                assert!(v >= lower && v <= upper, "variable {v} outside [{lower}, {upper}]");
            }
        }
    }

    #[test]
    fn test_set_objectives_marks_evaluated() {
        let mut s = Solution::new(vec![0.5]);
        s.set_objectives(vec![0.25, 2.25]);
        assert!(s.is_evaluated());
        assert_eq!(s.objectives(), &[0.25, 2.25]);
    }

    #[test]
    fn test_compare_fitness_rank_precedes() {
        let mut a = Solution::new(vec![0.0]);
        a.set_rank(0);
        a.set_fitness(100.0);

        let mut b = Solution::new(vec![0.0]);
        b.set_rank(1);
        b.set_fitness(-100.0);

        // Lower rank wins even with a far worse scalar fitness.
        assert_eq!(a.compare_fitness(&b), Ordering::Less);
        assert_eq!(b.compare_fitness(&a), Ordering::Greater);
    }

    #[test]
    fn test_compare_fitness_ties_on_scalar() {
        let mut a = Solution::new(vec![0.0]);
        a.set_rank(2);
        a.set_fitness(1.0);

        let mut b = Solution::new(vec![0.0]);
        b.set_rank(2);
        b.set_fitness(3.0);

        assert_eq!(a.compare_fitness(&b), Ordering::Less);
    }

    #[test]
    fn test_same_objectives() {
        let mut a = Solution::new(vec![0.0]);
        let mut b = Solution::new(vec![9.0]);
        a.set_objectives(vec![1.0, 2.0]);
        b.set_objectives(vec![1.0, 2.0]);
        assert!(a.same_objectives(&b));

        b.set_objectives(vec![1.0, 2.5]);
        assert!(!a.same_objectives(&b));
    }
}
