//! The sampling loop.

use crate::algorithm::Algorithm;
use crate::archive::NonDominatedArchive;
use crate::error::Result;
use crate::problem::Problem;
use crate::solution::Solution;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random search over the problem's decision space.
///
/// # Usage
///
/// ```
/// use pareto_evo::algorithm::Algorithm;
/// use pareto_evo::problems::Schaffer;
/// use pareto_evo::random_search::RandomSearch;
///
/// let problem = Schaffer::new();
/// let mut search = RandomSearch::new(&problem, 200, Some(42));
/// let archive = search.execute().unwrap();
/// assert!(!archive.is_empty());
/// ```
pub struct RandomSearch<'a> {
    problem: &'a dyn Problem,
    max_evaluations: usize,
    rng: StdRng,
}

impl<'a> RandomSearch<'a> {
    /// Creates a search with the given evaluation budget.
    pub fn new(problem: &'a dyn Problem, max_evaluations: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self {
            problem,
            max_evaluations,
            rng,
        }
    }
}

impl Algorithm for RandomSearch<'_> {
    fn execute(&mut self) -> Result<NonDominatedArchive> {
        let mut archive = NonDominatedArchive::new();

        for evaluation in 0..self.max_evaluations {
            let mut solution = Solution::random(self.problem, &mut self.rng);
            self.problem.evaluate(&mut solution)?;
            self.problem.evaluate_constraints(&mut solution);
            archive.add(solution)?;

            if (evaluation + 1) % 1000 == 0 {
                tracing::debug!(
                    evaluations = evaluation + 1,
                    archive_size = archive.len(),
                    "random search progress"
                );
            }
        }

        Ok(archive)
    }
}
