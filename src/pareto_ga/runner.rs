//! The generational loop.

use super::config::{ParetoGaConfig, Termination};
use super::fitness;
use crate::algorithm::Algorithm;
use crate::archive::NonDominatedArchive;
use crate::error::{Error, Result};
use crate::operators::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::problem::Problem;
use crate::solution::Solution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pareto-ranked elitist GA.
///
/// One generation: rank the combined parent + offspring pool into Pareto
/// fronts, score each solution by rank and density, truncate to the
/// population cap (environmental selection), rebuild the archive from the
/// surviving non-dominated members, check termination, then breed and
/// evaluate the next offspring batch. Accepted improvements are never lost:
/// rank-0 members outrank all overflow during truncation.
///
/// Construction validates the configuration and the problem shape; no
/// partially-configured instance is runnable.
///
/// # Usage
///
/// ```
/// use pareto_evo::algorithm::AlgorithmRunner;
/// use pareto_evo::operators::{BinaryTournament, PolynomialMutation, SbxCrossover};
/// use pareto_evo::pareto_ga::{ParetoGa, ParetoGaConfig};
/// use pareto_evo::problems::Schaffer;
///
/// let problem = Schaffer::new();
/// let config = ParetoGaConfig::default()
///     .with_max_evaluations(2_000)
///     .with_seed(42);
/// let mut algorithm = ParetoGa::new(
///     &problem,
///     config,
///     BinaryTournament::new(),
///     SbxCrossover::default(),
///     PolynomialMutation::new(1.0, 20.0).unwrap(),
/// ).unwrap();
///
/// let run = AlgorithmRunner::execute(&mut algorithm).unwrap();
/// assert!(!run.archive.is_empty());
/// ```
pub struct ParetoGa<'a, S, C, M> {
    problem: &'a dyn Problem,
    config: ParetoGaConfig,
    selection: S,
    crossover: C,
    mutation: M,
    rng: StdRng,
    evaluations: usize,
}

impl<'a, S, C, M> ParetoGa<'a, S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Creates a runnable algorithm instance.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the configuration fails validation or
    /// the problem declares no variables or no objectives.
    pub fn new(
        problem: &'a dyn Problem,
        config: ParetoGaConfig,
        selection: S,
        crossover: C,
        mutation: M,
    ) -> Result<Self> {
        config.validate()?;
        if problem.num_variables() == 0 {
            return Err(Error::Configuration(format!(
                "problem '{}' declares no decision variables",
                problem.name()
            )));
        }
        if problem.num_objectives() == 0 {
            return Err(Error::Configuration(format!(
                "problem '{}' declares no objectives",
                problem.name()
            )));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        Ok(Self {
            problem,
            config,
            selection,
            crossover,
            mutation,
            rng,
            evaluations: 0,
        })
    }

    /// Evaluations performed by the most recent `execute` call.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Breeds one offspring batch of exactly `target` unevaluated children.
    fn breed(&mut self, population: &[Solution], target: usize) -> Result<Vec<Solution>> {
        let mut offspring = Vec::with_capacity(target);
        while offspring.len() < target {
            let parent1 = self.selection.select(population, &mut self.rng)?;
            let parent2 = self.selection.select(population, &mut self.rng)?;
            let (mut child1, mut child2) =
                self.crossover
                    .apply(self.problem, parent1, parent2, &mut self.rng)?;

            self.mutation.apply(self.problem, &mut child1, &mut self.rng)?;
            offspring.push(child1);
            if offspring.len() < target {
                self.mutation.apply(self.problem, &mut child2, &mut self.rng)?;
                offspring.push(child2);
            }
        }
        Ok(offspring)
    }
}

impl<S, C, M> Algorithm for ParetoGa<'_, S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    fn execute(&mut self) -> Result<NonDominatedArchive> {
        self.evaluations = 0;
        let budget = self.config.max_evaluations;

        // Initialization: random solutions within bounds, capped by the
        // budget so the run never evaluates more than it is allowed to.
        let initial = self.config.initial_population_size.min(budget);
        let mut population: Vec<Solution> = (0..initial)
            .map(|_| Solution::random(self.problem, &mut self.rng))
            .collect();
        evaluate_batch(self.problem, &mut population, self.config.parallel)?;
        self.evaluations += population.len();

        let seed_archive = rebuild_archive(&population)?;
        let mut previous_signature = objective_signature(&seed_archive);
        let mut archive = seed_archive;
        let mut stable_generations = 0usize;
        let mut offspring: Vec<Solution> = Vec::new();
        let mut generation = 0usize;

        loop {
            // Ranking + fitness over the combined pool.
            let mut pool = population;
            pool.append(&mut offspring);
            fitness::rank_and_score(&mut pool, &self.config)?;

            // Environmental selection: best (rank, fitness) survive, hard
            // cap at max_population_size. Sorting is elitist by
            // construction because rank precedes fitness.
            pool.sort_by(|a, b| a.compare_fitness(b));
            pool.truncate(self.config.max_population_size);
            population = pool;

            archive = rebuild_archive(&population)?;

            // Convergence bookkeeping. The first pass has done no
            // variation yet, so it does not count as a stable generation.
            let signature = objective_signature(&archive);
            if generation > 0 && signature == previous_signature {
                stable_generations += 1;
            } else {
                stable_generations = 0;
            }
            previous_signature = signature;
            generation += 1;

            tracing::debug!(
                generation,
                evaluations = self.evaluations,
                front_size = archive.len(),
                stable_generations,
                "generation complete"
            );

            // Termination, checked only at generation boundaries.
            if self.evaluations >= budget {
                break;
            }
            if let Termination::StableArchive(required) = self.config.termination {
                if stable_generations >= required {
                    break;
                }
            }

            // Variation + evaluation of the next batch. The batch matches
            // the current generation size, shrunk to the remaining budget.
            let target = population.len().min(budget - self.evaluations);
            offspring = self.breed(&population, target)?;
            evaluate_batch(self.problem, &mut offspring, self.config.parallel)?;
            self.evaluations += offspring.len();
        }

        Ok(archive)
    }
}

/// Evaluates objectives and constraints for every solution in the batch.
///
/// With the `parallel` feature and `parallel: true` the batch is evaluated
/// concurrently; solutions are independent here, while ranking and archive
/// insertion stay serial.
fn evaluate_batch(problem: &dyn Problem, batch: &mut [Solution], parallel: bool) -> Result<()> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return batch.par_iter_mut().try_for_each(|solution| {
                problem.evaluate(solution)?;
                problem.evaluate_constraints(solution);
                Ok(())
            });
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for solution in batch.iter_mut() {
        problem.evaluate(solution)?;
        problem.evaluate_constraints(solution);
    }
    Ok(())
}

/// Collapses a population into its non-dominated, objective-distinct core.
fn rebuild_archive(population: &[Solution]) -> Result<NonDominatedArchive> {
    let mut archive = NonDominatedArchive::new();
    for solution in population {
        archive.add(solution.clone())?;
    }
    Ok(archive)
}

/// Sorted objective vectors; equal signatures mean the archive's membership
/// in objective space is unchanged.
fn objective_signature(archive: &NonDominatedArchive) -> Vec<Vec<f64>> {
    let mut signature: Vec<Vec<f64>> =
        archive.iter().map(|s| s.objectives().to_vec()).collect();
    signature.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    signature
}
