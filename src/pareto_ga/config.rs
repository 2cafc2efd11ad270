//! Configuration for the Pareto-ranked GA.

use crate::error::{Error, Result};

/// Termination mode. The evaluation budget is a hard cap in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop once the evaluation budget is exhausted.
    Evaluations,

    /// Stop early once the archive's objective-vector set has been
    /// unchanged for this many consecutive generations.
    StableArchive(usize),
}

/// Parameters of the Pareto-ranked GA.
///
/// Validated before any algorithm instance becomes runnable; an invalid
/// configuration fails construction with
/// [`Error::Configuration`](crate::error::Error::Configuration).
///
/// # Fitness coefficients
///
/// Scoring combines the Pareto rank with a per-front density credit:
/// `fitness = rank_weight * rank - credit`, lower is better. Interior
/// members of a front earn `density_near_weight` times their normalized
/// nearest-neighbor distance plus `density_far_weight` times their
/// normalized crowding distance; members extreme on some objective earn the
/// flat `density_boundary_weight` instead. Rank precedence does not depend
/// on the coefficients: orderings always compare rank before fitness.
///
/// # Builder Pattern
///
/// ```
/// use pareto_evo::pareto_ga::{ParetoGaConfig, Termination};
///
/// let config = ParetoGaConfig::default()
///     .with_max_population_size(60)
///     .with_max_evaluations(10_000)
///     .with_termination(Termination::StableArchive(10))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoGaConfig {
    /// Number of random solutions generated at start.
    pub initial_population_size: usize,

    /// Hard cap applied by environmental selection each generation; also
    /// bounds the size of the returned archive.
    pub max_population_size: usize,

    /// Evaluation budget. Checked at generation boundaries only, never
    /// mid-generation, and never exceeded.
    pub max_evaluations: usize,

    /// Weight of the Pareto rank in the scalar fitness.
    pub rank_weight: f64,

    /// Weight of the nearest-neighbor distance for front-interior members.
    pub density_near_weight: f64,

    /// Weight of the crowding distance for front-interior members.
    pub density_far_weight: f64,

    /// Flat credit for members extreme on some objective of their front.
    pub density_boundary_weight: f64,

    /// Stopping rule.
    pub termination: Termination,

    /// Random seed for reproducibility. `None` draws a seed at run time.
    pub seed: Option<u64>,

    /// Whether to evaluate solution batches in parallel. Takes effect only
    /// with the `parallel` feature; ranking and archiving stay serial
    /// either way.
    pub parallel: bool,
}

impl Default for ParetoGaConfig {
    fn default() -> Self {
        Self {
            initial_population_size: 100,
            max_population_size: 100,
            max_evaluations: 25_000,
            rank_weight: 20.0,
            density_near_weight: 1.0,
            density_far_weight: 1.0,
            density_boundary_weight: 2.0,
            termination: Termination::Evaluations,
            seed: None,
            parallel: false,
        }
    }
}

impl ParetoGaConfig {
    /// Sets the initial population size.
    pub fn with_initial_population_size(mut self, n: usize) -> Self {
        self.initial_population_size = n;
        self
    }

    /// Sets the maximum population size.
    pub fn with_max_population_size(mut self, n: usize) -> Self {
        self.max_population_size = n;
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the four fitness coefficients at once:
    /// rank, density-near, density-far, density-boundary.
    pub fn with_fitness_weights(mut self, rank: f64, near: f64, far: f64, boundary: f64) -> Self {
        self.rank_weight = rank;
        self.density_near_weight = near;
        self.density_far_weight = far;
        self.density_boundary_weight = boundary;
        self
    }

    /// Sets the termination mode.
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.initial_population_size < 1 {
            return Err(Error::Configuration(
                "initial_population_size must be at least 1".into(),
            ));
        }
        if self.max_population_size < 1 {
            return Err(Error::Configuration(
                "max_population_size must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("rank_weight", self.rank_weight),
            ("density_near_weight", self.density_near_weight),
            ("density_far_weight", self.density_far_weight),
            ("density_boundary_weight", self.density_boundary_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Configuration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.termination == Termination::StableArchive(0) {
            return Err(Error::Configuration(
                "StableArchive requires at least 1 stable generation".into(),
            ));
        }
        Ok(())
    }
}
