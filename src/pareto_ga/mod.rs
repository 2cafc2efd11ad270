//! Pareto-ranked elitist genetic algorithm.
//!
//! A generational multi-objective GA that combines non-dominated ranking
//! with a coefficient-weighted density estimate to score solutions, keeps
//! the best of parents + offspring under a hard population cap
//! (environmental selection), and returns the non-dominated archive of the
//! final population. Termination is either a fixed evaluation budget or an
//! adaptive check on archive convergence; the budget always remains a hard
//! cap.
//!
//! # Key Types
//!
//! - [`ParetoGaConfig`]: population sizes, budget, fitness coefficients,
//!   termination mode
//! - [`Termination`]: budget-only vs. stable-archive stopping
//! - [`ParetoGa`]: the algorithm; construct with a problem and operator
//!   instances, run via [`Algorithm::execute`](crate::algorithm::Algorithm)
//!
//! # References
//!
//! - Eskandari, Geiger & Lamont (2007), *FastPGA: A Dynamic Population
//!   Sizing Approach for Solving Expensive Multiobjective Optimization
//!   Problems*
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod fitness;
mod runner;

pub use config::{ParetoGaConfig, Termination};
pub use runner::ParetoGa;
