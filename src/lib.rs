//! Multi-objective evolutionary optimization engine.
//!
//! Searches for a set of mutually non-dominated (Pareto-optimal) solutions
//! to a problem with several conflicting objectives and optional
//! constraints. The problem itself is an external plug-in behind the
//! [`problem::Problem`] trait; this crate supplies the search machinery:
//!
//! - **Dominance** ([`dominance`]): constraint-aware Pareto comparison,
//!   the ordering every other component is built on.
//! - **Archive** ([`archive`]): a set of mutually non-dominated solutions
//!   with dominance-pruning insertion, shared by all strategies.
//! - **Pareto-ranked GA** ([`pareto_ga`]): the core strategy — generational
//!   front ranking, rank + density fitness, bounded elitist environmental
//!   selection, and budget or convergence termination.
//! - **Random search** ([`random_search`]): the minimal baseline strategy
//!   over the same archive contract.
//! - **Operators** ([`operators`]): selection, crossover and mutation
//!   contracts with SBX, polynomial mutation, and binary tournament
//!   implementations.
//! - **Runner** ([`algorithm`]): the `Algorithm` abstraction and a timed
//!   executor, the crate's external entry point.
//!
//! Benchmark problems ([`problems`]), a name-to-constructor registry
//! ([`registry`]) and VAR/FUN table output ([`output`]) round out the
//! toolkit.
//!
//! # Example
//!
//! ```
//! use pareto_evo::algorithm::AlgorithmRunner;
//! use pareto_evo::operators::{BinaryTournament, PolynomialMutation, SbxCrossover};
//! use pareto_evo::pareto_ga::{ParetoGa, ParetoGaConfig};
//! use pareto_evo::problems::Kursawe;
//!
//! let problem = Kursawe::new(3);
//! let config = ParetoGaConfig::default()
//!     .with_max_evaluations(5_000)
//!     .with_seed(42);
//! let mut algorithm = ParetoGa::new(
//!     &problem,
//!     config,
//!     BinaryTournament::new(),
//!     SbxCrossover::default(),
//!     PolynomialMutation::new(1.0 / 3.0, 20.0).unwrap(),
//! ).unwrap();
//!
//! let run = AlgorithmRunner::execute(&mut algorithm).unwrap();
//! println!("{} non-dominated solutions in {:?}", run.archive.len(), run.elapsed);
//! ```
//!
//! # Features
//!
//! - `parallel`: rayon-based batch evaluation (ranking and archiving stay
//!   serial)
//! - `serde`: serialization derives for solutions and configurations

pub mod algorithm;
pub mod archive;
pub mod dominance;
pub mod error;
pub mod operators;
pub mod output;
pub mod pareto_ga;
pub mod problem;
pub mod problems;
pub mod random_search;
pub mod registry;
pub mod solution;
