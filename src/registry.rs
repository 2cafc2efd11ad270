//! Problem lookup by name.
//!
//! An explicit factory map from problem identifier to constructor,
//! populated at startup — the crate performs no runtime type discovery.
//! Consumers register their own problems next to the built-in benchmarks.

use crate::error::{Error, Result};
use crate::problem::Problem;
use crate::problems::{BinhKorn, Kursawe, Schaffer, Zdt1};
use std::collections::HashMap;

/// Constructor for a registered problem.
pub type ProblemConstructor = fn() -> Box<dyn Problem>;

/// Registry resolving problem names to fresh instances.
///
/// # Usage
///
/// ```
/// use pareto_evo::registry::ProblemRegistry;
///
/// let registry = ProblemRegistry::with_builtins();
/// let problem = registry.create("Schaffer").unwrap();
/// assert_eq!(problem.num_objectives(), 2);
/// ```
#[derive(Default)]
pub struct ProblemRegistry {
    constructors: HashMap<String, ProblemConstructor>,
}

impl ProblemRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the benchmark problems in
    /// their customary instances.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("Schaffer", || Box::new(Schaffer::new()));
        registry.register("Kursawe", || Box::new(Kursawe::new(3)));
        registry.register("Zdt1", || Box::new(Zdt1::new(30)));
        registry.register("BinhKorn", || Box::new(BinhKorn::new()));
        registry
    }

    /// Registers a constructor under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, constructor: ProblemConstructor) {
        self.constructors.insert(name.to_string(), constructor);
    }

    /// Instantiates the problem registered under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if the name is not registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn Problem>> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| Error::Configuration(format!("unknown problem: {name}")))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
