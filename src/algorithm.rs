//! Strategy abstraction and timed execution.
//!
//! Every optimization strategy implements [`Algorithm`]: one `execute` call
//! runs it to completion and yields the non-dominated result set. Strategies
//! share the problem, dominance, and archive collaborators but no mutable
//! base state.
//!
//! [`AlgorithmRunner`] is the external entry point: it times an execution
//! and packages the archive with the elapsed wall time. On error nothing is
//! returned — no partial results.

use crate::archive::NonDominatedArchive;
use crate::error::Result;
use std::time::{Duration, Instant};

/// A multi-objective optimization strategy.
pub trait Algorithm {
    /// Runs the strategy to completion.
    ///
    /// Consumes the instance's evaluation budget; calling `execute` again
    /// starts a fresh run with a fresh archive.
    fn execute(&mut self) -> Result<NonDominatedArchive>;
}

/// Result of a timed algorithm execution.
#[derive(Debug)]
pub struct TimedRun {
    /// The non-dominated solutions found.
    pub archive: NonDominatedArchive,
    /// Wall-clock time spent inside `execute`.
    pub elapsed: Duration,
}

/// Times and invokes an [`Algorithm`].
pub struct AlgorithmRunner;

impl AlgorithmRunner {
    /// Executes `algorithm`, measuring wall-clock time.
    pub fn execute<A: Algorithm + ?Sized>(algorithm: &mut A) -> Result<TimedRun> {
        let start = Instant::now();
        let archive = algorithm.execute()?;
        let elapsed = start.elapsed();
        tracing::debug!(
            archive_size = archive.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "algorithm run complete"
        );
        Ok(TimedRun { archive, elapsed })
    }
}
