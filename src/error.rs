//! Error taxonomy for the optimization core.
//!
//! Every failure aborts the current run and is surfaced verbatim to the
//! caller; nothing is retried. The four variants partition failures by
//! who is at fault:
//!
//! - [`Error::Configuration`]: invalid parameters, caught before any
//!   algorithm instance becomes runnable
//! - [`Error::Evaluation`]: the external problem plug-in failed
//! - [`Error::Operator`]: a genetic operator received malformed input
//! - [`Error::InvalidState`]: an internal contract was broken (e.g. an
//!   unevaluated solution reached a dominance comparison)

/// Errors produced by the optimization core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration, detected at construction. Fatal, never retried.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Problem evaluation failed. Aborts the run and carries the problem's
    /// own error as the source.
    #[error("problem evaluation failed: {0}")]
    Evaluation(#[from] anyhow::Error),

    /// A genetic operator was given malformed input (e.g. parents with
    /// mismatched variable counts).
    #[error("operator failure: {0}")]
    Operator(String),

    /// A solution reached a component in a state that component cannot
    /// accept. Indicates a bug in the calling code, not bad user input.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
