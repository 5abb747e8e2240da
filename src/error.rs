//! Error type shared by every engine.

use thiserror::Error;

/// Failures an engine run can report.
///
/// All of them are fatal to the run that raised them. The computations are
/// deterministic, so retrying with the same input reproduces the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// The item set or capacity violates the engine preconditions.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A generator or comparison configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An engine reached a state its own bookkeeping should rule out.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
