//! Branch-and-bound search.
//!
//! Depth-first include/exclude search that cuts a branch as soon as the
//! value already committed plus the value of every undecided item cannot
//! beat the best value found elsewhere. Returns the same optimal value as
//! exhaustive search while visiting a subset of its nodes.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"

mod runner;
pub(crate) mod types;

pub use runner::BnbRunner;
