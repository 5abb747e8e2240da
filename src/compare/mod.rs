//! Side-by-side engine comparison.
//!
//! Feeds one instance to several engines, each on a private copy, records
//! their results and wall-clock time, and renders a plain-text report.

mod config;
mod report;
mod runner;

pub use config::CompareConfig;
pub use report::{AlgorithmRun, CompareReport, RunOutcome};
pub use runner::CompareRunner;
