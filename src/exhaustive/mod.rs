//! Exhaustive search.
//!
//! Recursively decides each item in order, first including it and then
//! excluding it, and scores every one of the `2^n` complete selections.
//! No pruning is applied, which makes this engine the reference point for
//! the call counts of the pruned engines.

mod runner;

pub use runner::ExhaustiveRunner;
