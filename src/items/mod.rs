//! Item set model.
//!
//! The data every engine consumes: [`Item`] and [`ItemSet`], aggregate sums
//! over a set, the candidate-solution score, and a seeded generator for
//! reproducible random instances.

mod aggregate;
mod generator;
mod types;

pub use aggregate::{solution_value, total, Measure, Scope};
pub use generator::{default_capacity, generate, ItemGenConfig};
pub use types::{Item, ItemSet};
