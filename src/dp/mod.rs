//! Dynamic programming.
//!
//! Fills a table of best values over (item, weight budget) pairs, row by
//! row, and recovers the selection from a parallel back-pointer table.
//! Cost is pseudo-polynomial, `O(n * capacity)`, and does not depend on
//! item order.
//!
//! # References
//!
//! - Bellman (1957), *Dynamic Programming*

mod runner;
mod table;

pub use runner::DpRunner;
pub use table::DpTable;
