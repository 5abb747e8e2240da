//! Dominance blocking.
//!
//! Item `a` dominates item `b` when `a` is no heavier and no less valuable
//! than `b`. Before searching, each item records the items it dominates.
//! While the search explores a branch that excludes `a`, every item `a`
//! dominates is blocked from inclusion: any selection that packs such an
//! item instead of `a` is no better than one that packs `a`.
//!
//! With [`ItemOrder::ByDominance`], items that dominate the most others
//! are decided first so blocking cuts larger subtrees early.

mod config;
mod domination;
mod runner;

pub use config::{BlockingConfig, ItemOrder};
pub use runner::BlockingRunner;
