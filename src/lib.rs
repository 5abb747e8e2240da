//! Exact engines for the 0/1 knapsack problem.
//!
//! Given items with a value and a weight and a weight budget, every engine
//! selects a subset of maximum total value whose total weight fits the
//! budget. The engines embody different trade-offs:
//!
//! - **Exhaustive search**: enumerates all `2^n` subsets. The baseline.
//! - **Branch-and-bound (BnB)**: depth-first search that prunes branches
//!   whose optimistic value cannot beat the best found so far.
//! - **Blocking**: BnB plus a dominance relation that temporarily disables
//!   items dominated by an item the current branch leaves out. Optionally
//!   reorders items so the most dominant ones are decided first.
//! - **Dynamic programming (DP)**: pseudo-polynomial tabulation over items
//!   and weight budgets with back-pointer reconstruction.
//!
//! Every engine takes the item set by reference, works on a private copy
//! and returns a [`KnapsackResult`]: the solution snapshot, its value and
//! a call count for comparing engines on the same input. [`compare`] runs
//! several engines side by side.
//!
//! # Examples
//!
//! ```
//! use u_knapsack::items::ItemSet;
//! use u_knapsack::Algorithm;
//!
//! let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
//! let bnb = Algorithm::BranchAndBound.solve(&items, 10).unwrap();
//! let dp = Algorithm::DynamicProgramming.solve(&items, 10).unwrap();
//! assert_eq!(bnb.value, 16);
//! assert_eq!(bnb.value, dp.value);
//! ```

pub mod blocking;
pub mod bnb;
pub mod compare;
pub mod dp;
pub mod engine;
pub mod error;
pub mod exhaustive;
pub mod items;

pub use engine::{Algorithm, KnapsackResult};
pub use error::{KnapsackError, Result};
