//! Shared engine contract: input validation, result type and the
//! algorithm selector.

use std::fmt;
use std::str::FromStr;

use crate::blocking::BlockingRunner;
use crate::bnb::BnbRunner;
use crate::dp::DpRunner;
use crate::error::{KnapsackError, Result};
use crate::exhaustive::ExhaustiveRunner;
use crate::items::ItemSet;

/// Outcome of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    /// Snapshot of the item set with the chosen items selected.
    pub solution: ItemSet,

    /// Total value of the selected items.
    pub value: i64,

    /// Number of recursive invocations the engine made. Only meaningful
    /// when compared against another engine on the same input.
    pub calls: u64,
}

impl KnapsackResult {
    /// Total weight of the selected items.
    pub fn selected_weight(&self) -> i64 {
        self.solution.selected_weight()
    }

    /// Ids of the selected items, in set order.
    pub fn selected_ids(&self) -> Vec<usize> {
        self.solution.selected_ids()
    }
}

/// Checks the preconditions every engine shares.
pub(crate) fn validate_input(items: &ItemSet, capacity: i64) -> Result<()> {
    if items.is_empty() {
        return Err(KnapsackError::InvalidInput("item set is empty".into()));
    }
    if capacity < 0 {
        return Err(KnapsackError::InvalidInput(format!(
            "capacity must be non-negative, got {capacity}"
        )));
    }
    let mut total_value = 0i64;
    let mut total_weight = 0i64;
    for (position, item) in items.iter().enumerate() {
        if item.id != position {
            return Err(KnapsackError::InvalidInput(format!(
                "item at position {position} has id {}",
                item.id
            )));
        }
        if item.value <= 0 || item.weight <= 0 {
            return Err(KnapsackError::InvalidInput(format!(
                "item {position} must have positive value and weight, got ({}, {})",
                item.value, item.weight
            )));
        }
        // Every engine sums over the whole set.
        total_value = total_value.checked_add(item.value).ok_or_else(|| {
            KnapsackError::InvalidInput("total item value overflows i64".into())
        })?;
        total_weight = total_weight.checked_add(item.weight).ok_or_else(|| {
            KnapsackError::InvalidInput("total item weight overflows i64".into())
        })?;
    }
    Ok(())
}

/// Validates the input and returns a private, reset copy for an engine to mutate.
pub(crate) fn private_copy(items: &ItemSet, capacity: i64) -> Result<ItemSet> {
    validate_input(items, capacity)?;
    let mut copy = items.clone();
    copy.reset_search_state();
    Ok(copy)
}

/// A finished leaf of a pruned search: its snapshot and value.
#[derive(Debug)]
pub(crate) struct Candidate {
    pub snapshot: ItemSet,
    pub value: i64,
}

/// Picks between the include and exclude branches of a pruned search.
///
/// A branch without a candidate never wins. Between two candidates the
/// higher value wins, and include wins ties.
pub(crate) fn pick(include: Option<Candidate>, exclude: Option<Candidate>) -> Option<Candidate> {
    match (include, exclude) {
        (Some(inc), Some(exc)) => {
            if inc.value >= exc.value {
                Some(inc)
            } else {
                Some(exc)
            }
        }
        (Some(inc), None) => Some(inc),
        (None, exc) => exc,
    }
}

/// Turns the root of a pruned search into a result.
pub(crate) fn finish(root: Option<Candidate>, calls: u64, engine: &str) -> Result<KnapsackResult> {
    let Candidate {
        mut snapshot,
        value,
    } = root.ok_or_else(|| {
        KnapsackError::InternalInconsistency(format!("{engine} finished without a candidate"))
    })?;
    snapshot.clear_domination();
    Ok(KnapsackResult {
        solution: snapshot,
        value,
        calls,
    })
}

/// The available engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Enumerates all `2^n` subsets.
    Exhaustive,
    /// Depth-first search with an optimistic value bound.
    BranchAndBound,
    /// Branch-and-bound plus dominance blocking.
    Blocking,
    /// Dominance blocking over items reordered by dominance count.
    SortedBlocking,
    /// Bottom-up tabulation over items and weights.
    DynamicProgramming,
}

impl Algorithm {
    /// Every engine, in reporting order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Exhaustive,
        Algorithm::BranchAndBound,
        Algorithm::Blocking,
        Algorithm::SortedBlocking,
        Algorithm::DynamicProgramming,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::BranchAndBound => "branch-and-bound",
            Algorithm::Blocking => "blocking",
            Algorithm::SortedBlocking => "sorted-blocking",
            Algorithm::DynamicProgramming => "dynamic-programming",
        }
    }

    /// Runs this engine on a private copy of `items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{Algorithm, items::ItemSet};
    ///
    /// let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
    /// for algorithm in Algorithm::ALL {
    ///     assert_eq!(algorithm.solve(&items, 9).unwrap().value, 12);
    /// }
    /// ```
    pub fn solve(self, items: &ItemSet, capacity: i64) -> Result<KnapsackResult> {
        match self {
            Algorithm::Exhaustive => ExhaustiveRunner::run(items, capacity),
            Algorithm::BranchAndBound => BnbRunner::run(items, capacity),
            Algorithm::Blocking => BlockingRunner::run(items, capacity),
            Algorithm::SortedBlocking => BlockingRunner::run_sorted(items, capacity),
            Algorithm::DynamicProgramming => DpRunner::run(items, capacity),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = KnapsackError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "exhaustive" => Ok(Algorithm::Exhaustive),
            "branch-and-bound" | "bnb" => Ok(Algorithm::BranchAndBound),
            "blocking" => Ok(Algorithm::Blocking),
            "sorted-blocking" | "sorted" => Ok(Algorithm::SortedBlocking),
            "dynamic-programming" | "dp" => Ok(Algorithm::DynamicProgramming),
            _ => Err(KnapsackError::InvalidConfig(format!("unknown algorithm '{s}'"))),
        }
    }
}
