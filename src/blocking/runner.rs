//! Branch-and-bound with dominance blocking.
//!
//! # Algorithm
//!
//! Same node logic as plain branch-and-bound, with two changes:
//!
//! - "include" is only attempted when the item is not blocked.
//! - "exclude" blocks every item the excluded item dominates for the
//!   duration of the recursive call, and releases them afterwards.
//!
//! Once item `i` is left out, packing an item `i` dominates cannot beat
//! packing `i` itself, and that alternative was already explored in the
//! include branch of `i`.

use super::config::{BlockingConfig, ItemOrder};
use super::domination::{build_block_lists, reorder_by_dominance, restore_order, BlockGuard};
use crate::bnb::types::SearchState;
use crate::engine::{finish, pick, private_copy, Candidate, KnapsackResult};
use crate::error::Result;
use crate::items::ItemSet;

/// Executes the blocking engine.
pub struct BlockingRunner;

impl BlockingRunner {
    /// Runs the blocking engine with items decided in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::blocking::BlockingRunner;
    /// use u_knapsack::items::ItemSet;
    ///
    /// let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
    /// let result = BlockingRunner::run(&items, 10).unwrap();
    /// assert_eq!(result.value, 16);
    /// ```
    pub fn run(items: &ItemSet, capacity: i64) -> Result<KnapsackResult> {
        Self::run_with_config(items, capacity, &BlockingConfig::default())
    }

    /// Runs the blocking engine with items reordered by dominance count.
    pub fn run_sorted(items: &ItemSet, capacity: i64) -> Result<KnapsackResult> {
        let config = BlockingConfig::default().with_order(ItemOrder::ByDominance);
        Self::run_with_config(items, capacity, &config)
    }

    /// Runs the blocking engine with an explicit configuration.
    ///
    /// The returned solution always lists items in the caller's order and
    /// with the caller's ids, whatever order the search used.
    pub fn run_with_config(
        items: &ItemSet,
        capacity: i64,
        config: &BlockingConfig,
    ) -> Result<KnapsackResult> {
        let mut items = private_copy(items, capacity)?;
        tracing::debug!(
            num_items = items.len(),
            capacity,
            order = ?config.order,
            "blocking search started"
        );

        let original_ids = match config.order {
            ItemOrder::AsGiven => {
                build_block_lists(&mut items);
                None
            }
            ItemOrder::ByDominance => Some(reorder_by_dominance(&mut items)),
        };

        let root = SearchState::root(&items);
        let (best, calls) = search(&mut items, capacity, root);
        let mut result = finish(best, calls, "blocking search")?;

        if let Some(original_ids) = original_ids {
            result.solution = restore_order(result.solution, &original_ids);
        }

        tracing::debug!(value = result.value, calls, "blocking search finished");
        Ok(result)
    }
}

fn search(items: &mut ItemSet, capacity: i64, mut state: SearchState) -> (Option<Candidate>, u64) {
    if state.next >= items.len() {
        let leaf = Candidate {
            snapshot: items.clone(),
            value: state.current_value,
        };
        return (Some(leaf), 1);
    }

    if state.is_bounded_out() {
        return (None, 1);
    }

    let index = state.next;
    let (value, weight) = (items[index].value, items[index].weight);

    let can_include =
        items[index].blocked_by.is_none() && state.current_weight + weight <= capacity;
    let (with_item, with_calls) = if can_include {
        items[index].is_selected = true;
        let (found, calls) = search(items, capacity, state.include(value, weight));
        if let Some(candidate) = &found {
            state.best_value = state.best_value.max(candidate.value);
        }
        (found, calls)
    } else {
        (None, 0)
    };

    items[index].is_selected = false;
    let (without_item, without_calls) = {
        let mut guard = BlockGuard::new(items, index);
        search(&mut guard, capacity, state.exclude(value))
    };

    (pick(with_item, without_item), with_calls + without_calls + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::BnbRunner;

    fn seven_items() -> ItemSet {
        ItemSet::from_pairs(&[(4, 5), (3, 4), (5, 6), (2, 3), (6, 7), (3, 3), (4, 4)])
    }

    #[test]
    fn test_three_item_scenarios() {
        let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);

        let full = BlockingRunner::run(&items, 10).unwrap();
        assert_eq!((full.value, full.calls), (16, 6));
        assert_eq!(full.selected_ids(), vec![0, 1]);

        let tight = BlockingRunner::run(&items, 9).unwrap();
        assert_eq!((tight.value, tight.calls), (12, 9));
        assert_eq!(tight.selected_ids(), vec![1, 2]);

        let empty = BlockingRunner::run(&items, 0).unwrap();
        assert_eq!((empty.value, empty.calls), (0, 4));
    }

    #[test]
    fn test_sorted_three_item_scenarios() {
        let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);

        let full = BlockingRunner::run_sorted(&items, 10).unwrap();
        assert_eq!((full.value, full.calls), (16, 8));
        assert_eq!(full.selected_ids(), vec![0, 1]);

        let tight = BlockingRunner::run_sorted(&items, 9).unwrap();
        assert_eq!((tight.value, tight.calls), (12, 8));
        assert_eq!(tight.selected_ids(), vec![1, 2]);
    }

    #[test]
    fn test_fewer_calls_than_bnb() {
        let items = seven_items();
        for (capacity, expected_value, blocking_calls, sorted_calls) in
            [(11, 10, 71, 45), (16, 14, 95, 57)]
        {
            let bnb = BnbRunner::run(&items, capacity).unwrap();
            let blocking = BlockingRunner::run(&items, capacity).unwrap();
            let sorted = BlockingRunner::run_sorted(&items, capacity).unwrap();

            assert_eq!(blocking.value, expected_value);
            assert_eq!(sorted.value, expected_value);
            assert_eq!(blocking.calls, blocking_calls);
            assert_eq!(sorted.calls, sorted_calls);
            assert!(blocking.calls <= bnb.calls);
        }
    }

    #[test]
    fn test_solution_is_clean_and_in_caller_order() {
        let items = seven_items();
        let result = BlockingRunner::run_sorted(&items, 16).unwrap();

        for (position, item) in result.solution.iter().enumerate() {
            assert_eq!(item.id, position);
            assert_eq!((item.value, item.weight), (items[position].value, items[position].weight));
            assert!(item.blocked_by.is_none());
            assert!(item.block_list.is_empty());
        }
        assert_eq!(result.solution.selected_value(), result.value);
        assert!(result.selected_weight() <= 16);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let items = seven_items();
        let first = BlockingRunner::run(&items, 13).unwrap();
        let second = BlockingRunner::run(&items, 13).unwrap();
        assert_eq!(first, second);
    }
}
