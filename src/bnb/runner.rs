//! Branch-and-bound search.
//!
//! # Algorithm
//!
//! 1. At the root, `remaining_value` is the total value of all items and
//!    `best_value` is zero.
//! 2. At each node:
//!    a. If every item is decided, capture a snapshot of the selection.
//!    b. If `current_value + remaining_value <= best_value`, prune.
//!    c. Explore "include" when the item fits, raising `best_value` if the
//!       branch improves on it.
//!    d. Explore "exclude" under the (possibly raised) `best_value`.
//! 3. Return the better branch; include wins ties.

use super::types::SearchState;
use crate::engine::{finish, pick, private_copy, Candidate, KnapsackResult};
use crate::error::Result;
use crate::items::ItemSet;

/// Executes branch-and-bound search.
pub struct BnbRunner;

impl BnbRunner {
    /// Finds an optimal selection of `items` within `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::bnb::BnbRunner;
    /// use u_knapsack::items::ItemSet;
    ///
    /// let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
    /// let result = BnbRunner::run(&items, 10).unwrap();
    /// assert_eq!(result.value, 16);
    /// assert!(result.calls < 15);
    /// ```
    pub fn run(items: &ItemSet, capacity: i64) -> Result<KnapsackResult> {
        let mut items = private_copy(items, capacity)?;
        tracing::debug!(num_items = items.len(), capacity, "branch-and-bound started");

        let root = SearchState::root(&items);
        let (best, calls) = search(&mut items, capacity, root);
        let result = finish(best, calls, "branch-and-bound")?;

        tracing::debug!(value = result.value, calls, "branch-and-bound finished");
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

    // An item that does not fit still counts as one rejected child.
    let (with_item, with_calls) = if state.current_weight + weight <= capacity {
        items[index].is_selected = true;
        let (found, calls) = search(items, capacity, state.include(value, weight));
        if let Some(candidate) = &found {
            state.best_value = state.best_value.max(candidate.value);
        }
        (found, calls)
    } else {
        (None, 1)
    };

    items[index].is_selected = false;
    let (without_item, without_calls) = search(items, capacity, state.exclude(value));

    (pick(with_item, without_item), with_calls + without_calls + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExhaustiveRunner;

    #[test]
    fn test_three_item_scenarios() {
        let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);

        let full = BnbRunner::run(&items, 10).unwrap();
        assert_eq!((full.value, full.calls), (16, 7));
        assert_eq!(full.selected_ids(), vec![0, 1]);

        let tight = BnbRunner::run(&items, 9).unwrap();
        assert_eq!((tight.value, tight.calls), (12, 11));
        assert_eq!(tight.selected_ids(), vec![1, 2]);
        assert_eq!(tight.selected_weight(), 8);
    }

    #[test]
    fn test_zero_capacity() {
        let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
        let result = BnbRunner::run(&items, 0).unwrap();
        assert_eq!(result.value, 0);
        assert_eq!(result.calls, 7);
        assert!(result.selected_ids().is_empty());
    }

    #[test]
    fn test_single_item_too_heavy() {
        let items = ItemSet::from_pairs(&[(5, 20)]);
        let result = BnbRunner::run(&items, 10).unwrap();
        assert_eq!(result.value, 0);
        assert!(result.selected_ids().is_empty());
    }

    #[test]
    fn test_prunes_relative_to_exhaustive() {
        let items = ItemSet::from_pairs(&[(4, 5), (3, 4), (5, 6), (2, 3), (6, 7), (3, 3), (4, 4)]);
        let bnb = BnbRunner::run(&items, 11).unwrap();
        let exhaustive = ExhaustiveRunner::run(&items, 11).unwrap();

        assert_eq!(bnb.value, 10);
        assert_eq!(bnb.value, exhaustive.value);
        assert_eq!(bnb.calls, 101);
        assert_eq!(exhaustive.calls, 255);
    }

    #[test]
    fn test_value_matches_selection() {
        let items = ItemSet::from_pairs(&[(4, 5), (3, 4), (5, 6), (2, 3), (6, 7), (3, 3), (4, 4)]);
        let result = BnbRunner::run(&items, 16).unwrap();
        assert_eq!(result.value, 14);
        assert_eq!(result.solution.selected_value(), result.value);
        assert!(result.selected_weight() <= 16);
    }
}
