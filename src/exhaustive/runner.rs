//! Exhaustive enumeration.

use crate::engine::{private_copy, KnapsackResult};
use crate::error::{KnapsackError, Result};
use crate::items::ItemSet;

/// Best leaf found below a node.
struct Leaf {
    snapshot: ItemSet,
    /// `None` for an over-capacity selection.
    score: Option<i64>,
}

/// Executes exhaustive search.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Enumerates every subset of `items` and returns the best one.
    ///
    /// Makes exactly `2^(n+1) - 1` recursive calls for `n` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::exhaustive::ExhaustiveRunner;
    /// use u_knapsack::items::ItemSet;
    ///
    /// let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
    /// let result = ExhaustiveRunner::run(&items, 9).unwrap();
    /// assert_eq!(result.value, 12);
    /// assert_eq!(result.calls, 15);
    /// ```
    pub fn run(items: &ItemSet, capacity: i64) -> Result<KnapsackResult> {
        let mut items = private_copy(items, capacity)?;
        tracing::debug!(num_items = items.len(), capacity, "exhaustive search started");

        let (best, calls) = search(&mut items, capacity, 0);
        // The all-excluded leaf always fits, so the best score is never `None`.
        let value = best.score.ok_or_else(|| {
            KnapsackError::InternalInconsistency("exhaustive search found no feasible leaf".into())
        })?;

        tracing::debug!(value, calls, "exhaustive search finished");
        Ok(KnapsackResult {
            solution: best.snapshot,
            value,
            calls,
        })
    }
}

fn search(items: &mut ItemSet, capacity: i64, next: usize) -> (Leaf, u64) {
    if next >= items.len() {
        let leaf = Leaf {
            score: items.solution_value(capacity),
            snapshot: items.clone(),
        };
        return (leaf, 1);
    }

    items[next].is_selected = true;
    let (with_item, with_calls) = search(items, capacity, next + 1);

    items[next].is_selected = false;
    let (without_item, without_calls) = search(items, capacity, next + 1);

    let best = if without_item.score > with_item.score {
        without_item
    } else {
        with_item
    };
    (best, with_calls + without_calls + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_count_is_full_tree() {
        for n in 1..=8usize {
            let pairs: Vec<(i64, i64)> = (0..n).map(|i| (i as i64 + 1, 2)).collect();
            let items = ItemSet::from_pairs(&pairs);
            let result = ExhaustiveRunner::run(&items, 5).unwrap();
            assert_eq!(result.calls, (1u64 << (n + 1)) - 1, "n = {n}");
        }
    }

    #[test]
    fn test_finds_optimum() {
        let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
        let result = ExhaustiveRunner::run(&items, 10).unwrap();
        assert_eq!(result.value, 16);
        assert_eq!(result.selected_ids(), vec![0, 1]);
        assert_eq!(result.selected_weight(), 10);
    }

    #[test]
    fn test_single_item_too_heavy() {
        let items = ItemSet::from_pairs(&[(5, 20)]);
        let result = ExhaustiveRunner::run(&items, 10).unwrap();
        assert_eq!(result.value, 0);
        assert!(result.selected_ids().is_empty());
        assert_eq!(result.calls, 3);
    }

    #[test]
    fn test_tie_prefers_include() {
        // Both items are worth 5; taking the first is explored first.
        let items = ItemSet::from_pairs(&[(5, 3), (5, 3)]);
        let result = ExhaustiveRunner::run(&items, 3).unwrap();
        assert_eq!(result.value, 5);
        assert_eq!(result.selected_ids(), vec![0]);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let items = ItemSet::from_pairs(&[(3, 2), (4, 3)]);
        let before = items.clone();
        ExhaustiveRunner::run(&items, 5).unwrap();
        assert_eq!(items, before);
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(ExhaustiveRunner::run(&ItemSet::default(), 5).is_err());
        assert!(ExhaustiveRunner::run(&ItemSet::from_pairs(&[(1, 1)]), -2).is_err());
    }
}
