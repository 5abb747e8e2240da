//! Per-node state threaded through the pruned searches.

use crate::items::ItemSet;

/// Bookkeeping for one node of a branch-and-bound tree.
///
/// Passed by value: each child gets its own copy, so nothing needs to be
/// restored on the way back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchState {
    /// Index of the next item to decide.
    pub next: usize,
    /// Best value found so far in any explored branch.
    pub best_value: i64,
    /// Value committed by the items included on this path.
    pub current_value: i64,
    /// Weight committed by the items included on this path.
    pub current_weight: i64,
    /// Sum of the values of the items not yet decided.
    pub remaining_value: i64,
}

impl SearchState {
    /// State at the root: nothing decided, nothing found yet.
    pub fn root(items: &ItemSet) -> Self {
        Self {
            next: 0,
            best_value: 0,
            current_value: 0,
            current_weight: 0,
            remaining_value: items.total_value(),
        }
    }

    /// No completion of this path can beat `best_value`.
    pub fn is_bounded_out(&self) -> bool {
        self.current_value + self.remaining_value <= self.best_value
    }

    /// Child state after packing an item of the given value and weight.
    pub fn include(&self, value: i64, weight: i64) -> Self {
        Self {
            next: self.next + 1,
            current_value: self.current_value + value,
            current_weight: self.current_weight + weight,
            remaining_value: self.remaining_value - value,
            ..*self
        }
    }

    /// Child state after leaving out an item of the given value.
    pub fn exclude(&self, value: i64) -> Self {
        Self {
            next: self.next + 1,
            remaining_value: self.remaining_value - value,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_state() {
        let items = ItemSet::from_pairs(&[(3, 1), (4, 2)]);
        let root = SearchState::root(&items);
        assert_eq!(root.remaining_value, 7);
        assert_eq!(root.best_value, 0);
        assert!(!root.is_bounded_out());
    }

    #[test]
    fn test_children_move_remaining_value() {
        let items = ItemSet::from_pairs(&[(3, 1), (4, 2)]);
        let root = SearchState::root(&items);

        let with = root.include(3, 1);
        assert_eq!((with.next, with.current_value, with.current_weight), (1, 3, 1));
        assert_eq!(with.remaining_value, 4);

        let without = root.exclude(3);
        assert_eq!((without.next, without.current_value), (1, 0));
        assert_eq!(without.remaining_value, 4);
    }

    #[test]
    fn test_bound_is_inclusive() {
        let state = SearchState {
            next: 1,
            best_value: 7,
            current_value: 3,
            current_weight: 1,
            remaining_value: 4,
        };
        assert!(state.is_bounded_out());
        assert!(!SearchState { best_value: 6, ..state }.is_bounded_out());
    }
}
