//! Sums over an item set and the candidate-solution score.

use super::types::{Item, ItemSet};

/// Which items an aggregate covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every item in the set.
    All,
    /// Only items with `is_selected` set.
    Selected,
}

/// Which attribute an aggregate sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Value,
    Weight,
}

/// Sums `measure` over the items covered by `scope`.
pub fn total(items: &[Item], measure: Measure, scope: Scope) -> i64 {
    items
        .iter()
        .filter(|item| scope == Scope::All || item.is_selected)
        .map(|item| match measure {
            Measure::Value => item.value,
            Measure::Weight => item.weight,
        })
        .sum()
}

/// Scores the current selection against `capacity`.
///
/// Returns `None` when the selected weight exceeds the capacity. `None`
/// orders below every `Some`, so an over-capacity selection loses any
/// max-comparison against a feasible one, including the empty selection.
pub fn solution_value(items: &[Item], capacity: i64) -> Option<i64> {
    if total(items, Measure::Weight, Scope::Selected) > capacity {
        return None;
    }
    Some(total(items, Measure::Value, Scope::Selected))
}

impl ItemSet {
    pub fn total_value(&self) -> i64 {
        total(self.as_slice(), Measure::Value, Scope::All)
    }

    pub fn total_weight(&self) -> i64 {
        total(self.as_slice(), Measure::Weight, Scope::All)
    }

    pub fn selected_value(&self) -> i64 {
        total(self.as_slice(), Measure::Value, Scope::Selected)
    }

    pub fn selected_weight(&self) -> i64 {
        total(self.as_slice(), Measure::Weight, Scope::Selected)
    }

    /// See [`solution_value`].
    pub fn solution_value(&self, capacity: i64) -> Option<i64> {
        solution_value(self.as_slice(), capacity)
    }
}
