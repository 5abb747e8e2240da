//! Bottom-up tabulation and reconstruction.

use super::table::DpTable;
use crate::engine::{private_copy, validate_input, KnapsackResult};
use crate::error::{KnapsackError, Result};
use crate::items::ItemSet;

/// Executes the dynamic-programming engine.
pub struct DpRunner;

impl DpRunner {
    /// Solves the instance by tabulation. Always reports a single call.
    ///
    /// Time and memory are `O(n * (capacity + 1))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::dp::DpRunner;
    /// use u_knapsack::items::ItemSet;
    ///
    /// let items = ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)]);
    /// let result = DpRunner::run(&items, 9).unwrap();
    /// assert_eq!(result.value, 12);
    /// assert_eq!(result.selected_ids(), vec![1, 2]);
    /// ```
    pub fn run(items: &ItemSet, capacity: i64) -> Result<KnapsackResult> {
        let mut items = private_copy(items, capacity)?;
        tracing::debug!(num_items = items.len(), capacity, "dynamic programming started");

        let table = build(&items, capacity)?;
        reconstruct(&table, &mut items)?;

        let value = items.selected_value();
        if value != table.optimum() {
            return Err(KnapsackError::InternalInconsistency(format!(
                "reconstructed value {value} differs from tabulated optimum {}",
                table.optimum()
            )));
        }

        tracing::debug!(value, calls = 1, "dynamic programming finished");
        Ok(KnapsackResult {
            solution: items,
            value,
            calls: 1,
        })
    }

    /// Builds the value and back-pointer tables without reconstructing.
    pub fn tabulate(items: &ItemSet, capacity: i64) -> Result<DpTable> {
        validate_input(items, capacity)?;
        build(items, capacity)
    }
}

fn build(items: &ItemSet, capacity: i64) -> Result<DpTable> {
    let cols = usize::try_from(capacity)
        .ok()
        .and_then(|c| c.checked_add(1))
        .ok_or_else(|| KnapsackError::InvalidInput(format!("capacity {capacity} is too large")))?;
    let rows = items.len();
    tracing::trace!(rows, cols, "allocating dp table");

    let mut table = DpTable::try_new(rows, cols)?;

    let first = &items[0];
    for w in 0..cols {
        match fitting_remainder(first.weight, w) {
            Some(rest) => table.set(0, w, first.value, rest),
            None => table.set(0, w, 0, w),
        }
    }

    for (i, item) in items.iter().enumerate().skip(1) {
        for w in 0..cols {
            let without_item = cell_value(&table, i - 1, w)?;
            let with_item = match fitting_remainder(item.weight, w) {
                Some(rest) => Some((cell_value(&table, i - 1, rest)? + item.value, rest)),
                None => None,
            };

            match with_item {
                Some((value, rest)) if value >= without_item => table.set(i, w, value, rest),
                _ => table.set(i, w, without_item, w),
            }
        }
    }

    Ok(table)
}

fn cell_value(table: &DpTable, row: usize, w: usize) -> Result<i64> {
    table.value(row, w).ok_or_else(|| {
        KnapsackError::InternalInconsistency(format!("cell ({row}, {w}) is outside the table"))
    })
}

/// Budget left after packing an item of `weight` into budget `w`, if it fits.
fn fitting_remainder(weight: i64, w: usize) -> Option<usize> {
    let weight = usize::try_from(weight).ok()?;
    w.checked_sub(weight)
}

/// Marks the selected items by walking back-pointers from the last row.
fn reconstruct(table: &DpTable, items: &mut ItemSet) -> Result<()> {
    items.clear_selection();

    let mut w = table.cols() - 1;
    for i in (0..table.rows()).rev() {
        let prev = table.back_pointer(i, w).unwrap_or(usize::MAX);
        if prev > w {
            return Err(KnapsackError::InternalInconsistency(format!(
                "back-pointer at row {i} points to weight {prev} above {w}"
            )));
        }
        if prev != w {
            items[i].is_selected = true;
            w = prev;
        }
    }
    Ok(())
}
