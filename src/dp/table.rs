//! Value and back-pointer tables.

use crate::error::{KnapsackError, Result};

/// Tabulation over `rows` items and `cols = capacity + 1` weight budgets.
///
/// `value(i, w)` is the best value reachable with items `0..=i` within
/// budget `w`. `back_pointer(i, w)` is the budget to consult in row `i - 1`
/// when reconstructing: equal to `w` when item `i` is left out, smaller
/// otherwise. Row 0 uses the same convention, so a budget strictly below
/// `w` there means item 0 is packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    values: Vec<i64>,
    back: Vec<usize>,
}

impl DpTable {
    /// Allocates a zeroed `rows x cols` table.
    ///
    /// Fails with [`KnapsackError::InvalidInput`] when the table cannot be
    /// allocated.
    pub(crate) fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let too_large = || {
            KnapsackError::InvalidInput(format!(
                "table of {rows} x {cols} cells does not fit in memory"
            ))
        };
        let cells = rows.checked_mul(cols).ok_or_else(too_large)?;
        let values = zeroed(cells).ok_or_else(too_large)?;
        let back = zeroed(cells).ok_or_else(too_large)?;
        Ok(Self {
            rows,
            cols,
            values,
            back,
        })
    }

    /// Number of item rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of weight columns (`capacity + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Best value using items `0..=row` within budget `weight`, or `None`
    /// outside the table.
    pub fn value(&self, row: usize, weight: usize) -> Option<i64> {
        self.cell(row, weight).map(|cell| self.values[cell])
    }

    /// Budget to continue from in row `row - 1`, or `None` outside the table.
    pub fn back_pointer(&self, row: usize, weight: usize) -> Option<usize> {
        self.cell(row, weight).map(|cell| self.back[cell])
    }

    /// Best value for all items at full capacity.
    pub fn optimum(&self) -> i64 {
        match self.rows.checked_sub(1).zip(self.cols.checked_sub(1)) {
            Some((row, weight)) => self.value(row, weight).unwrap_or(0),
            None => 0,
        }
    }

    pub(crate) fn set(&mut self, row: usize, weight: usize, value: i64, back: usize) {
        if let Some(cell) = self.cell(row, weight) {
            self.values[cell] = value;
            self.back[cell] = back;
        }
    }

    fn cell(&self, row: usize, weight: usize) -> Option<usize> {
        (row < self.rows && weight < self.cols).then(|| row * self.cols + weight)
    }
}

fn zeroed<T: Clone + Default>(cells: usize) -> Option<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells).ok()?;
    buf.resize(cells, T::default());
    Some(buf)
}
