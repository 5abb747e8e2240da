//! Comparison results and their text rendering.

use std::fmt;
use std::time::Duration;

use crate::engine::{Algorithm, KnapsackResult};
use crate::items::ItemSet;

/// Selected items printed per solution before the list is cut short.
const MAX_PRINTED_ITEMS: usize = 100;

/// What happened to one engine during a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome {
    /// The engine ran to completion.
    Solved {
        result: KnapsackResult,
        elapsed: Duration,
    },
    /// The item count exceeded the engine's limit.
    Skipped { limit: usize },
}

/// One engine's entry in a [`CompareReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub outcome: RunOutcome,
}

impl AlgorithmRun {
    /// The engine's result, if it ran.
    pub fn result(&self) -> Option<&KnapsackResult> {
        match &self.outcome {
            RunOutcome::Solved { result, .. } => Some(result),
            RunOutcome::Skipped { .. } => None,
        }
    }
}

/// Results of running several engines on the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareReport {
    pub num_items: usize,
    pub total_value: i64,
    pub total_weight: i64,
    pub capacity: i64,
    /// One entry per configured engine, in configuration order.
    pub runs: Vec<AlgorithmRun>,
}

impl CompareReport {
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }

    /// Optimal value reported by each engine that ran.
    pub fn best_values(&self) -> Vec<(Algorithm, i64)> {
        self.runs
            .iter()
            .filter_map(|run| run.result().map(|result| (run.algorithm, result.value)))
            .collect()
    }

    /// Whether every engine that ran reported the same value.
    pub fn agree(&self) -> bool {
        let values = self.best_values();
        values.windows(2).all(|pair| pair[0].1 == pair[1].1)
    }
}

impl fmt::Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** Parameters ***")?;
        writeln!(f, "# items: {}", self.num_items)?;
        writeln!(f, "Total value: {}", self.total_value)?;
        writeln!(f, "Total weight: {}", self.total_weight)?;
        writeln!(f, "Allowed weight: {}", self.capacity)?;

        for run in &self.runs {
            writeln!(f)?;
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AlgorithmRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            RunOutcome::Skipped { limit } => writeln!(
                f,
                "Too many items for {} (limit {limit})",
                self.algorithm
            ),
            RunOutcome::Solved { result, elapsed } => {
                writeln!(f, "*** {} ***", self.algorithm)?;
                writeln!(f, "Elapsed: {:.6}", elapsed.as_secs_f64())?;
                writeln!(f, "{}", SelectedItems(&result.solution))?;
                writeln!(
                    f,
                    "Value: {}, Weight: {}, Calls: {}",
                    result.value,
                    result.selected_weight(),
                    result.calls
                )
            }
        }
    }
}

/// Renders the selected items as `id(value, weight)` entries.
struct SelectedItems<'a>(&'a ItemSet);

impl fmt::Display for SelectedItems<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = self.0.iter().filter(|item| item.is_selected);
        for (printed, item) in selected.enumerate() {
            if printed == MAX_PRINTED_ITEMS {
                return f.write_str("...");
            }
            write!(f, "{}({}, {}) ", item.id, item.value, item.weight)?;
        }
        Ok(())
    }
}
