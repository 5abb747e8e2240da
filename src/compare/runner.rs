//! Runs several engines on one instance.

use std::time::Instant;

use super::config::CompareConfig;
use super::report::{AlgorithmRun, CompareReport, RunOutcome};
use crate::engine::{validate_input, Algorithm};
use crate::error::Result;
use crate::items::ItemSet;

/// Executes a comparison.
pub struct CompareRunner;

impl CompareRunner {
    /// Runs every configured engine on its own copy of `items`.
    ///
    /// Engines whose item-count limit is exceeded are reported as skipped.
    /// The first engine error aborts the comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::compare::{CompareConfig, CompareRunner};
    /// use u_knapsack::items::{default_capacity, generate, ItemGenConfig};
    ///
    /// let items = generate(&ItemGenConfig::default().with_num_items(12)).unwrap();
    /// let capacity = default_capacity(&items);
    /// let report = CompareRunner::run(&items, capacity, &CompareConfig::default()).unwrap();
    /// assert!(report.agree());
    /// ```
    pub fn run(items: &ItemSet, capacity: i64, config: &CompareConfig) -> Result<CompareReport> {
        config.validate()?;
        validate_input(items, capacity)?;

        let runs = run_all(items, capacity, config)?;
        Ok(CompareReport {
            num_items: items.len(),
            total_value: items.total_value(),
            total_weight: items.total_weight(),
            capacity,
            runs,
        })
    }
}

#[cfg(feature = "parallel")]
fn run_all(items: &ItemSet, capacity: i64, config: &CompareConfig) -> Result<Vec<AlgorithmRun>> {
    use rayon::prelude::*;

    if config.parallel {
        config
            .algorithms
            .par_iter()
            .map(|&algorithm| run_one(algorithm, items, capacity, config))
            .collect()
    } else {
        run_sequential(items, capacity, config)
    }
}

#[cfg(not(feature = "parallel"))]
fn run_all(items: &ItemSet, capacity: i64, config: &CompareConfig) -> Result<Vec<AlgorithmRun>> {
    if config.parallel {
        tracing::warn!("parallel comparison requested without the `parallel` feature");
    }
    run_sequential(items, capacity, config)
}

fn run_sequential(
    items: &ItemSet,
    capacity: i64,
    config: &CompareConfig,
) -> Result<Vec<AlgorithmRun>> {
    config
        .algorithms
        .iter()
        .map(|&algorithm| run_one(algorithm, items, capacity, config))
        .collect()
}

fn run_one(
    algorithm: Algorithm,
    items: &ItemSet,
    capacity: i64,
    config: &CompareConfig,
) -> Result<AlgorithmRun> {
    if let Some(limit) = config.limit_for(algorithm) {
        if items.len() > limit {
            tracing::warn!(%algorithm, num_items = items.len(), limit, "too many items, skipping");
            return Ok(AlgorithmRun {
                algorithm,
                outcome: RunOutcome::Skipped { limit },
            });
        }
    }

    let start = Instant::now();
    let result = algorithm.solve(items, capacity)?;
    let elapsed = start.elapsed();

    tracing::info!(
        %algorithm,
        value = result.value,
        calls = result.calls,
        elapsed_s = elapsed.as_secs_f64(),
        "engine finished"
    );
    Ok(AlgorithmRun {
        algorithm,
        outcome: RunOutcome::Solved { result, elapsed },
    })
}
