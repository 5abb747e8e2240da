//! Comparison configuration.

use crate::engine::Algorithm;
use crate::error::{KnapsackError, Result};

/// Which engines to compare and how many items each may be given.
///
/// The exponential engines become impractical quickly, so each one has an
/// item-count limit above which it is skipped rather than run.
///
/// # Examples
///
/// ```
/// use u_knapsack::compare::CompareConfig;
/// use u_knapsack::Algorithm;
///
/// let config = CompareConfig::default()
///     .with_algorithms(vec![Algorithm::BranchAndBound, Algorithm::DynamicProgramming])
///     .with_limit(Algorithm::BranchAndBound, Some(30));
/// assert_eq!(config.limit_for(Algorithm::BranchAndBound), Some(30));
/// assert_eq!(config.limit_for(Algorithm::DynamicProgramming), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    /// Engines to run, in reporting order.
    pub algorithms: Vec<Algorithm>,

    /// Largest item count for exhaustive search. `None` = no limit.
    pub exhaustive_limit: Option<usize>,

    /// Largest item count for branch-and-bound.
    pub branch_and_bound_limit: Option<usize>,

    /// Largest item count for the blocking engine.
    pub blocking_limit: Option<usize>,

    /// Largest item count for the sorted blocking engine.
    pub sorted_blocking_limit: Option<usize>,

    /// Largest item count for dynamic programming.
    pub dp_limit: Option<usize>,

    /// Run the engines concurrently. Needs the `parallel` feature;
    /// ignored otherwise.
    pub parallel: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            exhaustive_limit: Some(25),
            branch_and_bound_limit: Some(45),
            blocking_limit: Some(85),
            sorted_blocking_limit: Some(350),
            dp_limit: None,
            parallel: false,
        }
    }
}

impl CompareConfig {
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Sets the item-count limit of one engine.
    pub fn with_limit(mut self, algorithm: Algorithm, limit: Option<usize>) -> Self {
        match algorithm {
            Algorithm::Exhaustive => self.exhaustive_limit = limit,
            Algorithm::BranchAndBound => self.branch_and_bound_limit = limit,
            Algorithm::Blocking => self.blocking_limit = limit,
            Algorithm::SortedBlocking => self.sorted_blocking_limit = limit,
            Algorithm::DynamicProgramming => self.dp_limit = limit,
        }
        self
    }

    /// Removes every item-count limit.
    pub fn without_limits(self) -> Self {
        Algorithm::ALL
            .into_iter()
            .fold(self, |config, algorithm| config.with_limit(algorithm, None))
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn limit_for(&self, algorithm: Algorithm) -> Option<usize> {
        match algorithm {
            Algorithm::Exhaustive => self.exhaustive_limit,
            Algorithm::BranchAndBound => self.branch_and_bound_limit,
            Algorithm::Blocking => self.blocking_limit,
            Algorithm::SortedBlocking => self.sorted_blocking_limit,
            Algorithm::DynamicProgramming => self.dp_limit,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.algorithms.is_empty() {
            return Err(KnapsackError::InvalidConfig(
                "at least one algorithm must be selected".into(),
            ));
        }
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(algorithm) {
                return Err(KnapsackError::InvalidConfig(format!(
                    "algorithm '{algorithm}' is listed more than once"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = CompareConfig::default();
        assert_eq!(config.limit_for(Algorithm::Exhaustive), Some(25));
        assert_eq!(config.limit_for(Algorithm::BranchAndBound), Some(45));
        assert_eq!(config.limit_for(Algorithm::Blocking), Some(85));
        assert_eq!(config.limit_for(Algorithm::SortedBlocking), Some(350));
        assert_eq!(config.limit_for(Algorithm::DynamicProgramming), None);
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_without_limits() {
        let config = CompareConfig::default().without_limits();
        assert!(Algorithm::ALL.iter().all(|&a| config.limit_for(a).is_none()));
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicates() {
        let empty = CompareConfig::default().with_algorithms(vec![]);
        assert!(matches!(empty.validate(), Err(KnapsackError::InvalidConfig(_))));

        let duplicate = CompareConfig::default()
            .with_algorithms(vec![Algorithm::Blocking, Algorithm::Blocking]);
        assert!(duplicate.validate().is_err());
    }
}
