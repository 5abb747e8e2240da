//! Seeded random item-set generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Item, ItemSet};
use crate::error::{KnapsackError, Result};

/// Parameters for [`generate`].
///
/// Values and weights are drawn uniformly from the inclusive ranges
/// `min_value..=max_value` and `min_weight..=max_weight`.
///
/// # Examples
///
/// ```
/// use u_knapsack::items::{generate, ItemGenConfig};
///
/// let config = ItemGenConfig::default()
///     .with_num_items(20)
///     .with_value_range(1, 10)
///     .with_weight_range(4, 10)
///     .with_seed(7);
/// let items = generate(&config).unwrap();
/// assert_eq!(items.len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGenConfig {
    /// Number of items to create.
    pub num_items: usize,

    /// Smallest value an item can have. Must be positive.
    pub min_value: i64,

    /// Largest value an item can have.
    pub max_value: i64,

    /// Smallest weight an item can have. Must be positive.
    pub min_weight: i64,

    /// Largest weight an item can have.
    pub max_weight: i64,

    /// Seed for the pseudo-random generator.
    pub seed: u64,
}

impl Default for ItemGenConfig {
    fn default() -> Self {
        Self {
            num_items: 40,
            min_value: 1,
            max_value: 10,
            min_weight: 4,
            max_weight: 10,
            seed: 1337,
        }
    }
}

impl ItemGenConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_weight_range(mut self, min: i64, max: i64) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_items == 0 {
            return Err(KnapsackError::InvalidConfig(
                "num_items must be at least 1".into(),
            ));
        }
        if self.min_value <= 0 || self.min_weight <= 0 {
            return Err(KnapsackError::InvalidConfig(format!(
                "minimum value and weight must be positive, got {} and {}",
                self.min_value, self.min_weight
            )));
        }
        if self.min_value > self.max_value {
            return Err(KnapsackError::InvalidConfig(format!(
                "value range is empty: {}..={}",
                self.min_value, self.max_value
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(KnapsackError::InvalidConfig(format!(
                "weight range is empty: {}..={}",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

/// Generates an item set from `config`.
///
/// The output depends only on the config: equal configs give equal sets.
pub fn generate(config: &ItemGenConfig) -> Result<ItemSet> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let items = (0..config.num_items)
        .map(|id| {
            let value = rng.random_range(config.min_value..=config.max_value);
            let weight = rng.random_range(config.min_weight..=config.max_weight);
            Item::new(id, value, weight)
        })
        .collect::<Vec<_>>();

    tracing::trace!(num_items = items.len(), seed = config.seed, "generated item set");
    Ok(ItemSet::new(items))
}

/// Weight budget used when none is given: half the total weight, rounded down.
pub fn default_capacity(items: &ItemSet) -> i64 {
    items.total_weight() / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ItemGenConfig::default().validate().is_ok());
    }

    #[test]
    fn test_generate_respects_ranges() {
        let config = ItemGenConfig::default()
            .with_num_items(200)
            .with_value_range(3, 9)
            .with_weight_range(2, 5)
            .with_seed(99);
        let items = generate(&config).unwrap();

        assert_eq!(items.len(), 200);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id, i);
            assert!((3..=9).contains(&item.value), "value {}", item.value);
            assert!((2..=5).contains(&item.weight), "weight {}", item.weight);
            assert!(!item.is_selected);
            assert!(item.blocked_by.is_none());
        }
    }

    #[test]
    fn test_same_seed_same_items() {
        let config = ItemGenConfig::default().with_seed(42);
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn test_different_seed_different_items() {
        let a = generate(&ItemGenConfig::default().with_seed(1)).unwrap();
        let b = generate(&ItemGenConfig::default().with_seed(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let zero = ItemGenConfig::default().with_num_items(0);
        assert!(matches!(zero.validate(), Err(KnapsackError::InvalidConfig(_))));

        let negative = ItemGenConfig::default().with_value_range(0, 10);
        assert!(negative.validate().is_err());

        let inverted = ItemGenConfig::default().with_weight_range(8, 4);
        assert!(generate(&inverted).is_err());
    }

    #[test]
    fn test_default_capacity_is_half_total_weight() {
        let items = ItemSet::from_pairs(&[(1, 5), (1, 4), (1, 2)]);
        assert_eq!(default_capacity(&items), 5);
    }
}
