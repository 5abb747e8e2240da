//! Blocking engine configuration.

/// Order in which the blocking engine decides items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemOrder {
    /// Decide items in the order given by the caller.
    #[default]
    AsGiven,

    /// Decide items that dominate the most others first.
    ///
    /// Items are stably sorted by descending domination-list length, so
    /// items with equally long lists keep their original relative order.
    ByDominance,
}

/// Configuration for [`BlockingRunner`](super::BlockingRunner).
///
/// # Examples
///
/// ```
/// use u_knapsack::blocking::{BlockingConfig, ItemOrder};
///
/// let config = BlockingConfig::default().with_order(ItemOrder::ByDominance);
/// assert_eq!(config.order, ItemOrder::ByDominance);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockingConfig {
    /// Item decision order.
    pub order: ItemOrder,
}

impl BlockingConfig {
    pub fn with_order(mut self, order: ItemOrder) -> Self {
        self.order = order;
        self
    }
}
