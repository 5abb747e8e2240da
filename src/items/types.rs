//! Item and item-set data model.

use std::ops::{Index, IndexMut};

/// A single knapsack item.
///
/// `id` is the item's position in its set. It only changes when an engine
/// deliberately permutes its private copy (see the sorted blocking engine).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Position of the item in its set.
    pub id: usize,

    /// Value gained by packing the item. Positive.
    pub value: i64,

    /// Weight consumed by packing the item. Positive.
    pub weight: i64,

    /// Whether the item is part of the current (candidate) solution.
    pub is_selected: bool,

    /// Id of the excluded item currently suppressing this one, if any.
    ///
    /// Only the blocking engines touch this field.
    pub blocked_by: Option<usize>,

    /// Ids of the items this one dominates: no lighter and no more
    /// valuable than this item. Never contains the item's own id.
    pub block_list: Vec<usize>,
}

impl Item {
    /// Creates an unselected, unblocked item.
    pub fn new(id: usize, value: i64, weight: i64) -> Self {
        Self {
            id,
            value,
            weight,
            is_selected: false,
            blocked_by: None,
            block_list: Vec::new(),
        }
    }

    /// Returns `true` if this item dominates `other`.
    ///
    /// Identity is not checked here; callers skip the item itself.
    pub fn dominates(&self, other: &Item) -> bool {
        self.weight <= other.weight && self.value >= other.value
    }
}

/// An ordered collection of items.
///
/// Cloning an `ItemSet` is a deep copy. Engines clone their input before
/// mutating it, and every captured solution is its own clone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Wraps an existing vector of items as-is.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Builds a set from `(value, weight)` pairs, assigning ids `0..n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::items::ItemSet;
    ///
    /// let items = ItemSet::from_pairs(&[(10, 6), (6, 4)]);
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items[1].id, 1);
    /// ```
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(id, &(value, weight))| Item::new(id, value, weight))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Item> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Ids of the selected items, in set order.
    pub fn selected_ids(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter(|item| item.is_selected)
            .map(|item| item.id)
            .collect()
    }

    /// Deselects every item.
    pub fn clear_selection(&mut self) {
        for item in &mut self.items {
            item.is_selected = false;
        }
    }

    /// Drops all domination metadata (`blocked_by` and `block_list`).
    pub fn clear_domination(&mut self) {
        for item in &mut self.items {
            item.blocked_by = None;
            item.block_list.clear();
        }
    }

    /// Clears selection and domination state, leaving only values and weights.
    pub(crate) fn reset_search_state(&mut self) {
        for item in &mut self.items {
            item.is_selected = false;
            item.blocked_by = None;
            item.block_list.clear();
        }
    }

    pub fn into_inner(self) -> Vec<Item> {
        self.items
    }
}

impl Index<usize> for ItemSet {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

impl IndexMut<usize> for ItemSet {
    fn index_mut(&mut self, index: usize) -> &mut Item {
        &mut self.items[index]
    }
}

impl From<Vec<Item>> for ItemSet {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
