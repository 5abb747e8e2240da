//! Domination lists, scoped blocking and dominance reordering.

use std::cmp::Reverse;
use std::ops::{Deref, DerefMut};

use crate::items::ItemSet;

/// Rebuilds every item's `block_list` from scratch.
///
/// Item `a` lists item `b` when `a` is no heavier and no less valuable
/// than `b`. Lists hold ids, so ids must equal positions.
pub(crate) fn build_block_lists(items: &mut ItemSet) {
    let lists: Vec<Vec<usize>> = items
        .iter()
        .enumerate()
        .map(|(i, a)| {
            items
                .iter()
                .enumerate()
                .filter(|&(j, b)| i != j && a.dominates(b))
                .map(|(_, b)| b.id)
                .collect()
        })
        .collect();

    let relations: usize = lists.iter().map(Vec::len).sum();
    for (item, list) in items.iter_mut().zip(lists) {
        item.block_list = list;
    }
    tracing::trace!(num_items = items.len(), relations, "built domination lists");
}

/// Sorts items by descending `block_list` length, renumbers them and
/// rebuilds the lists against the new ids.
///
/// The sort is stable: items with equally long lists keep their relative
/// order. Returns the original id of the item now at each position.
pub(crate) fn reorder_by_dominance(items: &mut ItemSet) -> Vec<usize> {
    build_block_lists(items);

    let mut ordered = std::mem::take(items).into_inner();
    ordered.sort_by_key(|item| Reverse(item.block_list.len()));

    let original_ids = ordered.iter().map(|item| item.id).collect();
    for (position, item) in ordered.iter_mut().enumerate() {
        item.id = position;
    }

    // The old lists refer to pre-sort ids.
    *items = ItemSet::new(ordered);
    build_block_lists(items);
    original_ids
}

/// Undoes [`reorder_by_dominance`] on a solution snapshot.
pub(crate) fn restore_order(solution: ItemSet, original_ids: &[usize]) -> ItemSet {
    let mut restored = solution.into_inner();
    for (item, &original) in restored.iter_mut().zip(original_ids) {
        item.id = original;
    }
    restored.sort_by_key(|item| item.id);
    ItemSet::new(restored)
}

/// Blocks the items dominated by `source` for as long as the guard lives.
///
/// On creation, every item in `source`'s block list that is not already
/// blocked gets `blocked_by = Some(source)`. On drop, exactly those items
/// are released again; blocks placed by other items stay in place. The
/// guard dereferences to the item set so the search can recurse through it.
pub(crate) struct BlockGuard<'a> {
    items: &'a mut ItemSet,
    source: usize,
}

impl<'a> BlockGuard<'a> {
    pub fn new(items: &'a mut ItemSet, source: usize) -> Self {
        let targets = std::mem::take(&mut items[source].block_list);
        for &target in &targets {
            if items[target].blocked_by.is_none() {
                items[target].blocked_by = Some(source);
            }
        }
        items[source].block_list = targets;
        Self { items, source }
    }
}

impl Deref for BlockGuard<'_> {
    type Target = ItemSet;

    fn deref(&self) -> &ItemSet {
        &*self.items
    }
}

impl DerefMut for BlockGuard<'_> {
    fn deref_mut(&mut self) -> &mut ItemSet {
        &mut *self.items
    }
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        let source = self.source;
        let targets = std::mem::take(&mut self.items[source].block_list);
        for &target in &targets {
            if self.items[target].blocked_by == Some(source) {
                self.items[target].blocked_by = None;
            }
        }
        self.items[source].block_list = targets;
    }
}
