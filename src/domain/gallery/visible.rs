// SPDX-License-Identifier: MPL-2.0
//! Ordered subset of items passing the active filter.

use super::filter::CategoryFilter;
use super::item::{Item, ItemIndex};

/// Indices of the items matching a filter, in original item order.
///
/// A visible set is always rebuilt from the full item list; it is never
/// edited in place, so it stays a subsequence of the items it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleSet(Vec<ItemIndex>);

impl VisibleSet {
    /// Computes the visible set of `items` under `filter`.
    #[must_use]
    pub fn compute(items: &[Item], filter: &CategoryFilter) -> Self {
        Self(
            items
                .iter()
                .filter(|item| filter.matches(item))
                .map(Item::index)
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ItemIndex] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemIndex> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.0.contains(&index)
    }

    /// Position of `index` inside the set, if it is a member.
    #[must_use]
    pub fn position_of(&self, index: ItemIndex) -> Option<usize> {
        self.0.iter().position(|&candidate| candidate == index)
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<ItemIndex> {
        self.0.get(position).copied()
    }

    /// Position reached by moving `offset` steps from `from`, wrapping in
    /// both directions.
    ///
    /// `from = None` stands for a current item outside the set; it is placed
    /// just before the first position, so an offset of `1` lands on position
    /// `0`. Returns `None` when the set is empty.
    #[must_use]
    pub fn wrapped_position(&self, from: Option<usize>, offset: i64) -> Option<usize> {
        if self.0.is_empty() {
            return None;
        }
        let len = i64::try_from(self.0.len()).ok()?;
        let base = from.and_then(|pos| i64::try_from(pos).ok()).unwrap_or(-1);
        // Reduce both terms first so the sum cannot overflow.
        let target = (base.rem_euclid(len) + offset.rem_euclid(len)).rem_euclid(len);
        usize::try_from(target).ok()
    }

    /// Previous, current and next indices around `position`, cyclically.
    ///
    /// Duplicates are dropped for sets shorter than three, keeping order.
    #[must_use]
    pub fn neighbors(&self, position: usize) -> Vec<ItemIndex> {
        let mut out = Vec::with_capacity(3);
        for offset in [-1, 0, 1] {
            if let Some(index) = self
                .wrapped_position(Some(position), offset)
                .and_then(|pos| self.get(pos))
            {
                if !out.contains(&index) {
                    out.push(index);
                }
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a VisibleSet {
    type Item = &'a ItemIndex;
    type IntoIter = std::slice::Iter<'a, ItemIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(categories: &[&str]) -> Vec<Item> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| Item::new(ItemIndex::new(i as u32), (*c).into(), "x".into()))
            .collect()
    }

    fn indices(set: &VisibleSet) -> Vec<u32> {
        set.iter().map(ItemIndex::value).collect()
    }

    #[test]
    fn compute_all_keeps_original_order() {
        let set = VisibleSet::compute(&items(&["a", "b", "a"]), &CategoryFilter::All);
        assert_eq!(indices(&set), vec![0, 1, 2]);
    }

    #[test]
    fn compute_category_is_subsequence() {
        let set = VisibleSet::compute(
            &items(&["a", "b", "a", "c", "a"]),
            &CategoryFilter::from_token("a"),
        );
        assert_eq!(indices(&set), vec![0, 2, 4]);
    }

    #[test]
    fn compute_unknown_category_is_empty() {
        let set = VisibleSet::compute(&items(&["a", "b"]), &CategoryFilter::from_token("z"));
        assert!(set.is_empty());
        assert_eq!(set.wrapped_position(Some(0), 1), None);
    }

    #[test]
    fn wrapped_position_wraps_both_directions() {
        let set = VisibleSet::compute(&items(&["a", "a", "a"]), &CategoryFilter::All);
        assert_eq!(set.wrapped_position(Some(2), 1), Some(0));
        assert_eq!(set.wrapped_position(Some(0), -1), Some(2));
        assert_eq!(set.wrapped_position(Some(1), 7), Some(2));
        assert_eq!(set.wrapped_position(Some(1), -7), Some(0));
    }

    #[test]
    fn wrapped_position_survives_extreme_offsets() {
        let set = VisibleSet::compute(&items(&["a", "a", "a"]), &CategoryFilter::All);
        assert!(set.wrapped_position(Some(2), i64::MAX).is_some());
        assert!(set.wrapped_position(Some(0), i64::MIN).is_some());
    }

    #[test]
    fn wrapped_position_places_non_member_before_first() {
        let set = VisibleSet::compute(&items(&["a", "a", "a", "a"]), &CategoryFilter::All);
        assert_eq!(set.wrapped_position(None, 1), Some(0));
        assert_eq!(set.wrapped_position(None, 2), Some(1));
        assert_eq!(set.wrapped_position(None, -1), Some(2));
    }

    #[test]
    fn neighbors_are_cyclic() {
        let set = VisibleSet::compute(&items(&["a", "a", "a", "a"]), &CategoryFilter::All);
        let n: Vec<u32> = set.neighbors(0).into_iter().map(ItemIndex::value).collect();
        assert_eq!(n, vec![3, 0, 1]);
    }

    #[test]
    fn neighbors_collapse_duplicates_in_small_sets() {
        let one = VisibleSet::compute(&items(&["a"]), &CategoryFilter::All);
        assert_eq!(one.neighbors(0), vec![ItemIndex::new(0)]);

        let two = VisibleSet::compute(&items(&["a", "a"]), &CategoryFilter::All);
        assert_eq!(two.neighbors(0), vec![ItemIndex::new(1), ItemIndex::new(0)]);
    }

    #[test]
    fn position_lookup_uses_item_space() {
        let set = VisibleSet::compute(&items(&["a", "b", "a"]), &CategoryFilter::from_token("a"));
        assert_eq!(set.position_of(ItemIndex::new(2)), Some(1));
        assert_eq!(set.position_of(ItemIndex::new(1)), None);
        assert!(!set.contains(ItemIndex::new(1)));
    }
}
