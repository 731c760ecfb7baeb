//! In-place cleanup of vectors.

use std::collections::HashSet;
use std::hash::Hash;

use crate::dict::Upsert;

/// Helpers for vectors whose slots may be empty.
pub trait NullableExt<T> {
    /// Remove every `None` slot in a single pass, keeping the order of the rest.
    fn remove_null_entries(&mut self) -> &mut Self;

    /// Remove every `None` slot from `self`, then return a deduplicated copy
    /// of the remaining values in first-occurrence order.
    ///
    /// Only the empty slots are removed from `self`; duplicates stay in place.
    fn remove_duplicate_entries(&mut self) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// Number of occupied slots.
    fn count_present(&self) -> usize;

    /// Whether `index` is in range and occupied.
    fn exists_at(&self, index: usize) -> bool;
}

impl<T> NullableExt<T> for Vec<Option<T>> {
    fn remove_null_entries(&mut self) -> &mut Self {
        self.retain(Option::is_some);
        self
    }

    fn remove_duplicate_entries(&mut self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        self.remove_null_entries();

        let mut seen = HashSet::with_capacity(self.len());
        self.iter()
            .flatten()
            .filter(|value| seen.insert(*value))
            .cloned()
            .collect()
    }

    fn count_present(&self) -> usize {
        self.iter().filter(|slot| slot.is_some()).count()
    }

    fn exists_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Some(_)))
    }
}

/// Value-based removal and replacement for vectors.
pub trait CleanupExt<T> {
    /// For each of `entries`, remove the first element equal to it.
    fn remove_entries(&mut self, entries: &[T]) -> &mut Self
    where
        T: PartialEq;

    /// Copy without any element equal to `item`.
    fn without_item(&self, item: &T) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// Copy with every element equal to `item` replaced by `new_item`.
    fn replace_item(&self, item: &T, new_item: &T) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// Overwrite the first element equal to `value`, or push it.
    fn upsert(&mut self, value: T) -> Upsert<T>
    where
        T: PartialEq;
}

impl<T> CleanupExt<T> for Vec<T> {
    fn remove_entries(&mut self, entries: &[T]) -> &mut Self
    where
        T: PartialEq,
    {
        for entry in entries {
            if let Some(index) = self.iter().position(|item| item == entry) {
                self.remove(index);
            }
        }
        self
    }

    fn without_item(&self, item: &T) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        self.iter().filter(|other| *other != item).cloned().collect()
    }

    fn replace_item(&self, item: &T, new_item: &T) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        self.iter()
            .map(|other| if other == item { new_item } else { other })
            .cloned()
            .collect()
    }

    fn upsert(&mut self, value: T) -> Upsert<T>
    where
        T: PartialEq,
    {
        match self.iter_mut().find(|item| **item == value) {
            Some(slot) => Upsert::Updated(core::mem::replace(slot, value)),
            None => {
                self.push(value);
                Upsert::Inserted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_nulls_preserving_order() {
        let mut slots = vec![Some("a"), None, Some("b"), None];
        slots.remove_null_entries();
        assert_eq!(slots, vec![Some("a"), Some("b")]);
    }

    #[test]
    fn remove_nulls_handles_long_interleaved_runs() {
        let mut slots: Vec<Option<u32>> = (0..10_000)
            .map(|i| if i % 3 == 0 { None } else { Some(i) })
            .collect();
        slots.remove_null_entries();

        assert_eq!(slots.len(), 6_666);
        assert_eq!(slots.first(), Some(&Some(1)));
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn remove_nulls_on_empty_and_all_null() {
        let mut empty: Vec<Option<u8>> = Vec::new();
        assert!(empty.remove_null_entries().is_empty());

        let mut all_null: Vec<Option<u8>> = vec![None, None];
        assert!(all_null.remove_null_entries().is_empty());
    }

    #[test]
    fn duplicate_removal_only_strips_nulls_in_place() {
        let mut slots = vec![Some(3), None, Some(1), Some(3), None, Some(1)];
        let distinct = slots.remove_duplicate_entries();

        assert_eq!(distinct, vec![3, 1]);
        assert_eq!(slots, vec![Some(3), Some(1), Some(3), Some(1)]);
    }

    #[test]
    fn counts_and_existence() {
        let slots = vec![Some(1), None, Some(2)];
        assert_eq!(slots.count_present(), 2);
        assert!(slots.exists_at(0));
        assert!(!slots.exists_at(1));
        assert!(!slots.exists_at(3));
    }

    #[test]
    fn remove_entries_takes_first_match_only() {
        let mut items = vec![1, 2, 1, 3];
        items.remove_entries(&[1, 4]);
        assert_eq!(items, [2, 1, 3]);
    }

    #[test]
    fn without_and_replace() {
        let items = vec!["x", "y", "x"];
        assert_eq!(items.without_item(&"x"), ["y"]);
        assert_eq!(items.replace_item(&"x", &"z"), ["z", "y", "z"]);
        assert_eq!(items, ["x", "y", "x"]);
    }

    #[derive(Debug, Clone)]
    struct Tagged {
        id: u32,
        label: &'static str,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    #[test]
    fn upsert_replaces_equal_element() {
        let mut items = vec![Tagged { id: 1, label: "old" }];

        let outcome = items.upsert(Tagged { id: 1, label: "new" });
        assert!(matches!(outcome, Upsert::Updated(Tagged { label: "old", .. })));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "new");

        assert_eq!(items.upsert(Tagged { id: 2, label: "two" }), Upsert::Inserted);
        assert_eq!(items.len(), 2);
    }
}
