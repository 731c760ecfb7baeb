//! Comparison and lookup helpers.
//!
//! Lookups never fail: a miss, an empty slice, or an absent slice all come
//! back as `None` or an empty `Vec`.
//!
//! # Kind filtering
//!
//! Filtering by "type" is expressed through [`KindOf`]. An element answers
//! whether it belongs to a kind, and a hierarchy is modelled by answering
//! `true` for every ancestor kind as well as its own:
//!
//! ```rust
//! use collection_ext::{KindOf, SearchExt};
//!
//! #[derive(Debug, PartialEq)]
//! enum Kind { Unit, Soldier, Archer }
//!
//! struct Archer;
//! impl KindOf<Kind> for Archer {
//!     fn is_kind(&self, kind: &Kind) -> bool {
//!         matches!(kind, Kind::Unit | Kind::Archer)
//!     }
//! }
//!
//! let army = [Archer, Archer];
//! assert_eq!(army.find_all_of_kind(&Kind::Unit).len(), 2);
//! assert!(army.find_first_of_kind(&Kind::Soldier).is_none());
//! ```

/// Capability check used by the kind-filtering helpers.
///
/// Implementations should return `true` both for the element's exact kind and
/// for any broader kind it belongs to.
pub trait KindOf<K: ?Sized> {
    fn is_kind(&self, kind: &K) -> bool;
}

/// Read-only search helpers for slices (and anything that derefs to one).
pub trait SearchExt<T> {
    /// Element-wise equality.
    ///
    /// The same slice (same address and length) is equal to itself without a
    /// scan. Otherwise lengths are compared first, then elements in order.
    fn contents_equals(&self, other: &[T]) -> bool
    where
        T: PartialEq;

    /// First element, or `None` when empty.
    fn first_or_none(&self) -> Option<&T>;

    /// Last element, or `None` when empty.
    fn last_or_none(&self) -> Option<&T>;

    /// First element matching `predicate`.
    fn find_first_where<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool;

    /// Last element matching `predicate`.
    fn find_last_where<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool;

    /// Every element matching `predicate`, in order.
    fn find_all_where<F>(&self, predicate: F) -> Vec<&T>
    where
        F: FnMut(&T) -> bool;

    /// First element that belongs to `kind`.
    fn find_first_of_kind<K>(&self, kind: &K) -> Option<&T>
    where
        K: ?Sized,
        T: KindOf<K>;

    /// Every element that belongs to `kind`, in order.
    fn find_all_of_kind<K>(&self, kind: &K) -> Vec<&T>
    where
        K: ?Sized,
        T: KindOf<K>;

    /// Whether any element belongs to `kind`.
    fn contains_kind<K>(&self, kind: &K) -> bool
    where
        K: ?Sized,
        T: KindOf<K>;

    /// Index of the element that is `item` itself (pointer identity), as
    /// opposed to one that merely compares equal.
    fn index_of_ref(&self, item: &T) -> Option<usize>;
}

impl<T> SearchExt<T> for [T] {
    fn contents_equals(&self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        if core::ptr::eq(self, other) {
            return true;
        }

        if self.len() != other.len() {
            return false;
        }

        self.iter().zip(other).all(|(a, b)| a == b)
    }

    fn first_or_none(&self) -> Option<&T> {
        self.first()
    }

    fn last_or_none(&self) -> Option<&T> {
        self.last()
    }

    fn find_first_where<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    fn find_last_where<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().rev().find(|item| predicate(item))
    }

    fn find_all_where<F>(&self, mut predicate: F) -> Vec<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).collect()
    }

    fn find_first_of_kind<K>(&self, kind: &K) -> Option<&T>
    where
        K: ?Sized,
        T: KindOf<K>,
    {
        self.iter().find(|item| item.is_kind(kind))
    }

    fn find_all_of_kind<K>(&self, kind: &K) -> Vec<&T>
    where
        K: ?Sized,
        T: KindOf<K>,
    {
        self.iter().filter(|item| item.is_kind(kind)).collect()
    }

    fn contains_kind<K>(&self, kind: &K) -> bool
    where
        K: ?Sized,
        T: KindOf<K>,
    {
        self.iter().any(|item| item.is_kind(kind))
    }

    fn index_of_ref(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| core::ptr::eq(candidate, item))
    }
}

/// True when `items` is absent or holds no elements.
pub fn is_null_or_empty<T>(items: Option<&[T]>) -> bool {
    items.is_none_or(|items| items.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Entity,
        Actor,
        Prop,
    }

    #[derive(Debug, PartialEq)]
    enum Node {
        Actor(u32),
        Prop(u32),
    }

    impl KindOf<Kind> for Node {
        fn is_kind(&self, kind: &Kind) -> bool {
            match (self, kind) {
                (_, Kind::Entity) => true,
                (Node::Actor(_), Kind::Actor) => true,
                (Node::Prop(_), Kind::Prop) => true,
                _ => false,
            }
        }
    }

    fn world() -> Vec<Node> {
        vec![Node::Prop(1), Node::Actor(2), Node::Prop(3), Node::Actor(4)]
    }

    #[test]
    fn contents_equals_compares_pairwise() {
        let a = [1, 2, 3];
        assert!(a.contents_equals(&a));
        assert!(a.contents_equals(&[1, 2, 3]));
        assert!(!a.contents_equals(&[1, 2]));
        assert!(!a.contents_equals(&[1, 2, 4]));
        assert!(Vec::<u8>::new().contents_equals(&[]));
    }

    #[test]
    fn predicate_lookups() {
        let values = [3, 8, 5, 10, 7];
        assert_eq!(values.find_first_where(|v| v % 2 == 0), Some(&8));
        assert_eq!(values.find_last_where(|v| v % 2 == 0), Some(&10));
        assert_eq!(values.find_all_where(|v| *v > 5), vec![&8, &10, &7]);
        assert_eq!(values.find_first_where(|v| *v > 100), None);
        assert!(values.find_all_where(|v| *v > 100).is_empty());
    }

    #[test]
    fn first_and_last_on_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(empty.first_or_none(), None);
        assert_eq!(empty.last_or_none(), None);
        assert_eq!([4, 5].last_or_none(), Some(&5));
    }

    #[test]
    fn kind_filter_matches_exact_and_ancestor_kinds() {
        let nodes = world();
        assert_eq!(nodes.find_first_of_kind(&Kind::Actor), Some(&Node::Actor(2)));
        assert_eq!(nodes.find_all_of_kind(&Kind::Prop).len(), 2);
        assert_eq!(nodes.find_all_of_kind(&Kind::Entity).len(), 4);
        assert!(nodes.contains_kind(&Kind::Actor));
    }

    #[test]
    fn kind_filter_on_empty_returns_nothing() {
        let nodes: Vec<Node> = Vec::new();
        assert_eq!(nodes.find_first_of_kind(&Kind::Entity), None);
        assert!(nodes.find_all_of_kind(&Kind::Entity).is_empty());
        assert!(!nodes.contains_kind(&Kind::Entity));
    }

    #[test]
    fn index_of_ref_uses_identity_not_equality() {
        let names = vec![String::from("a"), String::from("b"), String::from("a")];
        assert_eq!(names.index_of_ref(&names[2]), Some(2));

        let lookalike = String::from("a");
        assert_eq!(names.index_of_ref(&lookalike), None);
    }

    #[test]
    fn null_or_empty() {
        assert!(is_null_or_empty::<u8>(None));
        assert!(is_null_or_empty::<u8>(Some(&[])));
        assert!(!is_null_or_empty(Some(&[1][..])));
    }
}
