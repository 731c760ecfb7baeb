//! Map helpers for `HashMap` and `BTreeMap`.
//!
//! Lookups fall back to a default instead of panicking. The `try_*` variants
//! accept an optional key; a missing key is logged, reported as
//! [`CollectionError::NullKey`], and leaves the map untouched.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::aggregate::WrappingSum;
use crate::error::{CollectionError, Result};

/// What an insert-or-overwrite did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Upsert<V> {
    /// The key (or value) was not present and has been added.
    Inserted,
    /// An existing entry was overwritten. Carries the previous value.
    Updated(V),
}

impl<V> Upsert<V> {
    #[inline]
    pub fn is_inserted(&self) -> bool {
        matches!(self, Upsert::Inserted)
    }

    /// The value that was replaced, if any.
    pub fn into_previous(self) -> Option<V> {
        match self {
            Upsert::Inserted => None,
            Upsert::Updated(previous) => Some(previous),
        }
    }
}

impl<V> From<Option<V>> for Upsert<V> {
    fn from(previous: Option<V>) -> Self {
        match previous {
            Some(previous) => Upsert::Updated(previous),
            None => Upsert::Inserted,
        }
    }
}

/// Extension methods shared by the standard map types.
///
/// Implementors supply the four primitive accessors and `convert_values`;
/// everything else is derived from them.
pub trait MapExt<K, V> {
    /// Map of the same shape holding `U` values.
    type Mapped<U>;

    /// Borrowing iterator over all entries.
    fn iter_entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Plain lookup.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Insert, returning the replaced value.
    fn insert_entry(&mut self, key: K, value: V) -> Option<V>;

    /// Stored value for `key`, inserting `V::default()` first if absent.
    fn get_or_add(&mut self, key: K) -> &mut V
    where
        V: Default;

    /// New map with the same keys and every value passed through `convertor`.
    fn convert_values<U, F>(&self, convertor: F) -> Self::Mapped<U>
    where
        K: Clone,
        F: FnMut(&V) -> U;

    /// Stored value, or `V::default()` on a miss.
    fn value_or_default(&self, key: &K) -> V
    where
        V: Clone + Default,
    {
        self.lookup(key).cloned().unwrap_or_default()
    }

    /// Stored value, or `fallback` on a miss.
    fn value_or(&self, key: &K, fallback: V) -> V
    where
        V: Clone,
    {
        self.lookup(key).cloned().unwrap_or(fallback)
    }

    /// Insert if absent, overwrite if present.
    fn add_or_update(&mut self, key: K, value: V) -> Upsert<V> {
        self.insert_entry(key, value).into()
    }

    /// [`add_or_update`](MapExt::add_or_update) for a key that may be absent.
    fn try_add_or_update(&mut self, key: Option<K>, value: V) -> Result<Upsert<V>> {
        let Some(key) = key else {
            tracing::error!("add_or_update: key was null");
            return Err(CollectionError::NullKey);
        };
        Ok(self.add_or_update(key, value))
    }

    /// [`get_or_add`](MapExt::get_or_add) for a key that may be absent.
    fn try_get_or_add(&mut self, key: Option<K>) -> Result<&mut V>
    where
        V: Default,
    {
        let Some(key) = key else {
            tracing::error!("get_or_add: key was null");
            return Err(CollectionError::NullKey);
        };
        Ok(self.get_or_add(key))
    }

    /// Sum of all values. Integer overflow wraps around.
    fn sum_values<'a>(&'a self) -> V
    where
        K: 'a,
        V: WrappingSum + 'a,
    {
        self.iter_entries().fold(V::ZERO, |sum, (_, value)| sum.add_wrapping(*value))
    }

    /// First value whose entry matches `predicate`, in iteration order.
    fn find_first_value<'a, F>(&'a self, mut predicate: F) -> Option<&'a V>
    where
        K: 'a,
        V: 'a,
        F: FnMut(&K, &V) -> bool,
    {
        self.iter_entries()
            .find(|(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Projected values, skipping entries for which `create` yields `None`.
    fn collect_values<'a, U, F>(&'a self, mut create: F) -> Vec<U>
    where
        K: 'a,
        V: 'a,
        F: FnMut(&V) -> Option<U>,
    {
        self.iter_entries().filter_map(|(_, value)| create(value)).collect()
    }

    /// Every value projected through `create`.
    fn map_values<'a, U, F>(&'a self, mut create: F) -> Vec<U>
    where
        K: 'a,
        V: 'a,
        F: FnMut(&V) -> U,
    {
        self.iter_entries().map(|(_, value)| create(value)).collect()
    }

    /// Every key projected through `create`.
    fn map_keys<'a, U, F>(&'a self, mut create: F) -> Vec<U>
    where
        K: 'a,
        V: 'a,
        F: FnMut(&K) -> U,
    {
        self.iter_entries().map(|(key, _)| create(key)).collect()
    }

    fn keys_to_vec<'a>(&'a self) -> Vec<K>
    where
        K: Clone + 'a,
        V: 'a,
    {
        self.map_keys(K::clone)
    }
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Mapped<U> = HashMap<K, U, S>;

    fn iter_entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get_or_add(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    fn convert_values<U, F>(&self, mut convertor: F) -> HashMap<K, U, S>
    where
        K: Clone,
        F: FnMut(&V) -> U,
    {
        let mut converted = HashMap::with_capacity_and_hasher(self.len(), S::default());
        for (key, value) in self {
            converted.insert(key.clone(), convertor(value));
        }
        converted
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    type Mapped<U> = BTreeMap<K, U>;

    fn iter_entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get_or_add(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    fn convert_values<U, F>(&self, mut convertor: F) -> BTreeMap<K, U>
    where
        K: Clone,
        F: FnMut(&V) -> U,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), convertor(value)))
            .collect()
    }
}
