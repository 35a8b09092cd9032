use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use super::Assert;
use crate::failure::messages;

/// Key/value containers.
pub trait MapLike {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Number of entries.
    fn entry_count(&self) -> usize;

    /// The value stored under `key`.
    fn value_of(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// All values, in iteration order.
    fn values_of(&self) -> Vec<&Self::Value>;
}

impl<K: Eq + Hash, V, S: BuildHasher> MapLike for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn value_of(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn values_of(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<K: Ord, V> MapLike for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn value_of(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn values_of(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<M: MapLike + ?Sized> MapLike for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn entry_count(&self) -> usize {
        (**self).entry_count()
    }

    fn value_of(&self, key: &M::Key) -> Option<&M::Value> {
        (**self).value_of(key)
    }

    fn values_of(&self) -> Vec<&M::Value> {
        (**self).values_of()
    }
}

/// Checks on maps.
pub trait MapAssertions<K, V> {
    /// The map has an entry for `key`.
    fn contains_key(&self, key: K) -> &Self;

    /// The map has an entry for each of `keys`.
    fn contains_keys(&self, keys: impl IntoIterator<Item = K>) -> &Self;

    /// The map has no entry for `key`.
    fn does_not_contain_key(&self, key: K) -> &Self;

    /// The map has no entry for any of `keys`.
    fn does_not_contain_keys(&self, keys: impl IntoIterator<Item = K>) -> &Self;

    /// `key` maps to `value`.
    fn contains_entry(&self, key: K, value: V) -> &Self;

    /// Some key maps to `value`.
    fn contains_value(&self, value: V) -> &Self;

    /// The map has `expected` entries.
    fn has_size(&self, expected: usize) -> &Self;

    /// The map has no entries.
    fn is_empty(&self) -> &Self;

    /// The map has at least one entry.
    fn is_not_empty(&self) -> &Self;

    /// Navigate to the number of entries.
    fn size(&self) -> Assert<'_, usize, Self>
    where
        Self: Sized;
}

fn render_keys<T, P, K: Debug>(node: &Assert<'_, T, P>, keys: &[&K]) -> String {
    let keys: Vec<&dyn Debug> = keys.iter().map(|k| *k as &dyn Debug).collect();
    node.represent_elements(&keys)
}

impl<T, P> MapAssertions<T::Key, T::Value> for Assert<'_, T, P>
where
    T: MapLike + Debug,
    T::Key: Debug,
    T::Value: Debug + PartialEq,
{
    #[track_caller]
    fn contains_key(&self, key: T::Key) -> &Self {
        self.contains_keys([key])
    }

    #[track_caller]
    fn contains_keys(&self, keys: impl IntoIterator<Item = T::Key>) -> &Self {
        let keys: Vec<T::Key> = keys.into_iter().collect();
        self.verify(|actual| {
            let missing: Vec<&T::Key> = keys.iter().filter(|k| actual.value_of(k).is_none()).collect();
            (!missing.is_empty()).then(|| {
                messages::should_contain_keys(&self.represent(actual), &render_keys(self, &missing))
            })
        })
    }

    #[track_caller]
    fn does_not_contain_key(&self, key: T::Key) -> &Self {
        self.does_not_contain_keys([key])
    }

    #[track_caller]
    fn does_not_contain_keys(&self, keys: impl IntoIterator<Item = T::Key>) -> &Self {
        let keys: Vec<T::Key> = keys.into_iter().collect();
        self.verify(|actual| {
            let present: Vec<&T::Key> = keys.iter().filter(|k| actual.value_of(k).is_some()).collect();
            (!present.is_empty()).then(|| {
                messages::should_not_contain_keys(&self.represent(actual), &render_keys(self, &present))
            })
        })
    }

    #[track_caller]
    fn contains_entry(&self, key: T::Key, value: T::Value) -> &Self {
        self.verify(|actual| match actual.value_of(&key) {
            Some(found) if *found == value => None,
            found => Some(messages::should_contain_entry(
                &self.represent(actual),
                &self.represent(&key),
                &self.represent(&value),
                found.map(|f| self.represent(f)).as_deref(),
            )),
        })
    }

    #[track_caller]
    fn contains_value(&self, value: T::Value) -> &Self {
        self.verify(|actual| {
            (!actual.values_of().contains(&&value)).then(|| {
                messages::should_contain_value(&self.represent(actual), &self.represent(&value))
            })
        })
    }

    #[track_caller]
    fn has_size(&self, expected: usize) -> &Self {
        self.verify(|actual| {
            let size = actual.entry_count();
            (size != expected)
                .then(|| messages::should_have_size(&self.represent(actual), size, expected))
        })
    }

    #[track_caller]
    fn is_empty(&self) -> &Self {
        self.verify(|actual| {
            (actual.entry_count() != 0).then(|| messages::should_be_empty(&self.represent(actual)))
        })
    }

    #[track_caller]
    fn is_not_empty(&self) -> &Self {
        self.verify(|actual| (actual.entry_count() == 0).then(messages::should_not_be_empty))
    }

    fn size(&self) -> Assert<'_, usize, Self> {
        self.child(self.actual().map(MapLike::entry_count))
    }
}
