//! Insertion-ordered multi-value map.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A `String -> Vec<V>` map that remembers the order keys were first added.
///
/// Keys are compared exactly. Adding to an existing key appends to its value
/// list; the key keeps its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiValueMap<V> {
    entries: Vec<(String, Vec<V>)>,
    index: HashMap<String, usize>,
}

impl<V> Default for MultiValueMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> MultiValueMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single value under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        self.values_mut(key.into()).push(value);
    }

    /// Appends every value under `key`, creating the key even if `values` is empty.
    pub fn add_all<I>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.values_mut(key.into()).extend(values);
    }

    pub fn get(&self, key: &str) -> Option<&[V]> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[V])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn values_mut(&mut self, key: String) -> &mut Vec<V> {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, Vec::new()));
                pos
            }
        };
        &mut self.entries[pos].1
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for MultiValueMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.add(key, value);
        }
        map
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, Vec<V>); N]> for MultiValueMap<V> {
    fn from(entries: [(K, Vec<V>); N]) -> Self {
        let mut map = Self::new();
        for (key, values) in entries {
            map.add_all(key, values);
        }
        map
    }
}

impl<V> IntoIterator for MultiValueMap<V> {
    type Item = (String, Vec<V>);
    type IntoIter = std::vec::IntoIter<(String, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for MultiValueMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}
