//! An insertion-ordered, string-keyed map.
//!
//! The domain model needs "ordered non-empty mapping of id -> value" in
//! three places (sections within a checklist, questions within a section,
//! sub-questions within a question). A `Vec<(K, V)>` gives the order for
//! free; the side `HashMap<K, usize>` gives O(1) lookup by id without
//! resorting to back-pointers, matching the string-keyed-map linking
//! strategy called out for this domain (the tree has no cycles, so a
//! parent holding an index of its children's ids is sufficient).

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from an ordered sequence of entries, erroring with the
    /// first duplicate key encountered.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self, K> {
        let mut map = Self::new();
        for (k, v) in entries {
            if map.index.contains_key(&k) {
                return Err(k);
            }
            map.insert(k, v);
        }
        Ok(map)
    }

    pub fn insert(&mut self, key: K, value: V) {
        let idx = self.entries.len();
        self.index.insert(key.clone(), idx);
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Clone + Eq + Hash, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K: Clone + Eq + Hash, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (K, V)>, fn(&'a (K, V)) -> (&'a K, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let map = OrderedMap::from_entries([("b", 2), ("a", 1), ("c", 3)]).unwrap();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = OrderedMap::from_entries([("a", 1), ("a", 2)]);
        assert_eq!(err, Err("a"));
    }

    #[test]
    fn lookup_is_by_key_not_position() {
        let map = OrderedMap::from_entries([("x", "first"), ("y", "second")]).unwrap();
        assert_eq!(map.get(&"y"), Some(&"second"));
        assert_eq!(map.get(&"z"), None);
    }
}
