/*
 * attrs.rs
 * Copyright (c) 2025 The Veneer Authors
 */

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// An element's attribute map.
///
/// Iteration yields entries in the order they were first written, matching
/// document order for parsed markup. Overwriting an existing name keeps the
/// entry at its original position. Names compare exactly as written, so
/// namespace-prefixed names like `xmlns:layout` stay distinct from plain
/// local names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeMap {
    entries: LinkedHashMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        AttributeMap {
            entries: LinkedHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Set `name` to `value`. An existing entry keeps its position in the
    /// map; a new entry goes to the end.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.get_mut(&name) {
            Some(slot) => *slot = value,
            None => {
                self.entries.insert(name, value);
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries of `self` with no (name, value)-equal entry in `other`, in
    /// this map's insertion order. An entry differs when `other` lacks the
    /// name entirely or carries a different value for it.
    pub fn difference<'a>(&'a self, other: &AttributeMap) -> Vec<(&'a str, &'a str)> {
        self.iter()
            .filter(|(name, value)| other.get(name) != Some(*value))
            .collect()
    }
}

/// Equality is name/value equality, independent of entry order.
impl PartialEq for AttributeMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for AttributeMap {}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
