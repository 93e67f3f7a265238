//! Ordered parameter sets and their value snapshots.

use indexmap::map::{Iter, Keys};
use indexmap::IndexMap;

use super::item::{ParameterItem, Value};

/// Snapshot of parameter values, in display order.
pub type ValueMap = IndexMap<String, Value>;

/// Parameters edited together in one form.
///
/// Insertion order is display order. Keys identify parameters for the caller
/// and are never shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    items: IndexMap<String, ParameterItem>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, item: ParameterItem) -> Self {
        self.insert(key, item);
        self
    }

    /// Insert a parameter, returning the one previously stored under `key`.
    ///
    /// A replaced key keeps its original display position.
    pub fn insert(&mut self, key: impl Into<String>, item: ParameterItem) -> Option<ParameterItem> {
        self.items.insert(key.into(), item)
    }

    pub fn get(&self, key: &str) -> Option<&ParameterItem> {
        self.items.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut ParameterItem> {
        self.items.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn iter(&self) -> Iter<'_, String, ParameterItem> {
        self.items.iter()
    }

    pub fn keys(&self) -> Keys<'_, String, ParameterItem> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Committed value of every parameter.
    ///
    /// The result is an owned snapshot; later edits do not change it.
    pub fn values(&self) -> ValueMap {
        self.items
            .iter()
            .map(|(key, item)| (key.clone(), item.value().clone()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, ParameterItem)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, ParameterItem)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a ParameterItem);
    type IntoIter = Iter<'a, String, ParameterItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
