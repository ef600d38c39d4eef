//! In-memory forms of the persisted input method lists.
//!
//! Both collections keep insertion order so that re-serializing them is
//! deterministic: entries read from the persisted string come first, in their
//! persisted order, followed by input methods enabled during reconciliation.
//! Equality ignores order.

use crate::models::input_method::{InputMethodId, SubtypeHash};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Enabled input methods and the subtype hashes enabled for each.
///
/// An input method present with an empty set is enabled without any subtype
/// restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledMap(IndexMap<InputMethodId, IndexSet<SubtypeHash>>);

impl EnabledMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the subtype set of `id`. A previous entry keeps its position.
    pub fn insert<I, S>(&mut self, id: impl Into<String>, subtypes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = subtypes.into_iter().map(Into::into).collect();
        self.0.insert(id.into(), set);
    }

    /// Returns the subtype set of `id`, creating an empty one if absent.
    pub fn entry_or_default(&mut self, id: &str) -> &mut IndexSet<SubtypeHash> {
        self.0.entry(id.to_string()).or_default()
    }

    /// Removes `id`, keeping the order of the remaining entries.
    pub fn remove(&mut self, id: &str) -> Option<IndexSet<SubtypeHash>> {
        self.0.shift_remove(id)
    }

    /// Whether `id` is enabled.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Enabled subtype hashes of `id`.
    #[must_use]
    pub fn subtypes(&self, id: &str) -> Option<&IndexSet<SubtypeHash>> {
        self.0.get(id)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&InputMethodId, &IndexSet<SubtypeHash>)> {
        self.0.iter()
    }

    /// Number of enabled input methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no input method is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// System input methods explicitly turned off while a hardware keyboard was attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisabledSystemSet(IndexSet<InputMethodId>);

impl DisabledSystemSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`. Returns false if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    /// Removes `id`, keeping the order of the remaining ids.
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.shift_remove(id)
    }

    /// Whether `id` is in the set.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Iterates ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &InputMethodId> {
        self.0.iter()
    }

    /// Number of disabled system input methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DisabledSystemSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
