//! An insertion-ordered set of selected identifiers.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Identifier of an account, category or payee as it appears in a filter.
pub type EntityId = String;

/// The identifiers selected for an entity field.
///
/// Iteration follows insertion order so selections render in the order the
/// user picked them, but equality and membership ignore order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdSet(IndexSet<EntityId>);

impl IdSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the end of the set.
    ///
    /// Returns `false` if `id` was already selected, in which case its
    /// position is unchanged.
    pub fn insert(&mut self, id: impl Into<EntityId>) -> bool {
        self.0.insert(id.into())
    }

    /// Remove `id`, keeping the order of the remaining identifiers.
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.shift_remove(id)
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// The number of selected identifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The selected identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<EntityId>> FromIterator<S> for IdSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
