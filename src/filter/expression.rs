//! The filter expression data model: conditions OR-ed within groups, groups
//! AND-ed together.

use serde::{Deserialize, Serialize, Serializer};

use crate::Error;

use super::condition::Condition;

/// An ordered, non-empty collection of conditions where any one matching is
/// enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub(super) conditions: Vec<Condition>,
}

impl Group {
    /// Create a group holding a single condition.
    pub fn new(condition: Condition) -> Self {
        Self {
            conditions: vec![condition],
        }
    }

    /// Create a group from `conditions`.
    ///
    /// Returns `None` if `conditions` is empty, since an empty group cannot
    /// exist in an expression.
    pub fn from_conditions(conditions: Vec<Condition>) -> Option<Self> {
        if conditions.is_empty() {
            None
        } else {
            Some(Self { conditions })
        }
    }

    /// The conditions in the order they were added.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The number of conditions in the group.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the group has no conditions, which never holds for a group
    /// inside an [Expression].
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// A filter: every group must match.
///
/// The empty expression has no filters and matches every record. Every group
/// in an expression holds at least one condition; the builder operations
/// maintain this and decoding rejects input that breaks it.
///
/// Serialized as a JSON array of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Group>")]
pub struct Expression {
    pub(super) groups: Vec<Group>,
}

impl Expression {
    /// The empty expression, i.e. no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an expression from `groups`.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyGroup] with the position of the first group that
    /// has no conditions.
    pub fn from_groups(groups: Vec<Group>) -> Result<Self, Error> {
        match groups.iter().position(Group::is_empty) {
            Some(index) => Err(Error::EmptyGroup(index)),
            None => Ok(Self { groups }),
        }
    }

    /// The groups in the order they were added.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The condition at `condition_index` of the group at `group_index`.
    pub fn condition(&self, group_index: usize, condition_index: usize) -> Option<&Condition> {
        self.groups
            .get(group_index)
            .and_then(|group| group.conditions.get(condition_index))
    }

    /// The number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no filters.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl TryFrom<Vec<Group>> for Expression {
    type Error = Error;

    fn try_from(groups: Vec<Group>) -> Result<Self, Self::Error> {
        Expression::from_groups(groups)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.groups.serialize(serializer)
    }
}
