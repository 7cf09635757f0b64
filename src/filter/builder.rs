//! Editing operations for [Expression].
//!
//! Each operation takes the current expression by reference and returns a new
//! one, leaving the input untouched. Indices come from UI events and may be
//! stale by the time they arrive, so an out of range index makes the
//! operation a no-op rather than an error.

use super::{
    condition::{ConditionPatch, default_condition},
    expression::{Expression, Group},
};

impl Expression {
    /// Append a group holding a single default condition.
    pub fn add_group(&self) -> Self {
        let mut groups = self.groups.clone();
        groups.push(Group::new(default_condition()));

        Self { groups }
    }

    /// Remove the group at `group_index`.
    pub fn remove_group(&self, group_index: usize) -> Self {
        if group_index >= self.groups.len() {
            log_stale_index("remove_group", group_index, None);
            return self.clone();
        }

        let groups = self
            .groups
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != group_index)
            .map(|(_, group)| group.clone())
            .collect();

        Self { groups }
    }

    /// Append a default condition to the group at `group_index`.
    pub fn add_condition(&self, group_index: usize) -> Self {
        if group_index >= self.groups.len() {
            log_stale_index("add_condition", group_index, None);
            return self.clone();
        }

        let mut groups = self.groups.clone();
        groups[group_index].conditions.push(default_condition());

        Self { groups }
    }

    /// Remove a condition from the group at `group_index`.
    ///
    /// Removing the last condition of a group removes the group as well, so
    /// the groups after it move down one index.
    pub fn remove_condition(&self, group_index: usize, condition_index: usize) -> Self {
        let Some(group) = self.groups.get(group_index) else {
            log_stale_index("remove_condition", group_index, Some(condition_index));
            return self.clone();
        };

        if condition_index >= group.conditions.len() {
            log_stale_index("remove_condition", group_index, Some(condition_index));
            return self.clone();
        }

        if group.conditions.len() == 1 {
            return self.remove_group(group_index);
        }

        let mut groups = self.groups.clone();
        groups[group_index].conditions.remove(condition_index);

        Self { groups }
    }

    /// Merge `patch` into a condition.
    ///
    /// See [Condition::patched](super::Condition::patched) for how a field
    /// change resets the value.
    pub fn update_condition(
        &self,
        group_index: usize,
        condition_index: usize,
        patch: &ConditionPatch,
    ) -> Self {
        let Some(condition) = self.condition(group_index, condition_index) else {
            log_stale_index("update_condition", group_index, Some(condition_index));
            return self.clone();
        };

        let updated = condition.patched(patch);
        let mut groups = self.groups.clone();
        groups[group_index].conditions[condition_index] = updated;

        Self { groups }
    }
}

fn log_stale_index(operation: &str, group_index: usize, condition_index: Option<usize>) {
    match condition_index {
        Some(condition_index) => tracing::debug!(
            "{operation}: no condition {condition_index} in group {group_index}, ignoring"
        ),
        None => tracing::debug!("{operation}: no group {group_index}, ignoring"),
    }
}
