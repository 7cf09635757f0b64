//! A single filter predicate and the partial updates the editor applies to it.

use serde::{Deserialize, Serialize};

use super::{field::FieldKind, id_set::IdSet};

/// One atomic predicate: a field plus a value whose shape the field dictates.
///
/// Entity fields always carry an [IdSet] and [Condition::Text] always carries
/// a string, so a condition can never hold a value of the wrong shape.
///
/// Serialized as `{"field": "<name>", "value": [..] | ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum Condition {
    /// Matches records whose account is one of the selected accounts.
    Account(IdSet),
    /// Matches records whose category is one of the selected categories, or
    /// that fit a selected pseudo-category.
    Category(IdSet),
    /// Matches records whose payee is one of the selected payees.
    Payee(IdSet),
    /// Matches records whose searchable text contains this text, ignoring
    /// case.
    Text(String),
}

/// The condition added by "Add filter group" and "Add condition".
pub fn default_condition() -> Condition {
    Condition::empty(FieldKind::Category)
}

impl Default for Condition {
    fn default() -> Self {
        default_condition()
    }
}

impl Condition {
    /// A condition on `field` with nothing selected or typed yet.
    pub fn empty(field: FieldKind) -> Self {
        match field {
            FieldKind::Account => Condition::Account(IdSet::new()),
            FieldKind::Category => Condition::Category(IdSet::new()),
            FieldKind::Payee => Condition::Payee(IdSet::new()),
            FieldKind::Text => Condition::Text(String::new()),
        }
    }

    /// Build a condition from a field and a value.
    ///
    /// Returns `None` if the shape of `value` does not suit `field`.
    pub fn new(field: FieldKind, value: ConditionValue) -> Option<Self> {
        match (field, value) {
            (FieldKind::Account, ConditionValue::Ids(ids)) => Some(Condition::Account(ids)),
            (FieldKind::Category, ConditionValue::Ids(ids)) => Some(Condition::Category(ids)),
            (FieldKind::Payee, ConditionValue::Ids(ids)) => Some(Condition::Payee(ids)),
            (FieldKind::Text, ConditionValue::Text(text)) => Some(Condition::Text(text)),
            _ => None,
        }
    }

    /// The field this condition tests.
    pub fn field(&self) -> FieldKind {
        match self {
            Condition::Account(_) => FieldKind::Account,
            Condition::Category(_) => FieldKind::Category,
            Condition::Payee(_) => FieldKind::Payee,
            Condition::Text(_) => FieldKind::Text,
        }
    }

    /// The selected identifiers, or `None` for a text condition.
    pub fn ids(&self) -> Option<&IdSet> {
        match self {
            Condition::Account(ids) | Condition::Category(ids) | Condition::Payee(ids) => {
                Some(ids)
            }
            Condition::Text(_) => None,
        }
    }

    /// The search text, or `None` for an entity condition.
    pub fn text(&self) -> Option<&str> {
        match self {
            Condition::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the user has not yet selected or typed anything.
    ///
    /// Text made up only of whitespace counts as blank. A blank condition
    /// never matches a record.
    pub fn is_blank(&self) -> bool {
        match self {
            Condition::Account(ids) | Condition::Category(ids) | Condition::Payee(ids) => {
                ids.is_empty()
            }
            Condition::Text(text) => text.trim().is_empty(),
        }
    }

    /// Return a copy of this condition with `patch` merged in.
    ///
    /// Switching to a different field resets the value to that field's empty
    /// default and ignores any value in the patch. Otherwise a patch value
    /// replaces the current one if its shape suits the field; a value of the
    /// wrong shape is dropped.
    pub fn patched(&self, patch: &ConditionPatch) -> Self {
        let field = self.field();

        match patch.field {
            Some(new_field) if new_field != field => Condition::empty(new_field),
            _ => match &patch.value {
                Some(value) => Condition::new(field, value.clone()).unwrap_or_else(|| {
                    tracing::debug!(
                        "ignoring {} value patched onto a {field} condition",
                        value.shape()
                    );
                    self.clone()
                }),
                None => self.clone(),
            },
        }
    }
}

/// A condition value detached from its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    /// Selected identifiers for an entity field.
    Ids(IdSet),
    /// Search text for the text field.
    Text(String),
}

impl ConditionValue {
    fn shape(&self) -> &'static str {
        match self {
            ConditionValue::Ids(_) => "an identifier set",
            ConditionValue::Text(_) => "a text",
        }
    }
}

/// A partial update to a [Condition], as emitted by the field picker or a
/// value input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionPatch {
    /// The field to switch to, if the field picker changed.
    pub field: Option<FieldKind>,
    /// The new value, if a value input changed.
    pub value: Option<ConditionValue>,
}

impl ConditionPatch {
    /// A patch that switches the condition to `field`.
    pub fn field(field: FieldKind) -> Self {
        Self {
            field: Some(field),
            value: None,
        }
    }

    /// A patch that replaces the selected identifiers.
    pub fn ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: None,
            value: Some(ConditionValue::Ids(ids.into_iter().collect())),
        }
    }

    /// A patch that replaces the search text.
    pub fn text(text: &str) -> Self {
        Self {
            field: None,
            value: Some(ConditionValue::Text(text.to_owned())),
        }
    }

    /// Also set the field on this patch.
    pub fn with_field(mut self, field: FieldKind) -> Self {
        self.field = Some(field);
        self
    }
}
