//! Selectable values for the entity fields of the filter editor.
//!
//! The account, category and payee directories are owned elsewhere; this
//! module only turns their entries into ordered `(id, label)` lists. Callers
//! rebuild the [OptionCatalog] whenever a directory changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::filter::{EntityId, FieldKind, TRANSFER, UNCATEGORIZED};

/// One selectable value in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The identifier stored in a condition when this option is selected.
    pub id: EntityId,
    /// The text shown to the user.
    pub label: String,
}

impl SelectOption {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
        }
    }
}

/// An account from the account directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    /// The ID of the account.
    pub id: EntityId,
    /// The name of the account, e.g. "Everyday".
    pub name: String,
}

/// A payee from the payee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeEntry {
    /// The ID of the payee.
    pub id: EntityId,
    /// The name of the payee, e.g. "Corner Cafe".
    pub name: String,
}

/// A category from the category directory.
///
/// Categories nest one level deep: a category either has no parent or its
/// parent is a top-level category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// The ID of the category.
    pub id: EntityId,
    /// The name of the category, without its parent's name.
    pub name: String,
    /// The ID of the parent category, or `None` for a top-level category.
    #[serde(default)]
    pub parent_id: Option<EntityId>,
}

/// The label of the pseudo-category for records without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The label of the pseudo-category for transfers.
pub const TRANSFER_LABEL: &str = "Transfer";

/// Accounts as options, sorted by name.
pub fn account_options(accounts: &[AccountEntry]) -> Vec<SelectOption> {
    sorted_by_label(
        accounts
            .iter()
            .map(|account| SelectOption::new(&account.id, &account.name))
            .collect(),
    )
}

/// Payees as options, sorted by name.
pub fn payee_options(payees: &[PayeeEntry]) -> Vec<SelectOption> {
    sorted_by_label(
        payees
            .iter()
            .map(|payee| SelectOption::new(&payee.id, &payee.name))
            .collect(),
    )
}

/// Flatten the category hierarchy into options.
///
/// The list starts with the "Uncategorized" and "Transfer" pseudo-categories,
/// followed by each top-level category and then its children, labelled
/// `"<parent>: <child>"`. Top-level categories and the children of each
/// parent are sorted by name.
pub fn category_options(categories: &[CategoryEntry]) -> Vec<SelectOption> {
    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|category| (category.id.as_str(), category.name.as_str()))
        .collect();

    let mut top_level = Vec::new();
    let mut children: HashMap<&str, Vec<SelectOption>> = HashMap::new();

    for category in categories {
        match category.parent_id.as_deref() {
            Some(parent_id) if names.contains_key(parent_id) => {
                let label = format!("{}: {}", names[parent_id], category.name);
                children
                    .entry(parent_id)
                    .or_default()
                    .push(SelectOption::new(&category.id, &label));
            }
            Some(parent_id) => {
                tracing::warn!(
                    "category {} refers to missing parent {parent_id}, listing it as top-level",
                    category.id
                );
                top_level.push(SelectOption::new(&category.id, &category.name));
            }
            None => top_level.push(SelectOption::new(&category.id, &category.name)),
        }
    }

    let mut options = vec![
        SelectOption::new(UNCATEGORIZED, UNCATEGORIZED_LABEL),
        SelectOption::new(TRANSFER, TRANSFER_LABEL),
    ];

    for parent in sorted_by_label(top_level) {
        let parent_children = children.remove(parent.id.as_str()).unwrap_or_default();
        options.push(parent);
        options.extend(sorted_by_label(parent_children));
    }

    // Only categories nested more than one level deep are left.
    options.extend(sorted_by_label(children.into_values().flatten().collect()));

    options
}

fn sorted_by_label(mut options: Vec<SelectOption>) -> Vec<SelectOption> {
    options.sort_by(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    options
}

/// The selectable values for every entity field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    accounts: Vec<SelectOption>,
    categories: Vec<SelectOption>,
    payees: Vec<SelectOption>,
}

impl OptionCatalog {
    /// Build the options for every entity field from the directory entries.
    pub fn new(
        accounts: &[AccountEntry],
        categories: &[CategoryEntry],
        payees: &[PayeeEntry],
    ) -> Self {
        Self {
            accounts: account_options(accounts),
            categories: category_options(categories),
            payees: payee_options(payees),
        }
    }

    /// The options for `field`. Text fields have none.
    pub fn options_for(&self, field: FieldKind) -> &[SelectOption] {
        match field {
            FieldKind::Account => self.accounts.as_slice(),
            FieldKind::Category => self.categories.as_slice(),
            FieldKind::Payee => self.payees.as_slice(),
            FieldKind::Text => &[],
        }
    }

    /// The label to display for a selected identifier, if it is still in the
    /// directory.
    pub fn label_for(&self, field: FieldKind, id: &str) -> Option<&str> {
        self.options_for(field)
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.label.as_str())
    }
}
