//! The catalog of fields a filter condition can test.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A filterable field of a transaction.
///
/// Entity fields ([FieldKind::Account], [FieldKind::Category] and
/// [FieldKind::Payee]) are matched by membership in a set of selected
/// identifiers, while [FieldKind::Text] is matched by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// The account the money moved in or out of.
    Account,
    /// The spending or income category, including the pseudo-categories.
    Category,
    /// Who was paid or who paid.
    Payee,
    /// The description, payee name and notes, searched as text.
    Text,
}

impl FieldKind {
    /// Every field, in the order they are offered in the field picker.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Account,
        FieldKind::Category,
        FieldKind::Payee,
        FieldKind::Text,
    ];

    /// Whether the field refers to identifiers in another directory.
    pub fn is_entity(self) -> bool {
        !matches!(self, FieldKind::Text)
    }

    /// The name shown to the user in the field picker.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Account => "Account",
            FieldKind::Category => "Category",
            FieldKind::Payee => "Payee",
            FieldKind::Text => "Text",
        }
    }

    /// The name used in the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Account => "account",
            FieldKind::Category => "category",
            FieldKind::Payee => "payee",
            FieldKind::Text => "text",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::InvalidExpression(format!("unknown filter field \"{s}\"")))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::Error;

    use super::FieldKind;

    #[test]
    fn only_text_is_not_an_entity_field() {
        let entity_fields: Vec<FieldKind> = FieldKind::ALL
            .into_iter()
            .filter(|field| field.is_entity())
            .collect();

        assert_eq!(
            entity_fields,
            vec![FieldKind::Account, FieldKind::Category, FieldKind::Payee]
        );
    }

    #[test]
    fn parses_wire_names() {
        for field in FieldKind::ALL {
            assert_eq!(FieldKind::from_str(&field.to_string()), Ok(field));
        }
    }

    #[test]
    fn rejects_unknown_field_name() {
        assert_eq!(
            FieldKind::from_str("amount"),
            Err(Error::InvalidExpression(
                "unknown filter field \"amount\"".to_owned()
            ))
        );
    }

    #[test]
    fn labels_are_capitalised_names() {
        let labels: Vec<&str> = FieldKind::ALL.into_iter().map(FieldKind::label).collect();

        assert_eq!(labels, vec!["Account", "Category", "Payee", "Text"]);
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let got = serde_json::to_string(&FieldKind::Payee).unwrap();

        assert_eq!(got, "\"payee\"");
    }
}
