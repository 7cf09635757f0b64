//! Transaction-like records that filters are evaluated against.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, filter::EntityId};

/// The parts of a record a filter can look at.
pub trait Filterable {
    /// The account the money moved in or out of.
    fn account_id(&self) -> Option<&str>;

    /// The category, or `None` if the record is uncategorized.
    fn category_id(&self) -> Option<&str>;

    /// The payee, or `None` if the record has no payee.
    fn payee_id(&self) -> Option<&str>;

    /// Whether the record moves money between two of the user's accounts.
    fn is_transfer(&self) -> bool;

    /// The text description, usually from the bank statement.
    fn description(&self) -> &str;

    /// The display name of the payee.
    fn payee_name(&self) -> Option<&str>;

    /// Free-form notes the user attached to the record.
    fn notes(&self) -> Option<&str>;

    /// The text that text conditions search: the description, payee name and
    /// notes joined by single spaces, skipping the parts that are absent.
    fn searchable_text(&self) -> String {
        [Some(self.description()), self.payee_name(), self.notes()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An expense, income or transfer as supplied by the transaction directory.
///
/// To create a new `TransactionRecord`, use [TransactionRecord::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The ID of the transaction.
    pub id: EntityId,
    /// When the transaction happened.
    pub date: Date,
    /// Positive for income, negative for expenses.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The ID of the account the transaction belongs to.
    pub account_id: EntityId,
    /// The ID of the category, or `None` if uncategorized.
    #[serde(default)]
    pub category_id: Option<EntityId>,
    /// The ID of the payee, if known.
    #[serde(default)]
    pub payee_id: Option<EntityId>,
    /// The display name of the payee, if known.
    #[serde(default)]
    pub payee_name: Option<String>,
    /// Free-form notes attached by the user.
    #[serde(default)]
    pub notes: Option<String>,
    /// Whether the transaction moves money between the user's own accounts.
    #[serde(default)]
    pub is_transfer: bool,
}

impl TransactionRecord {
    /// Start building a record with the required fields. Everything else
    /// defaults to absent.
    pub fn build(id: &str, account_id: &str, date: Date, amount: f64, description: &str) -> Self {
        Self {
            id: id.to_owned(),
            date,
            amount,
            description: description.to_owned(),
            account_id: account_id.to_owned(),
            category_id: None,
            payee_id: None,
            payee_name: None,
            notes: None,
            is_transfer: false,
        }
    }

    /// Set the category of the record.
    pub fn category(mut self, category_id: &str) -> Self {
        self.category_id = Some(category_id.to_owned());
        self
    }

    /// Set the payee ID and its display name.
    pub fn payee(mut self, payee_id: &str, payee_name: &str) -> Self {
        self.payee_id = Some(payee_id.to_owned());
        self.payee_name = Some(payee_name.to_owned());
        self
    }

    /// Set the notes of the record.
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_owned());
        self
    }

    /// Mark the record as a transfer between accounts.
    pub fn transfer(mut self) -> Self {
        self.is_transfer = true;
        self
    }
}

impl Filterable for TransactionRecord {
    fn account_id(&self) -> Option<&str> {
        Some(&self.account_id)
    }

    fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    fn payee_id(&self) -> Option<&str> {
        self.payee_id.as_deref()
    }

    fn is_transfer(&self) -> bool {
        self.is_transfer
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn payee_name(&self) -> Option<&str> {
        self.payee_name.as_deref()
    }

    fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Parse a JSON array of transaction records.
///
/// # Errors
///
/// Returns [Error::InvalidRecords] if `json` is not an array of records.
pub fn parse_records(json: &str) -> Result<Vec<TransactionRecord>, Error> {
    serde_json::from_str(json).map_err(|error| Error::InvalidRecords(error.to_string()))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{Filterable, TransactionRecord, parse_records};

    #[test]
    fn searchable_text_joins_present_parts() {
        let record = TransactionRecord::build("t1", "acc-1", date!(2025 - 03 - 01), -4.5, "POS W/D")
            .payee("pay-1", "Corner Cafe")
            .with_notes("flat white");

        assert_eq!(record.searchable_text(), "POS W/D Corner Cafe flat white");
    }

    #[test]
    fn searchable_text_skips_missing_parts() {
        let record =
            TransactionRecord::build("t1", "acc-1", date!(2025 - 03 - 01), -4.5, "Rent").with_notes("");

        assert_eq!(record.searchable_text(), "Rent");
    }

    #[test]
    fn notes_are_readable_through_trait() {
        let record = TransactionRecord::build("t1", "acc-1", date!(2025 - 03 - 01), -4.5, "Gift")
            .with_notes("for Sam");

        assert_eq!(record.notes(), Some("for Sam"));
        assert_eq!(record.payee_name(), None);
    }

    #[test]
    fn builder_sets_optional_fields() {
        let record = TransactionRecord::build("t1", "acc-1", date!(2025 - 03 - 01), 100.0, "Move")
            .category("cat-1")
            .transfer();

        assert_eq!(record.category_id(), Some("cat-1"));
        assert_eq!(record.account_id(), Some("acc-1"));
        assert_eq!(record.payee_id(), None);
        assert!(record.is_transfer());
    }

    #[test]
    fn parses_records_with_optional_fields_omitted() {
        let json = r#"[
            {"id": "t1", "date": "2025-03-01", "amount": -12.5, "description": "Lunch", "account_id": "acc-1"},
            {"id": "t2", "date": "2025-03-02", "amount": 250.0, "description": "Savings", "account_id": "acc-2",
             "category_id": "cat-3", "is_transfer": true}
        ]"#;

        let got = parse_records(json).unwrap();

        assert_eq!(
            got,
            vec![
                TransactionRecord::build("t1", "acc-1", date!(2025 - 03 - 01), -12.5, "Lunch"),
                TransactionRecord::build("t2", "acc-2", date!(2025 - 03 - 02), 250.0, "Savings")
                    .category("cat-3")
                    .transfer(),
            ]
        );
    }

    #[test]
    fn parse_records_rejects_non_array() {
        let got = parse_records(r#"{"id": "t1"}"#);

        assert!(
            matches!(got, Err(Error::InvalidRecords(_))),
            "got {got:?}, want InvalidRecords"
        );
    }
}
