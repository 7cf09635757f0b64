//! Testing records against a filter expression.

use std::time::Instant;

use crate::record::Filterable;

use super::{
    condition::Condition,
    expression::{Expression, Group},
    id_set::IdSet,
};

/// The pseudo-category that selects records without a category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// The pseudo-category that selects transfers between accounts.
pub const TRANSFER: &str = "transfer";

/// Whether `record` satisfies `expression`.
///
/// The empty expression matches everything. Otherwise every group must
/// match, and a group matches if any of its conditions does.
pub fn matches<R: Filterable + ?Sized>(expression: &Expression, record: &R) -> bool {
    expression
        .groups()
        .iter()
        .all(|group| group_matches(group, record))
}

fn group_matches<R: Filterable + ?Sized>(group: &Group, record: &R) -> bool {
    group
        .conditions()
        .iter()
        .any(|condition| condition_matches(condition, record))
}

/// Whether a single condition holds for `record`.
///
/// A condition with nothing selected or an empty search text never matches,
/// so a half-edited filter excludes records instead of letting them all
/// through.
pub fn condition_matches<R: Filterable + ?Sized>(condition: &Condition, record: &R) -> bool {
    match condition {
        Condition::Account(ids) => contains(ids, record.account_id()),
        Condition::Payee(ids) => contains(ids, record.payee_id()),
        Condition::Category(ids) => {
            contains(ids, record.category_id())
                || (ids.contains(UNCATEGORIZED) && record.category_id().is_none())
                || (ids.contains(TRANSFER) && record.is_transfer())
        }
        Condition::Text(text) => {
            !condition.is_blank()
                && record
                    .searchable_text()
                    .to_lowercase()
                    .contains(&text.to_lowercase())
        }
    }
}

fn contains(ids: &IdSet, id: Option<&str>) -> bool {
    id.is_some_and(|id| ids.contains(id))
}

/// The records that satisfy `expression`, in their original order.
pub fn filter_records<'a, R: Filterable>(expression: &Expression, records: &'a [R]) -> Vec<&'a R> {
    let start_time = Instant::now();

    let matched: Vec<&R> = records
        .iter()
        .filter(|record| matches(expression, *record))
        .collect();

    tracing::debug!(
        "Filtered {} records with {} groups in {:.2}ms: {} matched",
        records.len(),
        expression.len(),
        start_time.elapsed().as_secs_f64() * 1000.0,
        matched.len()
    );

    matched
}

/// The number of records that satisfy `expression`.
pub fn count_matches<R: Filterable>(expression: &Expression, records: &[R]) -> usize {
    let start_time = Instant::now();

    let count = records
        .iter()
        .filter(|record| matches(expression, *record))
        .count();

    tracing::debug!(
        "Counted {} records with {} groups in {:.2}ms: {} matched",
        records.len(),
        expression.len(),
        start_time.elapsed().as_secs_f64() * 1000.0,
        count
    );

    count
}
