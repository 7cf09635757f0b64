//! Converting expressions to and from their stored forms.
//!
//! The JSON form is an array of groups, each `{"conditions": [..]}`, with
//! conditions written as `{"field": .., "value": ..}`. Saved reports embed
//! this JSON directly and the search bar carries it in the `filter` query
//! parameter.

use serde::{Deserialize, Serialize};

use crate::Error;

use super::expression::{Expression, Group};

/// The name of the query parameter that holds a filter.
pub const FILTER_QUERY_KEY: &str = "filter";

/// Serialize `expression` as JSON.
///
/// # Errors
///
/// Returns [Error::JSONSerializationError] if serialization fails.
pub fn to_json(expression: &Expression) -> Result<String, Error> {
    serde_json::to_string(expression)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))
}

/// Parse an expression from JSON.
///
/// # Errors
///
/// Returns:
/// - [Error::InvalidExpression] if `json` is not in the expression format,
///   including unknown field names and values of the wrong shape.
/// - [Error::EmptyGroup] if a group has no conditions.
pub fn from_json(json: &str) -> Result<Expression, Error> {
    let groups: Vec<Group> = serde_json::from_str(json)
        .map_err(|error| Error::InvalidExpression(error.to_string()))?;

    Expression::from_groups(groups)
}

#[derive(Debug, Serialize, Deserialize)]
struct FilterQuery {
    #[serde(default)]
    filter: Option<String>,
}

/// Encode `expression` as a URL query string of the form `filter=<json>`.
///
/// # Errors
///
/// Returns [Error::JSONSerializationError] or [Error::InvalidQuery] if the
/// expression cannot be encoded.
pub fn encode_query(expression: &Expression) -> Result<String, Error> {
    let query = FilterQuery {
        filter: Some(to_json(expression)?),
    };

    serde_urlencoded::to_string(&query).map_err(|error| Error::InvalidQuery(error.to_string()))
}

/// Decode the expression in the `filter` parameter of a URL query string.
///
/// A leading `?` is ignored, as are other parameters. A missing or empty
/// `filter` parameter decodes to the empty expression.
///
/// # Errors
///
/// Returns [Error::InvalidQuery] if `query` is not a valid query string, or
/// any error from [from_json] for the parameter's contents.
pub fn decode_query(query: &str) -> Result<Expression, Error> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let FilterQuery { filter } = serde_urlencoded::from_str(query)
        .map_err(|error| Error::InvalidQuery(error.to_string()))?;

    match filter {
        Some(json) if !json.trim().is_empty() => from_json(&json),
        _ => Ok(Expression::new()),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        filter::{Condition, ConditionPatch, Expression, FieldKind, IdSet},
    };

    use super::{decode_query, encode_query, from_json, to_json};

    fn sample_expression() -> Expression {
        Expression::new()
            .add_group()
            .update_condition(0, 0, &ConditionPatch::ids(["cat-1", "cat-2"]))
            .add_condition(0)
            .update_condition(0, 1, &ConditionPatch::field(FieldKind::Text))
            .update_condition(0, 1, &ConditionPatch::text("Coffee & cake"))
            .add_group()
            .update_condition(1, 0, &ConditionPatch::field(FieldKind::Account))
            .update_condition(1, 0, &ConditionPatch::ids(["acc-1"]))
    }

    #[test]
    fn writes_wire_format() {
        let expression = Expression::new()
            .add_group()
            .update_condition(0, 0, &ConditionPatch::ids(["cat-1"]))
            .add_group()
            .update_condition(1, 0, &ConditionPatch::field(FieldKind::Account))
            .update_condition(1, 0, &ConditionPatch::ids(["acc-1"]));

        let got = to_json(&expression).unwrap();

        assert_eq!(
            got,
            r#"[{"conditions":[{"field":"category","value":["cat-1"]}]},{"conditions":[{"field":"account","value":["acc-1"]}]}]"#
        );
    }

    #[test]
    fn empty_expression_round_trips() {
        let json = to_json(&Expression::new()).unwrap();

        assert_eq!(json, "[]");
        assert_eq!(from_json(&json), Ok(Expression::new()));
    }

    #[test]
    fn round_trips_mixed_fields() {
        let expression = sample_expression();

        let got = from_json(&to_json(&expression).unwrap()).unwrap();

        assert_eq!(got, expression);
    }

    #[test]
    fn reads_blank_conditions() {
        let got = from_json(
            r#"[{"conditions":[{"field":"payee","value":[]},{"field":"text","value":""}]}]"#,
        )
        .unwrap();

        assert_eq!(got.condition(0, 0), Some(&Condition::Payee(IdSet::new())));
        assert_eq!(got.condition(0, 1), Some(&Condition::Text(String::new())));
    }

    #[test]
    fn rejects_group_without_conditions() {
        let got = from_json(
            r#"[{"conditions":[{"field":"category","value":["c1"]}]},{"conditions":[]}]"#,
        );

        assert_eq!(got, Err(Error::EmptyGroup(1)));
    }

    #[test]
    fn rejects_unknown_field() {
        let got = from_json(r#"[{"conditions":[{"field":"amount","value":["10"]}]}]"#);

        assert!(
            matches!(got, Err(Error::InvalidExpression(_))),
            "got {got:?}, want InvalidExpression"
        );
    }

    #[test]
    fn rejects_value_of_wrong_shape() {
        let got = from_json(r#"[{"conditions":[{"field":"account","value":"acc-1"}]}]"#);

        assert!(
            matches!(got, Err(Error::InvalidExpression(_))),
            "got {got:?}, want InvalidExpression"
        );
    }

    #[test]
    fn embedded_expression_is_validated() {
        #[derive(serde::Deserialize)]
        struct Report {
            #[allow(dead_code)]
            filter: Expression,
        }

        let got = serde_json::from_str::<Report>(r#"{"filter":[{"conditions":[]}]}"#);

        assert!(got.is_err());
    }

    #[test]
    fn query_round_trips() {
        let expression = sample_expression();

        let query = encode_query(&expression).unwrap();

        assert!(query.starts_with("filter="), "got query {query}");
        assert_eq!(decode_query(&query), Ok(expression));
    }

    #[test]
    fn decode_query_ignores_leading_question_mark_and_other_params() {
        let query = format!("?page=2&{}", encode_query(&sample_expression()).unwrap());

        assert_eq!(decode_query(&query), Ok(sample_expression()));
    }

    #[test]
    fn missing_or_blank_filter_param_is_empty_expression() {
        assert_eq!(decode_query(""), Ok(Expression::new()));
        assert_eq!(decode_query("page=3"), Ok(Expression::new()));
        assert_eq!(decode_query("filter="), Ok(Expression::new()));
    }

    #[test]
    fn decode_query_rejects_malformed_filter() {
        let got = decode_query("filter=%5B%7B");

        assert!(
            matches!(got, Err(Error::InvalidExpression(_))),
            "got {got:?}, want InvalidExpression"
        );
    }
}
