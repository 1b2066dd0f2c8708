//! Filter string parsing
//!
//! Decodes `field_op_value[_and_field_op_value]*` into a [`FilterChain`].

use std::sync::LazyLock;

use regex::Regex;

use super::chain::FilterChain;
use super::error::FilterError;
use super::policy::retain_identifier;
use super::schema::FilterSchema;
use super::types::{Operator, Predicate};
use super::{CLAUSE_SEPARATOR, DATE_RANGE_FIELD, IDENTIFIER_FIELD, RANGE_SEPARATOR};
use crate::utils::string::to_pascal_case;

/// Values made only of digits and dashes (dates, numeric ids) keep their dashes
static NUMERIC_OR_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9-]+$").expect("Invalid regex"));

/// Parse a filter string into a chain of predicates.
///
/// `validate_field` receives the normalized field name; `validate_value`
/// receives the normalized field name and the sanitized value. The identifier
/// override is applied before returning. Errors are terminal: no partial
/// chain is ever returned.
pub fn parse_filters<F, V>(
    raw: &str,
    validate_field: F,
    validate_value: V,
) -> Result<FilterChain, FilterError>
where
    F: Fn(&str) -> bool,
    V: Fn(&str, &str) -> bool,
{
    let chain = parse_clauses(raw, &validate_field, &validate_value)?;

    if chain.is_empty() {
        return Err(FilterError::NoFilters);
    }

    let chain = retain_identifier(chain, IDENTIFIER_FIELD)?;
    tracing::debug!(filters = chain.len(), "Parsed filter chain");
    Ok(chain)
}

/// Parse using a [`FilterSchema`] implementation as both validators
pub fn parse_with_schema<S: FilterSchema>(raw: &str, schema: &S) -> Result<FilterChain, FilterError> {
    parse_filters(
        raw,
        |field| schema.has_field(field),
        |field, value| schema.accepts_value(field, value),
    )
}

fn parse_clauses<F, V>(
    raw: &str,
    validate_field: &F,
    validate_value: &V,
) -> Result<FilterChain, FilterError>
where
    F: Fn(&str) -> bool,
    V: Fn(&str, &str) -> bool,
{
    let mut chain = FilterChain::new();

    for clause in raw.split(CLAUSE_SEPARATOR) {
        let predicate = parse_clause(clause, validate_field, validate_value)?;
        chain.push(predicate);
    }

    Ok(chain)
}

fn parse_clause<F, V>(
    clause: &str,
    validate_field: &F,
    validate_value: &V,
) -> Result<Predicate, FilterError>
where
    F: Fn(&str) -> bool,
    V: Fn(&str, &str) -> bool,
{
    let parts: Vec<&str> = clause.split('_').collect();
    let [field, operator, value] = parts.as_slice() else {
        return Err(FilterError::WrongPartCount);
    };

    let field = to_pascal_case(field);
    tracing::trace!(field = %field, operator = %operator, value = %value, "Parsing filter clause");

    // The operator segment is positional only for date ranges
    if field == DATE_RANGE_FIELD {
        return parse_date_range(value);
    }

    if !validate_field(&field) {
        return Err(FilterError::UnknownField(field));
    }

    let operator =
        Operator::from_token(operator).ok_or_else(|| FilterError::UnknownOperator(operator.to_string()))?;

    let value = sanitize_value(value);

    if !validate_value(&field, &value) {
        return Err(FilterError::TypeMismatch(field));
    }

    Predicate::comparison(&field, operator, value)
}

fn parse_date_range(value: &str) -> Result<Predicate, FilterError> {
    let parts: Vec<&str> = value.split(RANGE_SEPARATOR).collect();
    match parts.as_slice() {
        [start, end] => Ok(Predicate::date_range(*start, *end)),
        _ => Err(FilterError::InvalidDateRange),
    }
}

/// Turn `-` back into spaces unless the value is purely digits and dashes
pub fn sanitize_value(value: &str) -> String {
    if NUMERIC_OR_DATE.is_match(value) {
        value.to_string()
    } else {
        value.replace('-', " ")
    }
}
