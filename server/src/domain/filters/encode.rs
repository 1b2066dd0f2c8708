//! Filter string builder
//!
//! Client-side inverse of the parser: assembles a filter string from
//! human-readable field names and values.

use super::types::Operator;
use super::{CLAUSE_SEPARATOR, DATE_RANGE_FIELD, IDENTIFIER_FIELD, RANGE_SEPARATOR};

/// Builder for the `field_op_value[_and_...]` query format
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    clauses: Vec<String>,
    identifier: Option<String>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(self, field: &str, value: &str) -> Self {
        self.comparison(field, Operator::Equals, value)
    }

    pub fn not_equals(self, field: &str, value: &str) -> Self {
        self.comparison(field, Operator::NotEqual, value)
    }

    /// Inclusive published date range, dates as `YYYY-MM-DD`
    pub fn dates(mut self, start: &str, end: &str) -> Self {
        self.clauses.push(format!(
            "{}_{}_{}{}{}",
            encode_token(DATE_RANGE_FIELD),
            Operator::Equals.token(),
            start.trim(),
            RANGE_SEPARATOR,
            end.trim()
        ));
        self
    }

    /// Lookup by identifier. The encoded query is this single clause; every
    /// other clause, before or after, is left out.
    pub fn identifier(mut self, id: &str) -> Self {
        self.identifier = Some(format!(
            "{}_{}_{}",
            encode_token(IDENTIFIER_FIELD),
            Operator::Equals.token(),
            encode_value(id)
        ));
        self
    }

    fn comparison(mut self, field: &str, operator: Operator, value: &str) -> Self {
        self.clauses.push(format!(
            "{}_{}_{}",
            encode_token(field),
            operator.token(),
            encode_value(value)
        ));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.identifier.is_none() && self.clauses.is_empty()
    }

    /// Encoded filter string, empty when no clause was added
    pub fn encode(&self) -> String {
        match &self.identifier {
            Some(clause) => clause.clone(),
            None => self.clauses.join(CLAUSE_SEPARATOR),
        }
    }
}

/// Field names go over the wire lowercased with dashes between words
fn encode_token(field: &str) -> String {
    field
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn encode_value(value: &str) -> String {
    value.trim().replace(' ', "-")
}
