//! Filter type definitions
//!
//! Operators and the predicates a filter string is decoded into.

use std::fmt;

use super::DATE_RANGE_COLUMN;
use super::error::FilterError;
use crate::utils::string::{to_pascal_case, to_snake_case};

/// Filter operators as they appear in the wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Clause separator (`_and_`), never rendered
    And,
    Equals,
    NotEqual,
}

impl Operator {
    /// Token used in the filter grammar
    pub const fn token(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Equals => "eq",
            Self::NotEqual => "ne",
        }
    }

    /// SQL comparison symbol, `None` for the separator
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::And => None,
            Self::Equals => Some("="),
            Self::NotEqual => Some("<>"),
        }
    }

    /// Resolve a comparison token. The separator is not a comparison and is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "eq" => Some(Self::Equals),
            "ne" => Some(Self::NotEqual),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single decoded filter clause.
///
/// Only built through [`Predicate::comparison`] and [`Predicate::date_range`],
/// so the field is always normalized and the operator always renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate(Clause);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Clause {
    /// `<field> = ?` or `<field> <> ?`
    Comparison {
        field: String,
        operator: Operator,
        symbol: &'static str,
        value: String,
    },
    /// `<field> >= ? AND <field> <= ?`
    DateRange {
        field: String,
        start: String,
        end: String,
    },
}

impl Predicate {
    /// Build a comparison. The field is normalized to UpperCamelCase here and
    /// never again; `Operator::And` is refused.
    pub fn comparison(
        field: &str,
        operator: Operator,
        value: impl Into<String>,
    ) -> Result<Self, FilterError> {
        let symbol = operator
            .symbol()
            .ok_or_else(|| FilterError::UnknownOperator(operator.token().to_string()))?;
        Ok(Self(Clause::Comparison {
            field: to_pascal_case(field),
            operator,
            symbol,
            value: value.into(),
        }))
    }

    /// Build a date range over the published date column
    pub fn date_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self(Clause::DateRange {
            field: DATE_RANGE_COLUMN.to_string(),
            start: start.into(),
            end: end.into(),
        })
    }

    pub fn field_name(&self) -> &str {
        match &self.0 {
            Clause::Comparison { field, .. } => field,
            Clause::DateRange { field, .. } => field,
        }
    }

    /// Comparison operator, if this is a comparison
    pub fn operator(&self) -> Option<Operator> {
        match &self.0 {
            Clause::Comparison { operator, .. } => Some(*operator),
            Clause::DateRange { .. } => None,
        }
    }

    /// Compared value, if this is a comparison
    pub fn value(&self) -> Option<&str> {
        match &self.0 {
            Clause::Comparison { value, .. } => Some(value),
            Clause::DateRange { .. } => None,
        }
    }

    /// Inclusive `(start, end)` bounds, if this is a date range
    pub fn range(&self) -> Option<(&str, &str)> {
        match &self.0 {
            Clause::Comparison { .. } => None,
            Clause::DateRange { start, end, .. } => Some((start, end)),
        }
    }

    /// Render the SQL fragment with `?` placeholders and its bound parameters.
    ///
    /// Values only ever travel as parameters, never inside the fragment.
    pub fn render(&self) -> (String, Vec<String>) {
        match &self.0 {
            Clause::Comparison {
                field,
                symbol,
                value,
                ..
            } => (
                format!("{} {} ?", to_snake_case(field), symbol),
                vec![value.clone()],
            ),
            Clause::DateRange { field, start, end } => {
                let column = to_snake_case(field);
                (
                    format!("{} >= ? AND {} <= ?", column, column),
                    vec![start.clone(), end.clone()],
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens_and_symbols() {
        assert_eq!(Operator::And.token(), "and");
        assert_eq!(Operator::Equals.token(), "eq");
        assert_eq!(Operator::NotEqual.token(), "ne");
        assert_eq!(Operator::And.symbol(), None);
        assert_eq!(Operator::Equals.symbol(), Some("="));
        assert_eq!(Operator::NotEqual.symbol(), Some("<>"));
    }

    #[test]
    fn test_operator_from_token() {
        assert_eq!(Operator::from_token("eq"), Some(Operator::Equals));
        assert_eq!(Operator::from_token("ne"), Some(Operator::NotEqual));
        assert_eq!(Operator::from_token("and"), None);
        assert_eq!(Operator::from_token("EQ"), None);
        assert_eq!(Operator::from_token("invalidop"), None);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::NotEqual.to_string(), "ne");
    }

    #[test]
    fn test_comparison_normalizes_field() {
        let p = Predicate::comparison("published-date", Operator::NotEqual, "2020-01-01").unwrap();
        assert_eq!(p.field_name(), "PublishedDate");
        assert_eq!(p.operator(), Some(Operator::NotEqual));
    }

    #[test]
    fn test_comparison_rejects_separator() {
        let err = Predicate::comparison("title", Operator::And, "x").unwrap_err();
        assert_eq!(err, FilterError::UnknownOperator("and".to_string()));
    }

    #[test]
    fn test_comparison_render() {
        let p = Predicate::comparison("Title", Operator::Equals, "William Shakespeare").unwrap();
        let (sql, params) = p.render();
        assert_eq!(sql, "title = ?");
        assert_eq!(params, vec!["William Shakespeare".to_string()]);

        let p = Predicate::comparison("PublishedDate", Operator::NotEqual, "2020-01-01").unwrap();
        assert_eq!(p.render().0, "published_date <> ?");
    }

    #[test]
    fn test_comparison_value_never_in_fragment() {
        let p = Predicate::comparison("Title", Operator::Equals, "x' OR '1'='1").unwrap();
        let (sql, params) = p.render();
        assert_eq!(sql, "title = ?");
        assert_eq!(params, vec!["x' OR '1'='1".to_string()]);
    }

    #[test]
    fn test_date_range_render_uses_column_on_both_sides() {
        let p = Predicate::date_range("2020-01-01", "2021-12-31");
        assert_eq!(p.field_name(), "published_date");
        assert_eq!(p.operator(), None);
        let (sql, params) = p.render();
        assert_eq!(sql, "published_date >= ? AND published_date <= ?");
        assert_eq!(params, vec!["2020-01-01".to_string(), "2021-12-31".to_string()]);
        assert_eq!(p.range(), Some(("2020-01-01", "2021-12-31")));
        assert_eq!(p.value(), None);
    }

    #[test]
    fn test_comparison_field_cannot_carry_sql() {
        let p = Predicate::comparison("title;drop table x--", Operator::Equals, "a").unwrap();
        assert_eq!(p.field_name(), "TitleDropTableX");
        assert_eq!(p.value(), Some("a"));
        assert_eq!(p.render().0, "title_drop_table_x = ?");
    }
}
