//! Post-parse identifier override
//!
//! When a chain filters on the resource identifier, that single equality is
//! the whole lookup: every other predicate is dropped.

use super::chain::FilterChain;
use super::error::FilterError;
use super::types::Operator;
use crate::utils::string::to_snake_case;

/// Keep only the identifier predicate if the chain has one.
///
/// The identifier must be compared with `eq`; any other operator rejects the
/// whole chain.
pub fn retain_identifier(chain: FilterChain, identifier: &str) -> Result<FilterChain, FilterError> {
    let Some(predicate) = chain.get(identifier).cloned() else {
        return Ok(chain);
    };

    match predicate.operator() {
        Some(Operator::Equals) => {
            tracing::debug!(
                field = identifier,
                dropped = chain.len() - 1,
                "Identifier filter overrides other filters"
            );
            let mut single = FilterChain::new();
            single.push(predicate);
            Ok(single)
        }
        other => Err(FilterError::OperatorNotAdmitted {
            operator: other.map(|op| op.token()).unwrap_or_default().to_string(),
            field: to_snake_case(identifier),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::Predicate;
    use super::*;

    fn chain_of(predicates: Vec<Predicate>) -> FilterChain {
        let mut chain = FilterChain::new();
        for p in predicates {
            chain.push(p);
        }
        chain
    }

    #[test]
    fn test_no_identifier_keeps_chain() {
        let chain = chain_of(vec![
            Predicate::comparison("Title", Operator::Equals, "pippo").unwrap(),
            Predicate::date_range("2020-01-01", "2020-12-31"),
        ]);
        let result = retain_identifier(chain.clone(), "Isbn").unwrap();
        assert_eq!(result, chain);
    }

    #[test]
    fn test_identifier_eq_drops_others() {
        let chain = chain_of(vec![
            Predicate::comparison("PublishedDate", Operator::NotEqual, "2020-01-01").unwrap(),
            Predicate::comparison("Title", Operator::Equals, "pippo").unwrap(),
            Predicate::comparison("Isbn", Operator::Equals, "1234").unwrap(),
        ]);
        let result = retain_identifier(chain, "Isbn").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.iter().next().unwrap(),
            &Predicate::comparison("Isbn", Operator::Equals, "1234").unwrap()
        );
    }

    #[test]
    fn test_identifier_ne_rejected() {
        let chain = chain_of(vec![
            Predicate::comparison("Title", Operator::Equals, "pippo").unwrap(),
            Predicate::comparison("Isbn", Operator::NotEqual, "1234").unwrap(),
        ]);
        let err = retain_identifier(chain, "Isbn").unwrap_err();
        assert_eq!(err.to_string(), "invalid filter: ne not admitted for isbn filter");
    }
}
