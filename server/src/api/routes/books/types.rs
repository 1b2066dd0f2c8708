//! Book API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::books::Book;

/// Maximum accepted length of a filter string
pub const MAX_FILTER_LENGTH: u64 = 1024;

/// Query params for finding books
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FindBooksQuery {
    /// Filter in `field_op_value[_and_field_op_value]*` form
    #[validate(length(max = MAX_FILTER_LENGTH, message = "Filter must be at most 1024 characters"))]
    pub filter: Option<String>,
}

impl FindBooksQuery {
    /// The filter string, if present and not blank
    pub fn filter(&self) -> Option<&str> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

/// Books matching a filter
#[derive(Debug, Serialize, ToSchema)]
pub struct BookListResponse {
    pub data: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_blank_is_missing() {
        let query = FindBooksQuery {
            filter: Some("   ".to_string()),
        };
        assert_eq!(query.filter(), None);

        let query = FindBooksQuery { filter: None };
        assert_eq!(query.filter(), None);

        let query = FindBooksQuery {
            filter: Some(" title_eq_Emma ".to_string()),
        };
        assert_eq!(query.filter(), Some("title_eq_Emma"));
    }

    #[test]
    fn test_filter_length_validated() {
        let query = FindBooksQuery {
            filter: Some("a".repeat(MAX_FILTER_LENGTH as usize + 1)),
        };
        let err = query.validate().unwrap_err();
        assert!(err.to_string().contains("at most 1024 characters"));

        let query = FindBooksQuery {
            filter: Some("a".repeat(MAX_FILTER_LENGTH as usize)),
        };
        assert!(query.validate().is_ok());
    }
}
