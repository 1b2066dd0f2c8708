//! Filterable fields of the book resource

use crate::domain::filters::FilterSchema;

use super::types::BookDate;

/// Declared type of a filterable book field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    SmallUnsigned,
    Date,
}

/// Filterable fields as normalized by the parser, with their types
pub const BOOK_FIELDS: &[(&str, FieldKind)] = &[
    ("Title", FieldKind::Text),
    ("Author", FieldKind::Text),
    ("Isbn", FieldKind::Text),
    ("PublishedDate", FieldKind::Date),
    ("Edition", FieldKind::SmallUnsigned),
    ("Description", FieldKind::Text),
    ("Genre", FieldKind::Text),
];

fn field_kind(field: &str) -> Option<FieldKind> {
    BOOK_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, kind)| *kind)
}

/// Whether `field` names a book attribute
pub fn validate_book_field(field: &str) -> bool {
    field_kind(field).is_some()
}

/// Whether `value` fits the declared type of `field`
pub fn validate_book_value(field: &str, value: &str) -> bool {
    match field_kind(field) {
        Some(FieldKind::Text) => true,
        Some(FieldKind::SmallUnsigned) => value.parse::<u8>().is_ok(),
        Some(FieldKind::Date) => value.parse::<BookDate>().is_ok(),
        None => false,
    }
}

/// [`FilterSchema`] for the book resource
#[derive(Debug, Clone, Copy, Default)]
pub struct BookSchema;

impl FilterSchema for BookSchema {
    fn has_field(&self, field: &str) -> bool {
        validate_book_field(field)
    }

    fn accepts_value(&self, field: &str, value: &str) -> bool {
        validate_book_value(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::{FilterError, parse_with_schema};

    #[test]
    fn test_known_fields() {
        for (name, _) in BOOK_FIELDS {
            assert!(validate_book_field(name), "{name} should be known");
        }
        assert!(!validate_book_field("title"));
        assert!(!validate_book_field("Dates"));
        assert!(!validate_book_field("Invalidfield"));
    }

    #[test]
    fn test_edition_values() {
        assert!(validate_book_value("Edition", "0"));
        assert!(validate_book_value("Edition", "255"));
        assert!(!validate_book_value("Edition", "256"));
        assert!(!validate_book_value("Edition", "-1"));
        assert!(!validate_book_value("Edition", "William Shakespeare"));
    }

    #[test]
    fn test_date_values() {
        assert!(validate_book_value("PublishedDate", "2020-01-01"));
        assert!(!validate_book_value("PublishedDate", "2020 01 01"));
        assert!(!validate_book_value("PublishedDate", "yesterday"));
        assert!(!validate_book_value("PublishedDate", "2020-1-1"));
    }

    #[test]
    fn test_text_and_unknown_values() {
        assert!(validate_book_value("Title", "anything at all"));
        assert!(validate_book_value("Isbn", "978-0-14"));
        assert!(!validate_book_value("Publisher", "Penguin"));
    }

    #[test]
    fn test_schema_drives_parser() {
        let chain = parse_with_schema("author_eq_Mary-Shelley_and_edition_eq_3", &BookSchema).unwrap();
        let (sql, params) = chain.render();
        assert_eq!(sql, "author = ? AND edition = ?");
        assert_eq!(params, vec!["Mary Shelley", "3"]);

        let err = parse_with_schema("edition_eq_third", &BookSchema).unwrap_err();
        assert_eq!(err, FilterError::TypeMismatch("Edition".to_string()));

        let err = parse_with_schema("published-date_eq_soon", &BookSchema).unwrap_err();
        assert_eq!(err.to_string(), "invalid filter: PublishedDate has a mismatching type");

        let err = parse_with_schema("published-date_eq_2020-1-1", &BookSchema).unwrap_err();
        assert_eq!(err, FilterError::TypeMismatch("PublishedDate".to_string()));
    }
}
