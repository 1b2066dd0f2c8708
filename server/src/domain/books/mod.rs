//! Book resource: record type and filter schema

mod schema;
mod types;

pub use schema::{BOOK_FIELDS, BookSchema, FieldKind, validate_book_field, validate_book_value};
pub use types::{BOOK_DATE_FORMAT, Book, BookDate, BookDateError};
