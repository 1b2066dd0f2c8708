//! Filter query language
//!
//! A filter string is a `_and_`-joined list of `field_op_value` clauses, for
//! example `author_eq_William-Shakespeare_and_edition_ne_2`. Parsing validates
//! each clause against a resource schema and yields a [`FilterChain`] that
//! renders to a parameterized SQL `WHERE` fragment.
//!
//! Two clauses are special:
//! - `dates_<any>_<start>-to-<end>` is an inclusive range on the published date
//! - an `isbn_eq_<id>` clause discards every other clause

mod chain;
mod encode;
mod error;
mod parser;
mod policy;
mod schema;
mod types;

pub use chain::FilterChain;
pub use encode::FilterQuery;
pub use error::FilterError;
pub use parser::{parse_filters, parse_with_schema, sanitize_value};
pub use policy::retain_identifier;
pub use schema::FilterSchema;
pub use types::{Operator, Predicate};

/// Virtual field that introduces a date range clause
pub const DATE_RANGE_FIELD: &str = "Dates";

/// Column a date range constrains
pub const DATE_RANGE_COLUMN: &str = "published_date";

/// Field whose equality clause overrides all other clauses
pub const IDENTIFIER_FIELD: &str = "Isbn";

pub const CLAUSE_SEPARATOR: &str = "_and_";
pub const RANGE_SEPARATOR: &str = "-to-";
