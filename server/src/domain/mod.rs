//! Domain logic
//!
//! - `filters` - filter query language and SQL fragment rendering
//! - `books` - book resource and its filter schema

pub mod books;
pub mod filters;
