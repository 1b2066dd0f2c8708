//! Book catalogue service with a string-encoded filter query language.

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
