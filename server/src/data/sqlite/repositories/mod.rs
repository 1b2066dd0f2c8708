//! SQLite repositories

pub mod book;

pub use book::{create_book, find_books, get_book, update_book};
