//! Repository traits
//!
//! The API layer talks to storage only through these traits so handlers can be
//! exercised against any backend.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::domain::books::Book;
use crate::domain::filters::FilterChain;

/// Persistence of book records
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book; `DataError::Conflict` when the ISBN is taken
    async fn create_book(&self, book: &Book) -> Result<Book, DataError>;

    /// Overwrite the book with the same ISBN; `DataError::NotFound` when absent
    async fn update_book(&self, book: &Book) -> Result<Book, DataError>;

    async fn get_book(&self, isbn: &str) -> Result<Option<Book>, DataError>;

    /// Books matching every predicate of the chain
    async fn find_books(&self, filters: &FilterChain) -> Result<Vec<Book>, DataError>;
}
