//! BookRepository trait implementation for SQLite

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::traits::BookRepository;
use crate::domain::books::Book;
use crate::domain::filters::FilterChain;

use super::SqliteService;
use super::repositories::book;

#[async_trait]
impl BookRepository for Arc<SqliteService> {
    async fn create_book(&self, new_book: &Book) -> Result<Book, DataError> {
        book::create_book(self.pool(), new_book)
            .await
            .map_err(Into::into)
    }

    async fn update_book(&self, updated: &Book) -> Result<Book, DataError> {
        book::update_book(self.pool(), updated)
            .await
            .map_err(Into::into)
    }

    async fn get_book(&self, isbn: &str) -> Result<Option<Book>, DataError> {
        book::get_book(self.pool(), isbn).await.map_err(Into::into)
    }

    async fn find_books(&self, filters: &FilterChain) -> Result<Vec<Book>, DataError> {
        book::find_books(self.pool(), filters)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repository_maps_errors() {
        let repo: Arc<SqliteService> = Arc::new(SqliteService::in_memory().await.unwrap());
        let book = Book {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            isbn: "42".to_string(),
            published_date: "1815-12-23".parse().unwrap(),
            edition: 1,
            description: String::new(),
            genre: "novel".to_string(),
        };

        repo.create_book(&book).await.unwrap();
        let err = repo.create_book(&book).await.unwrap_err();
        assert!(matches!(err, DataError::Conflict(_)));

        let mut ghost = book.clone();
        ghost.isbn = "43".to_string();
        let err = repo.update_book(&ghost).await.unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));

        assert_eq!(repo.get_book("42").await.unwrap(), Some(book));
    }
}
