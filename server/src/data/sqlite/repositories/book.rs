//! Book repository for SQLite operations

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::domain::books::{Book, BookDate};
use crate::domain::filters::FilterChain;

const BOOK_COLUMNS: &str = "title, author, isbn, published_date, edition, description, genre";

type BookTuple = (String, String, String, String, i64, String, String);

fn book_from_row(row: BookTuple) -> Result<Book, SqliteError> {
    let (title, author, isbn, published_date, edition, description, genre) = row;

    let published_date = published_date.parse::<BookDate>().map_err(|e| {
        SqliteError::Corrupt(format!(
            "book {} has invalid published_date {:?}: {}",
            isbn, published_date, e
        ))
    })?;
    let edition = u8::try_from(edition).map_err(|_| {
        SqliteError::Corrupt(format!("book {} has out of range edition {}", isbn, edition))
    })?;

    Ok(Book {
        title,
        author,
        isbn,
        published_date,
        edition,
        description,
        genre,
    })
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Insert a new book. A duplicate ISBN is a conflict.
pub async fn create_book(pool: &SqlitePool, book: &Book) -> Result<Book, SqliteError> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query(
        "INSERT INTO books (title, author, isbn, published_date, edition, description, genre, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&book.title)
    .bind(&book.author)
    .bind(&book.isbn)
    .bind(book.published_date.to_string())
    .bind(i64::from(book.edition))
    .bind(&book.description)
    .bind(&book.genre)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {
            tracing::debug!(isbn = %book.isbn, "Created book");
            Ok(book.clone())
        }
        Err(e) if is_unique_violation(&e) => Err(SqliteError::Conflict(format!(
            "Book with ISBN {} already exists",
            book.isbn
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Replace every attribute of the book with the same ISBN
pub async fn update_book(pool: &SqlitePool, book: &Book) -> Result<Book, SqliteError> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query(
        "UPDATE books SET title = ?, author = ?, published_date = ?, edition = ?, description = ?, genre = ?, updated_at = ? WHERE isbn = ?",
    )
    .bind(&book.title)
    .bind(&book.author)
    .bind(book.published_date.to_string())
    .bind(i64::from(book.edition))
    .bind(&book.description)
    .bind(&book.genre)
    .bind(now)
    .bind(&book.isbn)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(SqliteError::NotFound(format!(
            "Book with ISBN {} does not exist",
            book.isbn
        )));
    }

    tracing::debug!(isbn = %book.isbn, "Updated book");
    Ok(book.clone())
}

/// Get a book by ISBN
pub async fn get_book(pool: &SqlitePool, isbn: &str) -> Result<Option<Book>, SqliteError> {
    let sql = format!("SELECT {} FROM books WHERE isbn = ?", BOOK_COLUMNS);
    let row = sqlx::query_as::<_, BookTuple>(&sql)
        .bind(isbn)
        .fetch_optional(pool)
        .await?;

    row.map(book_from_row).transpose()
}

/// Run a parsed filter chain against the books table.
///
/// The chain's fragment becomes the `WHERE` clause and its parameters are
/// bound in order. An empty chain matches every book.
pub async fn find_books(pool: &SqlitePool, filters: &FilterChain) -> Result<Vec<Book>, SqliteError> {
    let (fragment, params) = filters.render();

    let sql = if fragment.is_empty() {
        format!("SELECT {} FROM books ORDER BY title, isbn", BOOK_COLUMNS)
    } else {
        format!(
            "SELECT {} FROM books WHERE {} ORDER BY title, isbn",
            BOOK_COLUMNS, fragment
        )
    };
    tracing::trace!(%sql, params = params.len(), "Finding books");

    let mut query = sqlx::query_as::<_, BookTuple>(&sql);
    for param in params {
        query = query.bind(param);
    }

    let rows = query.fetch_all(pool).await?;
    rows.into_iter().map(book_from_row).collect()
}
