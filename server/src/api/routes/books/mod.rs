//! Book API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::types::{ApiError, MessageResponse};
use crate::data::BookRepository;
use crate::domain::books::{Book, BookSchema};
use crate::domain::filters::parse_with_schema;

use types::{BookListResponse, FindBooksQuery};

/// Shared state for Books API endpoints
#[derive(Clone)]
pub struct BooksApiState {
    pub repository: Arc<dyn BookRepository>,
}

/// Build Books API routes
pub fn routes(repository: Arc<dyn BookRepository>) -> Router<()> {
    let state = BooksApiState { repository };

    Router::new()
        .route("/", get(find_books).post(create_book).put(update_book))
        .with_state(state)
}

/// Find books matching a filter
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    params(
        ("filter" = String, Query, description = "Filter, e.g. author_eq_William-Shakespeare_and_edition_ne_2")
    ),
    responses(
        (status = 200, description = "Matching books", body = BookListResponse),
        (status = 400, description = "Missing or invalid filter")
    )
)]
pub async fn find_books(
    State(state): State<BooksApiState>,
    ValidatedQuery(query): ValidatedQuery<FindBooksQuery>,
) -> Result<Json<BookListResponse>, ApiError> {
    let raw = query.filter().ok_or_else(|| {
        ApiError::bad_request("MISSING_FILTER", "The filter query parameter is required")
    })?;

    let chain = parse_with_schema(raw, &BookSchema)?;
    let data = state.repository.find_books(&chain).await?;

    tracing::debug!(filter = raw, results = data.len(), "Found books");
    Ok(Json(BookListResponse { data }))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = MessageResponse),
        (status = 400, description = "Invalid book"),
        (status = 409, description = "A book with this ISBN already exists")
    )
)]
pub async fn create_book(
    State(state): State<BooksApiState>,
    ValidatedJson(book): ValidatedJson<Book>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let created = state.repository.create_book(&book).await?;

    tracing::info!(isbn = %created.isbn, "Book created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::success(format!(
            "Created book {}",
            created.summary()
        ))),
    ))
}

/// Update a book identified by its ISBN
#[utoipa::path(
    put,
    path = "/api/v1/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid book"),
        (status = 404, description = "No book with this ISBN")
    )
)]
pub async fn update_book(
    State(state): State<BooksApiState>,
    ValidatedJson(book): ValidatedJson<Book>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated = state.repository.update_book(&book).await?;

    tracing::info!(isbn = %updated.isbn, "Book updated");
    Ok(Json(MessageResponse::success(format!(
        "Updated book {}",
        updated.summary()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use crate::data::SqliteService;

    async fn test_router() -> Router {
        let service = Arc::new(SqliteService::in_memory().await.unwrap());
        routes(Arc::new(service))
    }

    fn json_request(method: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn hamlet() -> serde_json::Value {
        serde_json::json!({
            "title": "Hamlet",
            "author": "William Shakespeare",
            "isbn": "9780141013077",
            "published_date": "1603-01-01",
            "edition": 2,
            "description": "Prince of Denmark",
            "genre": "tragedy"
        })
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let router = test_router().await;

        let response = router
            .clone()
            .oneshot(json_request("POST", hamlet()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "status": "success",
                "code": 200,
                "metadata": "Created book Hamlet written by William Shakespeare with ISBN: 9780141013077"
            })
        );

        let response = router
            .oneshot(get("/?filter=author_eq_William-Shakespeare"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0], hamlet());
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let router = test_router().await;
        router
            .clone()
            .oneshot(json_request("POST", hamlet()))
            .await
            .unwrap();

        let response = router
            .oneshot(json_request("POST", hamlet()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["code"], "BOOK_EXISTS");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_book() {
        let router = test_router().await;
        let mut book = hamlet();
        book["isbn"] = serde_json::json!("");

        let response = router.oneshot(json_request("POST", book)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_date() {
        let router = test_router().await;
        let mut book = hamlet();
        book["published_date"] = serde_json::json!("01/01/1603");

        let response = router.oneshot(json_request("POST", book)).await.unwrap();
        assert!(response.status().is_client_error());
        assert_eq!(body_json(response).await["code"], "JSON_PARSE_ERROR");
    }

    #[tokio::test]
    async fn test_update_book() {
        let router = test_router().await;
        router
            .clone()
            .oneshot(json_request("POST", hamlet()))
            .await
            .unwrap();

        let mut book = hamlet();
        book["edition"] = serde_json::json!(3);
        let response = router
            .clone()
            .oneshot(json_request("PUT", book))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["metadata"],
            "Updated book Hamlet written by William Shakespeare with ISBN: 9780141013077"
        );

        let response = router
            .oneshot(get("/?filter=isbn_eq_9780141013077"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"][0]["edition"], 3);
    }

    #[tokio::test]
    async fn test_update_unknown_book() {
        let router = test_router().await;
        let response = router
            .oneshot(json_request("PUT", hamlet()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "BOOK_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_find_requires_filter() {
        let router = test_router().await;

        let response = router.clone().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "MISSING_FILTER");

        let response = router.oneshot(get("/?filter=")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_find_invalid_filter() {
        let router = test_router().await;

        let response = router
            .clone()
            .oneshot(get("/?filter=edition_eq_William-Shakespeare"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_FILTER_VALUE");
        assert_eq!(json["message"], "invalid filter: Edition has a mismatching type");

        let response = router
            .oneshot(get("/?filter=title_eq_x_and_isbn_ne_1"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_FILTER_IDENTIFIER");
        assert_eq!(json["message"], "invalid filter: ne not admitted for isbn filter");
    }

    #[tokio::test]
    async fn test_find_date_range() {
        let router = test_router().await;
        router
            .clone()
            .oneshot(json_request("POST", hamlet()))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(get("/?filter=dates_eq_1600-01-01-to-1610-12-31"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

        let response = router
            .oneshot(get("/?filter=dates_eq_1700-01-01-to-1710-12-31"))
            .await
            .unwrap();
        assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
    }
}
