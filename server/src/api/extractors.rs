//! Query and JSON extractors that run `validator` checks after deserializing

use std::ops::Deref;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// Rejection rendered in the same `{error, code, message}` shape as [`ApiError`].
///
/// [`ApiError`]: super::types::ApiError
#[derive(Debug)]
pub struct ValidationRejection {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ValidationRejection {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<QueryRejection> for ValidationRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "QUERY_PARSE_ERROR",
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ValidationRejection {
    // Keeps axum's status: 415 for a missing content type, 413 over the body limit, 422 for bad fields
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            code: "JSON_PARSE_ERROR",
            message: rejection.body_text(),
        }
    }
}

impl From<ValidationErrors> for ValidationRejection {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "VALIDATION_ERROR",
            message: describe(&errors),
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code, reason = %self.message, "Rejected request");
        let error = if self.status == StatusCode::BAD_REQUEST {
            "bad_request"
        } else {
            "invalid_body"
        };
        (
            self.status,
            Json(serde_json::json!({
                "error": error,
                "code": self.code,
                "message": self.message
            })),
        )
            .into_response()
    }
}

/// One message per failed field, sorted so output is stable
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{}: validation failed", field),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Query string deserialized into `T` and validated.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// JSON body deserialized into `T` and validated.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
