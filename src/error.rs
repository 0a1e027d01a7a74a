//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use std::any::Any;

use axum::{
    Json,
    body::Body,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{Response as HttpResponse, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned for every internal failure. Details only go to the log.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Errors reported by a [`TransactionStore`](crate::store::TransactionStore).
///
/// "Record not found" is not an error here; stores report it through
/// `Option`/`bool` return values.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store is not able to serve requests.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation Errors**: missing or malformed input
/// - **Resource Errors**: requested transaction does not exist
/// - **Store Errors**: anything the persistence layer reports
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Request body is not valid JSON for the endpoint.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Query string cannot be deserialized (e.g. a repeated key).
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    /// No transaction with the requested id exists.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction not found")]
    NotFound,

    /// No route matches the request path.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Route not found")]
    RouteNotFound,

    /// The store failed.
    ///
    /// Returns HTTP 500 and hides details from the client.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Validation` / `InvalidBody` / `InvalidQuery` → 400 Bad Request
/// - `NotFound` / `RouteNotFound` → 404 Not Found
/// - `Store` → 500 Internal Server Error (logged, generic message)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Validation(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::InvalidBody(ref rejection) => (
                StatusCode::BAD_REQUEST,
                "invalid_request",
                rejection.body_text(),
            ),
            AppError::InvalidQuery(ref rejection) => (
                StatusCode::BAD_REQUEST,
                "invalid_request",
                rejection.body_text(),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::RouteNotFound => {
                (StatusCode::NOT_FOUND, "route_not_found", self.to_string())
            }
            AppError::Store(ref err) => {
                tracing::error!(error = %err, "Request failed with a store error");
                internal_error_parts()
            }
        };

        error_response(status, code, message)
    }
}

fn internal_error_parts() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        GENERIC_ERROR_MESSAGE.to_string(),
    )
}

fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    let body = Json(json!({
        "error": {
            "code": code,
            "message": message
        }
    }));

    (status, body).into_response()
}

/// Render a handler panic as the generic 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> HttpResponse<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    let (status, code, message) = internal_error_parts();
    error_response(status, code, message)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::{AppError, GENERIC_ERROR_MESSAGE, StoreError};

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_message() {
        let response = AppError::Validation("All fields are required".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "invalid_request");
        assert_eq!(body["error"]["message"], "All fields are required");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn store_errors_do_not_leak_details() {
        let err = StoreError::Unavailable("connection refused to 10.0.0.3".to_string());
        let response = AppError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], GENERIC_ERROR_MESSAGE);
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[tokio::test]
    async fn panics_render_generic_500() {
        let response = super::handle_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"]["message"],
            GENERIC_ERROR_MESSAGE
        );
    }
}
