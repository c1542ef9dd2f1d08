//! Error types and their HTTP mapping.
//!
//! Errors travel through the service and repository layers as [`AppError`].
//! Handlers attach the [`Operation`] they were performing, producing an
//! [`ApiError`] whose response body is fixed per endpoint:
//!
//! | Operation | Status | Body |
//! |---|---|---|
//! | list | 500 | `{"errorMessage": "Error getting the posts."}` |
//! | get | 500 | `{"errorMessage": "Error getting the post."}` |
//! | create | 500 | `{"errorMessage": "Error adding post."}` |
//! | update | 500 | `{"errorMessage": "Error updating post."}` |
//! | delete | 500 | `{"error": "Error deleting post."}` |
//!
//! [`AppError::NotFound`] is the one exception: it maps to
//! 404 `{"errorMessage": "Post not found."}` and is not logged.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Failure raised below the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The request body cannot be turned into a statement.
    #[error("invalid request body: {0}")]
    InvalidPayload(String),

    #[error("post not found")]
    NotFound,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidPayload(errors.to_string())
    }
}

/// The endpoint an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPosts,
    GetPost,
    CreatePost,
    UpdatePost,
    DeletePost,
}

impl Operation {
    /// Fixed message returned to the client on failure.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListPosts => "Error getting the posts.",
            Operation::GetPost => "Error getting the post.",
            Operation::CreatePost => "Error adding post.",
            Operation::UpdatePost => "Error updating post.",
            Operation::DeletePost => "Error deleting post.",
        }
    }

    fn failure_body(self) -> ErrorBody {
        let message = self.failure_message();
        match self {
            Operation::DeletePost => ErrorBody::Error(message),
            _ => ErrorBody::ErrorMessage(message),
        }
    }
}

/// JSON error body. Delete failures use the `error` key, all others `errorMessage`.
#[derive(Debug, Serialize)]
enum ErrorBody {
    #[serde(rename = "errorMessage")]
    ErrorMessage(&'static str),
    #[serde(rename = "error")]
    Error(&'static str),
}

/// An [`AppError`] tagged with the operation that produced it.
#[derive(Debug)]
pub struct ApiError {
    pub operation: Operation,
    pub source: AppError,
}

impl ApiError {
    pub fn new(operation: Operation, source: AppError) -> Self {
        Self { operation, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.source {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::ErrorMessage("Post not found.")),
            )
                .into_response(),
            source => {
                tracing::error!("{source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(self.operation.failure_body()),
                )
                    .into_response()
            }
        }
    }
}

/// Attaches an [`Operation`] to any error convertible into [`AppError`].
pub trait ResultExt<T> {
    fn during(self, operation: Operation) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn during(self, operation: Operation) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(operation, e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Converts `error` into a response while recording everything it logs.
    fn respond_with_logs(error: ApiError) -> (Response, String) {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();

        let response = tracing::subscriber::with_default(subscriber, || error.into_response());
        (response, logs.contents())
    }

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_database_errors_use_operation_message() {
        let cases = [
            (Operation::ListPosts, json!({"errorMessage": "Error getting the posts."})),
            (Operation::GetPost, json!({"errorMessage": "Error getting the post."})),
            (Operation::CreatePost, json!({"errorMessage": "Error adding post."})),
            (Operation::UpdatePost, json!({"errorMessage": "Error updating post."})),
            (Operation::DeletePost, json!({"error": "Error deleting post."})),
        ];

        for (operation, expected) in cases {
            let error = ApiError::new(operation, AppError::Database(sqlx::Error::PoolClosed));
            let (status, body) = render(error).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, expected);
        }
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let error = ApiError::new(Operation::UpdatePost, AppError::NotFound);
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"errorMessage": "Post not found."}));
    }

    #[tokio::test]
    async fn test_invalid_payload_collapses_to_500() {
        let error = ApiError::new(
            Operation::CreatePost,
            AppError::InvalidPayload("missing field `title`".to_string()),
        );
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"errorMessage": "Error adding post."}));
    }

    #[test]
    fn test_database_error_is_logged_before_500() {
        let error = ApiError::new(
            Operation::GetPost,
            AppError::Database(sqlx::Error::Protocol("disk I/O error".to_string())),
        );

        let (response, logs) = respond_with_logs(error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs.contains("ERROR"), "missing ERROR level in: {logs}");
        assert!(logs.contains("disk I/O error"), "missing raw error in: {logs}");
    }

    #[test]
    fn test_invalid_payload_is_logged() {
        let error = ApiError::new(
            Operation::UpdatePost,
            AppError::InvalidPayload("unknown field `id`".to_string()),
        );

        let (response, logs) = respond_with_logs(error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("unknown field `id`"));
    }

    #[test]
    fn test_not_found_is_not_logged() {
        let error = ApiError::new(Operation::UpdatePost, AppError::NotFound);

        let (response, logs) = respond_with_logs(error);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(logs.is_empty(), "unexpected log output: {logs}");
    }

    #[test]
    fn test_during_attaches_operation() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
        let error = result.during(Operation::DeletePost).unwrap_err();

        assert_eq!(error.operation, Operation::DeletePost);
        assert!(matches!(error.source, AppError::Database(_)));
    }
}
