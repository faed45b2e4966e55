//! Handler error type with IntoResponse
//!
//! Errors are converted to plain-text responses with appropriate
//! status codes. Storage faults are logged and replaced with a generic
//! message so internal error text never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ValidationError;
use crate::store::StoreError;

/// Handler error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// No account with this name (404)
    NotFound { name: String },

    /// Storage fault (500, logged)
    Storage(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound { name } => (
                StatusCode::NOT_FOUND,
                format!("no account named '{name}'"),
            ),
            Self::Storage(e) => {
                // Log the actual error, return a generic message.
                tracing::error!("storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_owned(),
                )
            }
        };

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { name } => Self::NotFound { name },
            _ => Self::Storage(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            name: "Alice".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound {
            name: "Alice".into(),
        }
        .into();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn storage_error_body_is_generic() {
        let err = ApiError::Storage(StoreError::NotFound {
            name: "never shown".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"an internal error occurred");
    }
}
