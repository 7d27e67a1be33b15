use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkshorty_shortener::ShortenerError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("original_url must be a non-empty string")]
    EmptyOriginalUrl,
    #[error("short code not found")]
    NotFound,
    #[error("could not allocate a short code")]
    CodeSpaceExhausted,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyOriginalUrl => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::CodeSpaceExhausted => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ShortenerError> for ApiError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::CodeSpaceExhausted { .. } => ApiError::CodeSpaceExhausted,
            // A code that fails validation can't name a stored mapping.
            ShortenerError::InvalidShortCode(_) => ApiError::NotFound,
            ShortenerError::Storage(message) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
