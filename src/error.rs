use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;

#[derive(Debug)]
pub enum AppError {
    /// Request body is not well-formed JSON of the expected shape.
    Decode(String),
    /// `misc_data` could not be serialized for storage.
    Encode(serde_json::Error),
    NotFound(String),
    Store(StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Decode(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Encode(err) => write!(f, "Encode Error: {err}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Encode(_) | AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Decode(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Encode(err) => {
                tracing::error!("Encode error: {err}");
                "Error encoding misc data".to_string()
            }
            AppError::Store(err) => {
                tracing::error!("Store error: {err}");
                "Internal server error".to_string()
            }
        };

        let body = json!({ "error": message });
        (self.status(), axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
