use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use badin_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that cross the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(String),

    #[error("storage error")]
    Storage(#[source] StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> ApiError {
        match err {
            StoreError::NotFound(kind) => ApiError::NotFound(kind),
            StoreError::UnsupportedImageType(_) | StoreError::ImageTooLarge { .. } => {
                ApiError::Validation(err.to_string())
            }
            StoreError::InvalidFilename(_) => ApiError::Validation(err.to_string()),
            other => ApiError::Storage(other),
        }
    }
}

impl From<badin_content::ChangeError> for ApiError {
    fn from(err: badin_content::ChangeError) -> ApiError {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(source) => {
                error!(%source, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
