use thiserror::Error;

/// Common error type shared by the data-file crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<String> for CommonError {
    fn from(s: String) -> Self {
        CommonError::Generic(s)
    }
}

impl From<&str> for CommonError {
    fn from(s: &str) -> Self {
        CommonError::Generic(s.to_string())
    }
}
