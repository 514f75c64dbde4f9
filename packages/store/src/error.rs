use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("invalid filename: {0}")]
    InvalidFilename(String),
}

impl From<badin_common::CommonError> for StoreError {
    fn from(err: badin_common::CommonError) -> StoreError {
        match err {
            badin_common::CommonError::Io(e) => StoreError::Io(e),
            badin_common::CommonError::Json(e) => StoreError::Json(e),
            badin_common::CommonError::Generic(msg) => {
                StoreError::Io(std::io::Error::other(msg))
            }
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
