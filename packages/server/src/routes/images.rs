//! `/api/image/:filename` — serving stored uploads.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::state::AppState;

/// Uploaded filenames are unique forever, so the response is immutable.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let image = state.images.open_image(&filename)?;
    Ok((
        [
            (header::CONTENT_TYPE, image.content_type),
            (
                header::CACHE_CONTROL,
                "public, max-age=31536000, immutable",
            ),
        ],
        image.bytes,
    )
        .into_response())
}
