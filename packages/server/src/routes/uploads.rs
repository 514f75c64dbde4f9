//! `/api/uploads` — image uploads.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

/// Accept one multipart `file` field, validate it, store it, and hand
/// back the URL the editor keeps as a plain string.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::Validation(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let declared_type = field.content_type().unwrap_or("").to_string();
        let original_filename = field.file_name().unwrap_or("").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| ApiError::Validation(err.to_string()))?;

        let url = state
            .images
            .save(&bytes, &declared_type, &original_filename)?;
        return Ok(Json(serde_json::json!({ "url": url })));
    }

    Err(ApiError::Validation("no file was uploaded".to_string()))
}
