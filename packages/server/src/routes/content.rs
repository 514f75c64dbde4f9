//! `/api/content` — the whole-site content document.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use badin_content::{plan_document, ContentDocument, Control};
use tracing::info;

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_content(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ContentDocument>, ApiError> {
    Ok(Json(state.content.load()?))
}

/// The derived admin form for the current document.
pub async fn get_editor(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
) -> Result<Json<Vec<Control>>, ApiError> {
    let doc = state.content.load()?;
    Ok(Json(plan_document(&doc)))
}

/// Save the document whole. Invalidation of the rendered home page is
/// best-effort and never fails the save.
pub async fn put_content(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(doc): Json<ContentDocument>,
) -> Result<Json<ContentDocument>, ApiError> {
    state.content.save(&doc)?;
    state.cache.invalidate("/");
    info!("content document saved");
    Ok(Json(doc))
}
