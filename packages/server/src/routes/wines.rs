//! `/api/wines` — the wine catalog.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use badin_store::Wine;

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Wine>>, ApiError> {
    Ok(Json(state.wines.list()?))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Wine>, ApiError> {
    Ok(Json(state.wines.get(&id)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(wine): Json<Wine>,
) -> Result<Json<Wine>, ApiError> {
    let stored = state.wines.create(wine)?;
    state.cache.invalidate("/");
    Ok(Json(stored))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    _session: AdminSession,
    Json(wine): Json<Wine>,
) -> Result<Json<Wine>, ApiError> {
    let stored = state.wines.update(&id, wine)?;
    state.cache.invalidate("/");
    Ok(Json(stored))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    _session: AdminSession,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.wines.delete(&id)?;
    state.cache.invalidate("/");
    Ok(Json(serde_json::json!({ "ok": true })))
}
