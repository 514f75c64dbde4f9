//! `/api/news` — the news catalog.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use badin_store::NewsItem;

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::state::AppState;

/// Articles come back newest first.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let mut articles = state.news.list()?;
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(articles))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NewsItem>, ApiError> {
    Ok(Json(state.news.get(&id)?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(article): Json<NewsItem>,
) -> Result<Json<NewsItem>, ApiError> {
    let stored = state.news.create(article)?;
    state.cache.invalidate("/");
    Ok(Json(stored))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    _session: AdminSession,
    Json(article): Json<NewsItem>,
) -> Result<Json<NewsItem>, ApiError> {
    let stored = state.news.update(&id, article)?;
    state.cache.invalidate("/");
    Ok(Json(stored))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    _session: AdminSession,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.news.delete(&id)?;
    state.cache.invalidate("/");
    Ok(Json(serde_json::json!({ "ok": true })))
}
