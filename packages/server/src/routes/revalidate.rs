//! `/api/revalidate` — manual page cache invalidation.
//!
//! The GET form is public, matching the admin tooling this replaces;
//! the POST form requires the admin session.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::auth::AdminSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RevalidateQuery {
    #[serde(default = "default_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct RevalidateBody {
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RevalidateQuery>,
) -> Json<serde_json::Value> {
    Json(revalidate(&state, &query.path))
}

pub async fn post(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(body): Json<RevalidateBody>,
) -> Json<serde_json::Value> {
    Json(revalidate(&state, &body.path))
}

fn revalidate(state: &AppState, path: &str) -> serde_json::Value {
    state.cache.invalidate(path);
    serde_json::json!({
        "revalidated": true,
        "now": Utc::now().timestamp_millis(),
        "path": path,
    })
}
