//! Admin authentication.
//!
//! One credential pair from the environment, checked at login; a
//! successful login issues a bearer token that guards every mutating
//! route through the [`AdminSession`] extractor. Mutations are rejected
//! before any storage side effect happens.

use std::sync::Arc;

use axum::extract::{FromRequestParts, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /api/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let ok = request.username == state.config.admin_username
        && request.password == state.config.admin_password;
    if !ok {
        info!(username = %request.username, "rejected login");
        return Err(ApiError::Unauthorized);
    }

    let token = state.sessions.issue();
    info!("admin logged in");
    Ok(Json(LoginResponse { token }))
}

/// `POST /api/logout`
pub async fn logout(State(state): State<Arc<AppState>>, session: AdminSession) -> Json<serde_json::Value> {
    state.sessions.revoke(&session.token);
    Json(serde_json::json!({ "ok": true }))
}

/// Proof that the request carried a valid admin bearer token.
pub struct AdminSession {
    pub token: String,
}

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<AdminSession, ApiError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;
        if !state.sessions.is_valid(token) {
            return Err(ApiError::Unauthorized);
        }

        Ok(AdminSession {
            token: token.to_string(),
        })
    }
}
