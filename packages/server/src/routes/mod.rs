//! The HTTP surface.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::auth;
use crate::state::AppState;

pub mod content;
pub mod images;
pub mod news;
pub mod revalidate;
pub mod uploads;
pub mod wines;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route(
            "/api/content",
            get(content::get_content).put(content::put_content),
        )
        .route("/api/content/editor", get(content::get_editor))
        .route("/api/wines", get(wines::list).post(wines::create))
        .route(
            "/api/wines/:id",
            get(wines::get).put(wines::update).delete(wines::delete),
        )
        .route("/api/news", get(news::list).post(news::create))
        .route(
            "/api/news/:id",
            get(news::get).put(news::update).delete(news::delete),
        )
        .route("/api/uploads", post(uploads::upload))
        .route("/api/image/:filename", get(images::get))
        .route(
            "/api/revalidate",
            get(revalidate::get).post(revalidate::post),
        )
        // The URLs handed out by the upload route resolve here.
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        // Oversized uploads must reach the image store's own ceiling so
        // the caller gets the distinct too-large error, not a generic
        // body-limit rejection.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
