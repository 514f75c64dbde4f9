//! # Badin server
//!
//! The HTTP back office and public API for the winery site: content
//! document reads and whole-document saves, wine and news catalog CRUD,
//! image uploads, and page cache invalidation, all behind one
//! env-configured admin credential pair.

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ServerError, ServerResult};
pub use routes::router;
pub use state::AppState;
