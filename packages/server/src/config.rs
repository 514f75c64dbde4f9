//! Environment configuration.
//!
//! Everything the server needs comes from environment variables. The
//! admin credentials are required; the rest fall back to defaults that
//! match a checkout-and-run development setup.

use std::path::PathBuf;

use tracing::warn;

use crate::error::{ServerError, ServerResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `ADMIN_USERNAME` and `ADMIN_PASSWORD` must be set; there is no
    /// default credential pair on purpose.
    pub fn load() -> ServerResult<Config> {
        let port = match std::env::var("BADIN_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid BADIN_PORT: {raw}")))?,
            Err(_) => 3000,
        };

        let data_dir = env_path("BADIN_DATA_DIR", "data");
        let upload_dir = env_path("BADIN_UPLOAD_DIR", "public/uploads");

        let admin_username = required("ADMIN_USERNAME")?;
        let admin_password = required("ADMIN_PASSWORD")?;
        if admin_password.len() < 8 {
            warn!("ADMIN_PASSWORD is shorter than 8 characters");
        }

        Ok(Config {
            port,
            data_dir,
            upload_dir,
            admin_username,
            admin_password,
        })
    }
}

fn env_path(name: &str, default: &str) -> PathBuf {
    match std::env::var(name) {
        Ok(value) => PathBuf::from(value),
        Err(_) => PathBuf::from(default),
    }
}

fn required(name: &str) -> ServerResult<String> {
    std::env::var(name).map_err(|_| ServerError::Config(format!("{name} is not set")))
}
