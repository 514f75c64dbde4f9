//! Shared application state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use badin_store::{default_news, default_wines, Catalog, ContentStore, ImageStore, NewsItem, Wine};
use uuid::Uuid;

use crate::cache::PageCache;
use crate::config::Config;
use crate::error::ServerResult;

/// Everything a handler can reach.
pub struct AppState {
    pub config: Config,
    pub content: ContentStore,
    pub wines: Catalog<Wine>,
    pub news: Catalog<NewsItem>,
    pub images: ImageStore,
    pub cache: PageCache,
    pub sessions: Sessions,
}

impl AppState {
    pub fn new(config: Config) -> ServerResult<Arc<AppState>> {
        let content = ContentStore::open(config.data_dir.join("content.json"));
        let wines = Catalog::open(config.data_dir.join("wines.json"), default_wines())
            .map_err(store_to_io)?;
        let news = Catalog::open(config.data_dir.join("news.json"), default_news())
            .map_err(store_to_io)?;
        let images = ImageStore::open(&config.upload_dir);

        Ok(Arc::new(AppState {
            config,
            content,
            wines,
            news,
            images,
            cache: PageCache::new(),
            sessions: Sessions::default(),
        }))
    }
}

fn store_to_io(err: badin_store::StoreError) -> crate::error::ServerError {
    crate::error::ServerError::Io(std::io::Error::other(err))
}

/// Live admin sessions, keyed by bearer token.
///
/// Tokens live only in memory; a restart logs everyone out.
#[derive(Debug, Default)]
pub struct Sessions {
    tokens: Mutex<HashSet<String>>,
}

impl Sessions {
    /// Start a session and hand back its token.
    pub fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.lock().unwrap().insert(token.clone());
        token
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().contains(token)
    }

    pub fn revoke(&self, token: &str) {
        self.tokens.lock().unwrap().remove(token);
    }
}
