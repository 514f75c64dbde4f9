//! # Badin storage
//!
//! Everything the site persists lives on local disk: the content
//! document and the two catalogs as flat JSON files, uploaded images as
//! plain files in one directory. There is no database and no locking;
//! each write rewrites its file whole through an atomic rename.

mod catalog;
mod content;
mod error;
mod images;
mod items;

pub use catalog::{Catalog, CatalogItem};
pub use content::ContentStore;
pub use error::{StoreError, StoreResult};
pub use images::{ImageStore, StoredImage, ALLOWED_TYPES, MAX_UPLOAD_BYTES};
pub use items::{default_news, default_wines, NewsItem, Wine, WineKind};
