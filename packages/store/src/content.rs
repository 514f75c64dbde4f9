//! Persistence for the single content document.
//!
//! The document lives in one JSON file. The first load of a fresh
//! install seeds the file with the built-in default content so the
//! public site has something to render immediately.

use std::path::PathBuf;

use badin_content::ContentDocument;
use tracing::info;

use crate::error::StoreResult;

/// Load/save access to `content.json`.
#[derive(Debug, Clone)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn open(path: impl Into<PathBuf>) -> ContentStore {
        ContentStore { path: path.into() }
    }

    /// Read the document, seeding the file with the default content if
    /// it does not exist yet.
    pub fn load(&self) -> StoreResult<ContentDocument> {
        if !self.path.exists() {
            let seeded = ContentDocument::default();
            badin_common::write_json(&self.path, &seeded)?;
            info!(path = %self.path.display(), "seeded content file");
            return Ok(seeded);
        }
        Ok(badin_common::read_json(&self.path)?)
    }

    /// Write the whole document back.
    pub fn save(&self, doc: &ContentDocument) -> StoreResult<()> {
        badin_common::write_json(&self.path, doc)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badin_content::{Change, Path, Value};

    #[test]
    fn first_load_seeds_the_default_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::open(dir.path().join("content.json"));

        let doc = store.load().unwrap();
        assert_eq!(doc, ContentDocument::default());
        assert!(dir.path().join("content.json").exists());
    }

    #[test]
    fn saved_edits_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::open(dir.path().join("content.json"));

        let doc = store.load().unwrap();
        let edited = Change::Set {
            path: Path::parse("hero.title").unwrap(),
            value: Value::text("Test Winery"),
        }
        .apply(&doc)
        .unwrap();
        store.save(&edited).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, edited);
        assert_eq!(
            reloaded.get(&Path::parse("hero.title").unwrap()),
            Some(&Value::text("Test Winery"))
        );
    }
}
