//! Rendered-page cache invalidation.
//!
//! The public site caches rendered pages; after a successful content or
//! catalog mutation the affected path must be marked stale. The cache
//! here tracks a generation counter per path, which the renderer
//! compares against the generation it rendered with.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

#[derive(Debug, Default)]
pub struct PageCache {
    generations: Mutex<HashMap<String, u64>>,
}

impl PageCache {
    pub fn new() -> PageCache {
        PageCache::default()
    }

    /// Mark `path` stale. Returns the new generation.
    pub fn invalidate(&self, path: &str) -> u64 {
        let mut generations = self.generations.lock().unwrap();
        let generation = generations.entry(path.to_string()).or_insert(0);
        *generation += 1;
        debug!(path, generation = *generation, "page cache invalidated");
        *generation
    }

    /// Current generation for `path`; 0 means never invalidated.
    pub fn generation(&self, path: &str) -> u64 {
        let generations = self.generations.lock().unwrap();
        generations.get(path).copied().unwrap_or(0)
    }
}
