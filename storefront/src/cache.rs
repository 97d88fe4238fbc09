//! Menu cache
//!
//! File-backed snapshot of the last successful catalog fetch. A snapshot
//! older than the TTL is treated as absent, and every storage failure is
//! logged and swallowed -- the cache can speed rendering up but never block
//! it.

use std::path::{Path, PathBuf};

use shared::models::{CachedMenu, Category, Product};
use shared::util::now_millis;

/// Snapshots are served for 15 minutes before a fresh fetch is required
pub const MENU_CACHE_TTL_MILLIS: i64 = 15 * 60 * 1000;

const CACHE_FILE: &str = "menu.json";

/// TTL-bounded menu snapshot store
#[derive(Debug, Clone)]
pub struct MenuCache {
    file_path: PathBuf,
    ttl_millis: i64,
}

impl MenuCache {
    /// Create a cache rooted in the application data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join(CACHE_FILE),
            ttl_millis: MENU_CACHE_TTL_MILLIS,
        }
    }

    /// Override the TTL (tests)
    pub fn with_ttl(mut self, ttl_millis: i64) -> Self {
        self.ttl_millis = ttl_millis;
        self
    }

    /// Return the cached snapshot if one exists and is still fresh
    ///
    /// Absence, staleness, and unreadable blobs all come back as `None`;
    /// callers treat that as "no cache", never as an error.
    pub fn read(&self) -> Option<CachedMenu> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.file_path.display(), error = %e, "cache read failed");
                return None;
            }
        };

        let snapshot: CachedMenu = match serde_json::from_str(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(path = %self.file_path.display(), error = %e, "cache blob corrupt");
                return None;
            }
        };

        snapshot
            .is_fresh(now_millis(), self.ttl_millis)
            .then_some(snapshot)
    }

    /// Persist the current catalog, overwriting any prior snapshot
    ///
    /// Best-effort: failures are logged and swallowed.
    pub fn write(&self, categories: &[Category], products: &[Product]) {
        let snapshot = CachedMenu {
            categories: categories.to_vec(),
            products: products.to_vec(),
            timestamp: now_millis(),
        };

        let result = serde_json::to_string(&snapshot)
            .map_err(std::io::Error::other)
            .and_then(|blob| {
                if let Some(parent) = self.file_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&self.file_path, blob)
            });

        if let Err(e) = result {
            tracing::warn!(path = %self.file_path.display(), error = %e, "cache write failed");
        }
    }

    /// Drop the snapshot so the next menu load is forced fresh
    pub fn invalidate(&self) {
        match std::fs::remove_file(&self.file_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.file_path.display(), error = %e, "cache invalidate failed");
            }
        }
    }
}
