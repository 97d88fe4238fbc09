//! Cached menu snapshot

use serde::{Deserialize, Serialize};

use super::{Category, Product};

/// The last successful catalog fetch, persisted with its write time
///
/// A snapshot is valid only while `now - timestamp < ttl`; stale snapshots
/// are treated as absent, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedMenu {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    /// Write time, epoch milliseconds
    pub timestamp: i64,
}

impl CachedMenu {
    /// Age-based validity check against a TTL in milliseconds
    pub fn is_fresh(&self, now_millis: i64, ttl_millis: i64) -> bool {
        now_millis - self.timestamp < ttl_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_boundary() {
        let snapshot = CachedMenu {
            categories: vec![],
            products: vec![],
            timestamp: 1_000,
        };
        let ttl = 900_000;
        assert!(snapshot.is_fresh(1_000 + ttl - 1, ttl));
        assert!(!snapshot.is_fresh(1_000 + ttl, ttl));
        assert!(!snapshot.is_fresh(1_000 + ttl + 1, ttl));
    }
}
