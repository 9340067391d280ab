//! Cache Manager Module
//!
//! The narrow get/set/clear contract the product service relies on, plus the
//! implementation backed by a shared [`TtlCache`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::trace;

use crate::cache::TtlCache;
use crate::error::CacheError;

/// Cache shared between the manager and the cleanup task.
pub type SharedCache<V> = Arc<Mutex<TtlCache<V>>>;

// == Cache Manager Trait ==
/// Keyed access to cached values with expiration.
pub trait CacheManager<V>: Send + Sync {
    /// Returns the live value for `key`, or `None` when missing or expired.
    fn get(&self, key: &str) -> Option<V>;

    /// Stores `value` using the configured TTL.
    fn set(&self, key: &str, value: V) -> Result<(), CacheError>;

    /// Stores `value` with an explicit TTL.
    fn set_with_ttl(&self, key: &str, value: V, ttl: Duration) -> Result<(), CacheError>;

    /// Drops `key` if present.
    fn clear(&self, key: &str);
}

// == TTL Cache Manager ==
/// [`CacheManager`] over a [`SharedCache`] with a fixed default TTL.
#[derive(Debug)]
pub struct TtlCacheManager<V> {
    cache: SharedCache<V>,
    ttl: Duration,
}

impl<V: Clone> TtlCacheManager<V> {
    /// Creates a manager over a fresh cache.
    pub fn new(ttl: Duration) -> Self {
        Self::with_cache(Arc::new(Mutex::new(TtlCache::new())), ttl)
    }

    /// Creates a manager over an existing shared cache.
    pub fn with_cache(cache: SharedCache<V>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Handle to the underlying cache, e.g. for the cleanup task.
    pub fn shared(&self) -> SharedCache<V> {
        Arc::clone(&self.cache)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Clone + Send> CacheManager<V> for TtlCacheManager<V> {
    fn get(&self, key: &str) -> Option<V> {
        let value = self.cache.lock().get(key);
        trace!(key, hit = value.is_some(), "cache lookup");
        value
    }

    fn set(&self, key: &str, value: V) -> Result<(), CacheError> {
        self.set_with_ttl(key, value, self.ttl)
    }

    fn set_with_ttl(&self, key: &str, value: V, ttl: Duration) -> Result<(), CacheError> {
        trace!(key, ttl_secs = ttl.as_secs(), "cache write");
        self.cache.lock().set(key, value, ttl)
    }

    fn clear(&self, key: &str) {
        self.cache.lock().clear(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_manager_set_uses_default_ttl() {
        let manager = TtlCacheManager::new(Duration::from_millis(50));

        manager.set("k", 10u32).unwrap();
        assert_eq!(manager.get("k"), Some(10));

        sleep(Duration::from_millis(80));
        assert_eq!(manager.get("k"), None);
    }

    #[test]
    fn test_manager_set_with_ttl_overrides_default() {
        let manager = TtlCacheManager::new(Duration::from_millis(10));

        manager
            .set_with_ttl("k", "v".to_string(), Duration::from_secs(60))
            .unwrap();
        sleep(Duration::from_millis(30));

        assert_eq!(manager.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_manager_clear() {
        let manager = TtlCacheManager::new(Duration::from_secs(60));

        manager.set("k", 1).unwrap();
        manager.clear("k");

        assert_eq!(manager.get("k"), None);
    }

    #[test]
    fn test_manager_shares_cache() {
        let manager = TtlCacheManager::new(Duration::from_secs(60));
        manager.set("k", 1).unwrap();

        let shared = manager.shared();
        assert_eq!(shared.lock().len(), 1);
        assert_eq!(manager.ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_manager_propagates_invalid_key() {
        let manager = TtlCacheManager::new(Duration::from_secs(60));
        assert!(matches!(manager.set("", 1), Err(CacheError::InvalidKey(_))));
    }
}
