//! Cache Module
//!
//! Provides in-memory caching with per-key TTL expiration.

mod entry;
mod manager;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use manager::{CacheManager, SharedCache, TtlCacheManager};
pub use store::TtlCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
