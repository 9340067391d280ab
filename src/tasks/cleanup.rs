//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;
use crate::config::MIN_CLEANUP_INTERVAL;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task sleeps for `cleanup_interval_secs` (at least one second) between
/// sweeps and only holds the cache lock for the duration of a sweep. Abort the
/// returned handle on shutdown.
///
/// # Example
/// ```ignore
/// let manager = TtlCacheManager::<Vec<Product>>::new(Duration::from_secs(60));
/// let cleanup_handle = spawn_cleanup_task(manager.shared(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: SharedCache<V>, cleanup_interval_secs: u64) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    let cleanup_interval_secs = cleanup_interval_secs.max(MIN_CLEANUP_INTERVAL);
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.lock().cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
