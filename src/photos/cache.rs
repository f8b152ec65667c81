//! TTL-bounded cache for photo search results.
//!
//! One selected photo per normalized query, evicted by age (lazy TTL sweep)
//! and by lowest hit count once the cache is over capacity.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::models::Photo;

use super::metrics::Metrics;

/// How long a cached result stays fresh
const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Maximum number of resident entries
const DEFAULT_CAPACITY: usize = 50;

/// Cache entry wrapping a photo with bookkeeping
#[derive(Clone)]
struct CacheEntry {
    photo: Photo,
    inserted_at: Instant,
    hits: u64,
}

/// Thread-safe photo result cache with shared metrics.
///
/// Query keys are compared case-insensitively; whitespace is left to the
/// caller. Cloning shares the underlying storage.
#[derive(Clone)]
pub struct PhotoCache {
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    metrics: Arc<Metrics>,
    ttl: Duration,
    capacity: usize,
}

impl Default for PhotoCache {
    fn default() -> Self {
        Self::new(Arc::new(Metrics::default()))
    }
}

impl PhotoCache {
    /// Create a cache with the default TTL (5 minutes) and capacity (50).
    #[must_use]
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self::with_limits(metrics, DEFAULT_TTL, DEFAULT_CAPACITY)
    }

    /// Create a cache with explicit TTL and capacity. Used by tests.
    #[must_use]
    pub fn with_limits(metrics: Arc<Metrics>, ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            metrics,
            ttl,
            capacity,
        }
    }

    fn normalize(query: &str) -> String {
        format!("search:{}", query.to_lowercase())
    }

    /// Get the cached photo for a query, if present and within TTL.
    ///
    /// Increments the entry's hit counter and the global `cache_hits` metric
    /// on a hit. Returns `None` on miss or expiry, forcing the caller to
    /// fetch.
    pub fn get(&self, query: &str) -> Option<Photo> {
        let key = Self::normalize(query);
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get_mut(&key)?;

        if entry.inserted_at.elapsed() >= self.ttl {
            return None;
        }

        entry.hits += 1;
        self.metrics.record_cache_hit();
        tracing::debug!("cache hit for query {query:?}");
        Some(entry.photo.clone())
    }

    /// Insert or overwrite the entry for a query.
    ///
    /// Expired entries are swept first; if the cache is still full, the
    /// entries with the fewest hits are evicted to make room. The new entry
    /// starts with a hit count of 1.
    pub fn put(&self, query: &str, photo: Photo) {
        let key = Self::normalize(query);
        let mut entries = self.entries.lock().unwrap();

        entries.retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);

        while entries.len() >= self.capacity && !entries.contains_key(&key) {
            let coldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.hits)
                .map(|(key, _)| key.clone());
            match coldest {
                Some(key) => {
                    entries.remove(&key);
                }
                None => break,
            }
        }

        entries.insert(
            key,
            CacheEntry {
                photo,
                inserted_at: Instant::now(),
                hits: 1,
            },
        );
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Remove all entries and reset metrics. Test/debug reset, not part of
    /// the normal request flow.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
        self.metrics.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhotoLinks, PhotoUrls, PhotoUser, PhotoUserLinks};

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            urls: PhotoUrls {
                raw: format!("https://images.unsplash.com/{id}"),
                regular: String::new(),
                small: String::new(),
                thumb: None,
            },
            links: PhotoLinks {
                html: format!("https://unsplash.com/photos/{id}"),
                download_location: format!("https://api.unsplash.com/photos/{id}/download"),
            },
            user: PhotoUser {
                name: "Photographer".to_string(),
                links: PhotoUserLinks {
                    html: "https://unsplash.com/@p".to_string(),
                },
            },
            description: None,
            alt_description: None,
        }
    }

    #[test]
    fn test_hit_after_put() {
        let cache = PhotoCache::default();
        cache.put("Nature", photo("a"));

        let hit = cache.get("nature").expect("case-insensitive hit");
        assert_eq!(hit.id, "a");
    }

    #[test]
    fn test_miss_when_absent() {
        let cache = PhotoCache::default();
        assert!(cache.get("nothing").is_none());
    }

    #[test]
    fn test_expired_entry_misses() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::with_limits(metrics, Duration::from_millis(10), 50);
        cache.put("nature", photo("a"));

        std::thread::sleep(Duration::from_millis(25));
        assert!(cache.get("nature").is_none());
    }

    #[test]
    fn test_capacity_evicts_lowest_hit_count() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::with_limits(metrics, Duration::from_secs(60), 2);

        cache.put("a", photo("a"));
        cache.put("b", photo("b"));

        // Make "a" hot so "b" is the coldest entry.
        cache.get("a");
        cache.get("a");

        cache.put("c", photo("c"));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::with_limits(metrics, Duration::from_secs(60), 5);

        for i in 0..20 {
            cache.put(&format!("query-{i}"), photo(&format!("p{i}")));
            assert!(cache.len() <= 5);
        }
    }

    #[test]
    fn test_hit_increments_metric() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::with_limits(Arc::clone(&metrics), Duration::from_secs(60), 50);

        cache.put("nature", photo("a"));
        cache.get("nature");
        cache.get("nature");

        let snap = metrics.snapshot(cache.len());
        assert_eq!(snap.cache_hits, 2);
        assert_eq!(snap.cache_size, 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::with_limits(Arc::clone(&metrics), Duration::from_secs(60), 50);

        cache.put("nature", photo("a"));
        cache.get("nature");
        cache.clear();

        assert!(cache.is_empty());
        let snap = metrics.snapshot(0);
        assert_eq!(snap.cache_hits, 0);
        assert_eq!(snap.api_calls, 0);
    }

    #[test]
    fn test_put_overwrites_and_resets_hits() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::with_limits(metrics, Duration::from_secs(60), 2);

        cache.put("a", photo("old"));
        cache.get("a");
        cache.get("a");
        cache.put("a", photo("new"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").unwrap().id, "new");
    }
}
