//! Usage metrics for the photo acquisition layer

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counters shared between the API client, the result cache,
/// and the fallback chain.
#[derive(Debug, Default)]
pub struct Metrics {
    api_calls: AtomicU64,
    cache_hits: AtomicU64,
    fallback_uses: AtomicU64,
    errors: AtomicU64,
}

/// Point-in-time snapshot of the counters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    /// Successful provider API calls
    pub api_calls: u64,
    /// Cache hits that avoided a provider call
    pub cache_hits: u64,
    /// Times the presentation layer advanced to a fallback image source
    pub fallback_uses: u64,
    /// Failed provider calls (transport, status, timeout, invalid data)
    pub errors: u64,
    /// Resident cache entries at snapshot time
    pub cache_size: usize,
    /// `cache_hits / (cache_hits + api_calls)`, or 0 when undefined
    pub hit_rate: f64,
}

impl Metrics {
    /// Record a successful provider API call.
    pub fn record_api_call(&self) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache hit.
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a fallback source being used.
    pub fn record_fallback(&self) {
        self.fallback_uses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed provider call.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a snapshot with the given cache size.
    #[must_use]
    pub fn snapshot(&self, cache_size: usize) -> MetricsSnapshot {
        let api_calls = self.api_calls.load(Ordering::Relaxed);
        let cache_hits = self.cache_hits.load(Ordering::Relaxed);
        let denominator = cache_hits + api_calls;
        let hit_rate = if denominator == 0 {
            0.0
        } else {
            cache_hits as f64 / denominator as f64
        };

        MetricsSnapshot {
            api_calls,
            cache_hits,
            fallback_uses: self.fallback_uses.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            cache_size,
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.api_calls.store(0, Ordering::Relaxed);
        self.cache_hits.store(0, Ordering::Relaxed);
        self.fallback_uses.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_zero_when_empty() {
        let metrics = Metrics::default();
        let snap = metrics.snapshot(0);
        assert!((snap.hit_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_rate() {
        let metrics = Metrics::default();
        metrics.record_api_call();
        metrics.record_cache_hit();
        metrics.record_cache_hit();
        metrics.record_cache_hit();

        let snap = metrics.snapshot(1);
        assert_eq!(snap.api_calls, 1);
        assert_eq!(snap.cache_hits, 3);
        assert!((snap.hit_rate - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::default();
        metrics.record_api_call();
        metrics.record_error();
        metrics.record_fallback();
        metrics.reset();

        let snap = metrics.snapshot(0);
        assert_eq!(snap.api_calls, 0);
        assert_eq!(snap.errors, 0);
        assert_eq!(snap.fallback_uses, 0);
    }
}
