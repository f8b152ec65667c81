//! Unsplash API client
//!
//! Issues timeout-bounded search requests, consults the shared result cache,
//! and records usage metrics. All failures collapse to a [`FetchOutcome`];
//! nothing here returns an error to the caller.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

use crate::config::Config;
use crate::models::{Attribution, FetchOutcome, Photo};
use crate::photos::{Metrics, MetricsSnapshot, PhotoCache};

use super::PhotoSource;

/// Default Unsplash API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Candidates requested per search page
const PER_PAGE: usize = 30;

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Unsplash search client with result caching.
///
/// Construct one per process and share it; the cache and metrics are
/// internal shared state across all callers.
pub struct UnsplashClient {
    http: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
    app_name: String,
    timeout: Duration,
    cache: PhotoCache,
    metrics: Arc<Metrics>,
}

impl UnsplashClient {
    /// Create a client from application config.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let metrics = Arc::new(Metrics::default());
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: config
                .unsplash_access_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from),
            app_name: config.app_name.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            cache: PhotoCache::new(Arc::clone(&metrics)),
            metrics,
        }
    }

    /// Create a client with an explicit base URL and cache. Used by tests.
    #[must_use]
    pub fn with_parts(
        access_key: Option<String>,
        base_url: &str,
        app_name: &str,
        cache: PhotoCache,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key,
            app_name: app_name.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache,
            metrics,
        }
    }

    /// Whether an access key is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.access_key.is_some()
    }

    /// The result cache backing this client.
    #[must_use]
    pub fn cache(&self) -> &PhotoCache {
        &self.cache
    }

    /// Snapshot of usage metrics including current cache size.
    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot(self.cache.len())
    }

    /// Shared metrics handle, for wiring into the fallback chain.
    #[must_use]
    pub fn metrics_handle(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    /// Attribution details for a photo, with this app's UTM parameters.
    #[must_use]
    pub fn attribution(&self, photo: &Photo) -> Attribution {
        build_attribution(photo, &self.app_name)
    }

    async fn search(&self, query: &str, access_key: &str) -> FetchOutcome {
        let url = format!(
            "{}/search/photos?query={}&orientation=landscape&content_filter=high&per_page={}",
            self.base_url,
            urlencoding::encode(query),
            PER_PAGE
        );

        let response = match self
            .http
            .get(&url)
            .header("Authorization", format!("Client-ID {access_key}"))
            .header("Accept-Version", "v1")
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.metrics.record_error();
                tracing::warn!("Unsplash search failed for {query:?}: {e}");
                return FetchOutcome::Failed;
            }
        };

        if !response.status().is_success() {
            self.metrics.record_error();
            tracing::warn!("Unsplash search for {query:?}: HTTP {}", response.status());
            return FetchOutcome::Failed;
        }

        let result: SearchResponse = match response.json().await {
            Ok(result) => result,
            Err(e) => {
                self.metrics.record_error();
                tracing::warn!("Unsplash response parse failed for {query:?}: {e}");
                return FetchOutcome::Failed;
            }
        };

        self.select_candidate(query, result)
    }

    /// Pick one candidate from a parsed result page, cache it, and update
    /// metrics. An invalid selected candidate counts as no result, not a
    /// partial photo.
    fn select_candidate(&self, query: &str, response: SearchResponse) -> FetchOutcome {
        if response.results.is_empty() {
            tracing::debug!("Unsplash: no results for query {query:?}");
            return FetchOutcome::NotFound;
        }

        // Pick uniformly at random for variety across repeated queries.
        let index = rand::rng().random_range(0..response.results.len());
        let selected = response.results.into_iter().nth(index);

        match selected {
            Some(photo) if photo.is_valid() => {
                self.cache.put(query, photo.clone());
                self.metrics.record_api_call();
                tracing::debug!("Unsplash: selected candidate {index} for {query:?}");
                FetchOutcome::Found(photo)
            }
            _ => {
                self.metrics.record_error();
                tracing::warn!("Unsplash: invalid photo data for query {query:?}");
                FetchOutcome::NotFound
            }
        }
    }
}

impl PhotoSource for UnsplashClient {
    /// Search for a photo, consulting the cache first.
    ///
    /// With no access key configured this is a no-op returning `NotFound`
    /// without any network call or metric change.
    async fn fetch_random_photo(&self, query: &str) -> FetchOutcome {
        let Some(access_key) = self.access_key.clone() else {
            tracing::debug!("Unsplash: no access key configured");
            return FetchOutcome::NotFound;
        };

        if let Some(photo) = self.cache.get(query) {
            return FetchOutcome::Found(photo);
        }

        self.search(query, &access_key).await
    }

    /// Track a photo "download" as required by the Unsplash API terms.
    ///
    /// Best-effort: appends the access key, disables response caching, and
    /// swallows every failure. Deduplication is the caller's job.
    async fn track_download(&self, download_location: &str) -> bool {
        let Some(access_key) = self.access_key.as_deref() else {
            return true;
        };
        if download_location.is_empty() {
            return true;
        }

        let url = set_query_param(download_location, "client_id", access_key);

        match self
            .http
            .get(&url)
            .header("Accept-Version", "v1")
            .header("Cache-Control", "no-store")
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("Unsplash: download tracked");
                true
            }
            Ok(response) => {
                tracing::debug!("Unsplash: download tracking HTTP {}", response.status());
                false
            }
            Err(e) => {
                tracing::debug!("Unsplash: download tracking failed: {e}");
                false
            }
        }
    }
}

/// Build a resized/cropped image URL from a photo's raw URL.
///
/// Sets `w`, `h`, `fit=crop`, `auto=format`, `q=80`; defaults to 800×500.
#[must_use]
pub fn build_photo_src(raw: &str, width: u32, height: u32) -> String {
    let mut src = set_query_param(raw, "w", &width.to_string());
    src = set_query_param(&src, "h", &height.to_string());
    src = set_query_param(&src, "fit", "crop");
    src = set_query_param(&src, "auto", "format");
    set_query_param(&src, "q", "80")
}

/// Build attribution for a photo: photographer name plus profile and photo
/// page URLs carrying `utm_source=<app-name>&utm_medium=referral`.
#[must_use]
pub fn build_attribution(photo: &Photo, app_name: &str) -> Attribution {
    let utm = |url: &str| {
        let with_source = set_query_param(url, "utm_source", app_name);
        set_query_param(&with_source, "utm_medium", "referral")
    };

    Attribution {
        photographer: photo.user.name.clone(),
        photographer_url: utm(&photo.user.links.html),
        photo_url: utm(&photo.links.html),
    }
}

// Set semantics: an existing pair with the same key is replaced, so a raw
// URL that already carries sizing params never ends up with duplicates.
fn set_query_param(url: &str, key: &str, value: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };

    let mut pairs: Vec<String> = query
        .map(|query| {
            query
                .split('&')
                .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(key))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();
    pairs.push(format!("{key}={}", urlencoding::encode(value)));

    format!("{base}?{}", pairs.join("&"))
}

// ==================== API Types ====================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[allow(dead_code)]
    #[serde(default)]
    total: u64,
    #[allow(dead_code)]
    #[serde(default)]
    total_pages: u64,
    #[serde(default)]
    results: Vec<Photo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PhotoLinks, PhotoUrls, PhotoUser, PhotoUserLinks};

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            urls: PhotoUrls {
                raw: "https://images.unsplash.com/photo-123456789".to_string(),
                regular: String::new(),
                small: String::new(),
                thumb: None,
            },
            links: PhotoLinks {
                html: format!("https://unsplash.com/photos/{id}"),
                download_location: format!("https://api.unsplash.com/photos/{id}/download"),
            },
            user: PhotoUser {
                name: "Test Photographer".to_string(),
                links: PhotoUserLinks {
                    html: "https://unsplash.com/@testphotographer".to_string(),
                },
            },
            description: None,
            alt_description: None,
        }
    }

    fn disabled_client() -> UnsplashClient {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::new(Arc::clone(&metrics));
        UnsplashClient::with_parts(None, DEFAULT_BASE_URL, "PromptHub", cache, metrics)
    }

    #[test]
    fn test_build_src_defaults() {
        let src = build_photo_src("https://images.unsplash.com/photo-123456789", 800, 500);
        assert!(src.contains("w=800"));
        assert!(src.contains("h=500"));
        assert!(src.contains("fit=crop"));
        assert!(src.contains("auto=format"));
        assert!(src.contains("q=80"));
    }

    #[test]
    fn test_build_src_custom_dimensions() {
        let src = build_photo_src("https://images.unsplash.com/photo-123456789", 400, 300);
        assert!(src.contains("w=400"));
        assert!(src.contains("h=300"));
    }

    #[test]
    fn test_build_src_preserves_existing_query() {
        let src = build_photo_src("https://images.unsplash.com/photo-1?ixid=xyz", 800, 500);
        assert!(src.contains("ixid=xyz"));
        assert!(src.contains("&w=800"));
    }

    #[test]
    fn test_build_src_replaces_existing_sizing_params() {
        let src = build_photo_src(
            "https://images.unsplash.com/photo-1?ixid=xyz&w=1080&q=75",
            800,
            500,
        );
        assert!(src.contains("ixid=xyz"));
        assert!(src.contains("w=800"));
        assert!(src.contains("q=80"));
        assert!(!src.contains("w=1080"));
        assert!(!src.contains("q=75"));
    }

    #[test]
    fn test_selection_picks_one_of_the_candidates() {
        let client = disabled_client();
        let response = SearchResponse {
            total: 3,
            total_pages: 1,
            results: vec![photo("a"), photo("b"), photo("c")],
        };

        match client.select_candidate("nature", response) {
            FetchOutcome::Found(p) => assert!(["a", "b", "c"].contains(&p.id.as_str())),
            other => panic!("expected a candidate, got {other:?}"),
        }
        assert_eq!(client.metrics().api_calls, 1);
        assert!(client.cache().get("nature").is_some());
    }

    #[test]
    fn test_invalid_selected_candidate_is_not_found_with_error() {
        let client = disabled_client();
        let mut broken = photo("broken");
        broken.urls.raw = String::new();
        let response = SearchResponse {
            total: 1,
            total_pages: 1,
            results: vec![broken],
        };

        let outcome = client.select_candidate("nature", response);
        assert!(matches!(outcome, FetchOutcome::NotFound));

        let snap = client.metrics();
        assert_eq!(snap.errors, 1);
        assert_eq!(snap.api_calls, 0);
        assert!(client.cache().is_empty());
    }

    #[test]
    fn test_empty_page_is_not_found_without_error() {
        let client = disabled_client();
        let response = SearchResponse {
            total: 0,
            total_pages: 0,
            results: Vec::new(),
        };

        let outcome = client.select_candidate("nothing", response);
        assert!(matches!(outcome, FetchOutcome::NotFound));
        assert_eq!(client.metrics().errors, 0);
    }

    #[test]
    fn test_attribution_utm_params() {
        let attribution = build_attribution(&photo("abc"), "PromptHub");
        assert_eq!(attribution.photographer, "Test Photographer");
        assert!(
            attribution
                .photographer_url
                .contains("utm_source=PromptHub")
        );
        assert!(attribution.photographer_url.contains("utm_medium=referral"));
        assert!(attribution.photo_url.starts_with("https://unsplash.com/photos/abc"));
        assert!(attribution.photo_url.contains("utm_source=PromptHub"));
    }

    #[tokio::test]
    async fn test_no_access_key_returns_not_found_without_network() {
        let client = disabled_client();
        assert!(!client.is_enabled());

        let outcome = client.fetch_random_photo("programming").await;
        assert!(matches!(outcome, FetchOutcome::NotFound));

        let snap = client.metrics();
        assert_eq!(snap.api_calls, 0);
        assert_eq!(snap.errors, 0);
    }

    #[tokio::test]
    async fn test_warm_cache_short_circuits_fetch() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::new(Arc::clone(&metrics));
        // Unroutable base URL: any real request would fail, so a Found
        // outcome proves the cache answered.
        let client = UnsplashClient::with_parts(
            Some("test-access-key".to_string()),
            "http://127.0.0.1:9",
            "PromptHub",
            cache,
            metrics,
        );

        client.cache().put("programming", photo("cached"));

        let outcome = client.fetch_random_photo("programming").await;
        match outcome {
            FetchOutcome::Found(p) => assert_eq!(p.id, "cached"),
            other => panic!("expected cache hit, got {other:?}"),
        }
        assert_eq!(client.metrics().cache_hits, 1);
    }

    #[tokio::test]
    async fn test_unreachable_provider_reports_failed() {
        let metrics = Arc::new(Metrics::default());
        let cache = PhotoCache::new(Arc::clone(&metrics));
        let client = UnsplashClient::with_parts(
            Some("test-access-key".to_string()),
            "http://127.0.0.1:9",
            "PromptHub",
            cache,
            metrics,
        );

        let outcome = client.fetch_random_photo("programming").await;
        assert!(matches!(outcome, FetchOutcome::Failed));
        assert_eq!(client.metrics().errors, 1);
    }

    #[tokio::test]
    async fn test_track_download_disabled_is_noop_success() {
        let client = disabled_client();
        assert!(client.track_download("https://api.unsplash.com/x/download").await);
    }

    #[test]
    fn test_search_response_tolerates_missing_fields() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(parsed.results.is_empty());
    }
}
