//! API clients for photo providers

pub mod unsplash;

pub use unsplash::UnsplashClient;

use crate::models::FetchOutcome;

/// Unified API trait for photo providers.
///
/// The acquisition controller is generic over this seam so tests can inject
/// an instrumented source without touching the network.
#[allow(async_fn_in_trait)]
pub trait PhotoSource {
    /// Search the provider for a query and return one random validated
    /// photo, or an explicit not-found/failed outcome. Never errors.
    async fn fetch_random_photo(&self, query: &str) -> FetchOutcome;

    /// Fire the provider's download-tracking endpoint for a photo.
    ///
    /// Returns whether the call is considered to have succeeded; failures
    /// are logged, never propagated.
    async fn track_download(&self, download_location: &str) -> bool;
}
