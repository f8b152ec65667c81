//! Presentation-layer fallback image cascade.
//!
//! The acquisition core exposes only `src | None` plus an error kind; this
//! chain turns those two signals into a deterministic sequence of image
//! sources to try, advanced whenever the current one fails to load:
//! live API src → alternate public endpoint → seeded placeholder → gradient.

use std::sync::Arc;

use super::metrics::Metrics;

/// One entry in the fallback cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A URL to load
    Url(String),
    /// Terminal CSS gradient, always "loads"
    Gradient(String),
}

/// Fallback cascade for one photo slot.
pub struct FallbackChain {
    sources: Vec<ImageSource>,
    position: usize,
    metrics: Option<Arc<Metrics>>,
}

impl FallbackChain {
    /// Build the cascade for a query and target dimensions.
    ///
    /// `api_src` is the controller's derived URL when a photo loaded; when
    /// the controller reports no photo the chain starts at the alternate
    /// endpoint directly.
    #[must_use]
    pub fn new(api_src: Option<String>, query: &str, width: u32, height: u32) -> Self {
        let seed = seed_for(query);
        let mut sources = Vec::with_capacity(4);

        if let Some(src) = api_src {
            sources.push(ImageSource::Url(src));
        }
        sources.push(ImageSource::Url(format!(
            "https://source.unsplash.com/{width}x{height}/?{}",
            urlencoding::encode(query)
        )));
        sources.push(ImageSource::Url(format!(
            "https://picsum.photos/seed/{seed}/{width}/{height}"
        )));
        sources.push(ImageSource::Gradient(
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)".to_string(),
        ));

        Self {
            sources,
            position: 0,
            metrics: None,
        }
    }

    /// Attach the shared metrics so advances count as `fallback_uses`.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// The source to render right now.
    #[must_use]
    pub fn current(&self) -> &ImageSource {
        &self.sources[self.position]
    }

    /// Advance past a failed source. Returns the next source, or `None`
    /// once the terminal gradient is reached (which cannot fail).
    pub fn advance(&mut self) -> Option<&ImageSource> {
        if self.position + 1 >= self.sources.len() {
            return None;
        }
        self.position += 1;
        if let Some(metrics) = &self.metrics {
            metrics.record_fallback();
        }
        tracing::debug!("image fallback advanced to tier {}", self.position);
        Some(&self.sources[self.position])
    }
}

fn seed_for(query: &str) -> String {
    let seed: String = query
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    if seed.is_empty() { "prompt".to_string() } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_order_with_api_src() {
        let mut chain = FallbackChain::new(
            Some("https://images.unsplash.com/p?w=800".to_string()),
            "nature",
            800,
            500,
        );

        assert_eq!(
            chain.current(),
            &ImageSource::Url("https://images.unsplash.com/p?w=800".to_string())
        );

        let alternate = chain.advance().unwrap().clone();
        assert!(matches!(alternate, ImageSource::Url(url) if url.contains("source.unsplash.com")));

        let placeholder = chain.advance().unwrap().clone();
        assert!(matches!(placeholder, ImageSource::Url(url) if url.contains("picsum.photos/seed/nature")));

        assert!(matches!(chain.advance().unwrap(), ImageSource::Gradient(_)));
        assert!(chain.advance().is_none());
    }

    #[test]
    fn test_chain_without_api_src_starts_at_alternate() {
        let chain = FallbackChain::new(None, "nature", 800, 500);
        assert!(matches!(chain.current(), ImageSource::Url(url) if url.contains("source.unsplash.com")));
    }

    #[test]
    fn test_advance_counts_fallback_uses() {
        let metrics = Arc::new(Metrics::default());
        let mut chain =
            FallbackChain::new(None, "nature", 800, 500).with_metrics(Arc::clone(&metrics));

        chain.advance();
        chain.advance();

        assert_eq!(metrics.snapshot(0).fallback_uses, 2);
    }

    #[test]
    fn test_seed_sanitization() {
        let chain = FallbackChain::new(None, "data analysis!", 400, 300);
        let ImageSource::Url(_) = chain.current() else {
            panic!("expected URL");
        };
        let mut chain = chain;
        chain.advance();
        assert!(matches!(
            chain.current(),
            ImageSource::Url(url) if url.contains("/seed/data-analysis-/400/300")
        ));
    }
}
