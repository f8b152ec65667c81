//! Unsplash photo model and fetch outcomes

use serde::{Deserialize, Serialize};

/// A photo result from the Unsplash search API.
///
/// Constructed only by the API client from a successful search response and
/// immutable afterwards. A result that fails [`Photo::is_valid`] is never
/// handed to a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    /// Opaque provider ID, stable identity for deduplication
    pub id: String,
    /// Image URLs at various sizes
    pub urls: PhotoUrls,
    /// Web page and download-tracking links
    pub links: PhotoLinks,
    /// Photographer info for attribution
    pub user: PhotoUser,
    /// Photographer-supplied description
    #[serde(default)]
    pub description: Option<String>,
    /// Auto-generated alt text
    #[serde(default)]
    pub alt_description: Option<String>,
}

/// Image URL variants keyed by size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUrls {
    /// Full-resolution URL, used to derive resized variants
    pub raw: String,
    /// ~1080px wide variant
    #[serde(default)]
    pub regular: String,
    /// ~400px wide variant
    #[serde(default)]
    pub small: String,
    /// Thumbnail variant
    #[serde(default)]
    pub thumb: Option<String>,
}

/// Photo page and download-tracking links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoLinks {
    /// Human-viewable photo page
    pub html: String,
    /// Opaque URL that must be hit once per use, per API terms
    pub download_location: String,
}

/// Photographer details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUser {
    /// Display name
    pub name: String,
    /// Profile links
    pub links: PhotoUserLinks,
}

/// Photographer profile links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUserLinks {
    /// Profile page URL
    pub html: String,
}

impl Photo {
    /// Whether this result carries the fields every caller relies on.
    ///
    /// A photo missing its raw URL or download-tracking URL is treated as
    /// absent, not as a partial object.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.urls.raw.is_empty() && !self.links.download_location.is_empty()
    }
}

/// Attribution details derived from a loaded photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// Photographer display name
    pub photographer: String,
    /// Photographer profile URL with UTM parameters appended
    pub photographer_url: String,
    /// Photo page URL with UTM parameters appended
    pub photo_url: String,
}

/// Outcome of a single photo search call.
///
/// The client never returns an error to the caller; transport failures are
/// folded into `Failed` so the controller can classify them.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// A validated photo was selected
    Found(Photo),
    /// Provider reachable but nothing usable returned, or no credential
    NotFound,
    /// Transport failure, non-2xx status, or timeout
    Failed,
}

/// Error kinds surfaced by the acquisition controller.
///
/// Mutually exclusive with a loaded photo; the presentation layer drives its
/// fallback imagery from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhotoError {
    /// Provider responded but returned zero or invalid candidates
    #[error("fetch_error")]
    Fetch,
    /// Transport failure, timeout, or unexpected response
    #[error("network_error")]
    Network,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(raw: &str, download: &str) -> Photo {
        Photo {
            id: "abc123".to_string(),
            urls: PhotoUrls {
                raw: raw.to_string(),
                regular: String::new(),
                small: String::new(),
                thumb: None,
            },
            links: PhotoLinks {
                html: "https://unsplash.com/photos/abc123".to_string(),
                download_location: download.to_string(),
            },
            user: PhotoUser {
                name: "Test Photographer".to_string(),
                links: PhotoUserLinks {
                    html: "https://unsplash.com/@test".to_string(),
                },
            },
            description: None,
            alt_description: None,
        }
    }

    #[test]
    fn test_valid_photo() {
        let p = photo(
            "https://images.unsplash.com/photo-1",
            "https://api.unsplash.com/photos/abc123/download",
        );
        assert!(p.is_valid());
    }

    #[test]
    fn test_missing_raw_url_invalid() {
        let p = photo("", "https://api.unsplash.com/photos/abc123/download");
        assert!(!p.is_valid());
    }

    #[test]
    fn test_missing_download_location_invalid() {
        let p = photo("https://images.unsplash.com/photo-1", "");
        assert!(!p.is_valid());
    }

    #[test]
    fn test_deserialize_search_result_photo() {
        let json = r#"{
            "id": "xyz",
            "urls": {"raw": "https://images.unsplash.com/photo-2", "regular": "", "small": ""},
            "links": {"html": "https://unsplash.com/photos/xyz", "download_location": "https://api.unsplash.com/photos/xyz/download"},
            "user": {"name": "Jane", "links": {"html": "https://unsplash.com/@jane"}}
        }"#;
        let p: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "xyz");
        assert!(p.is_valid());
        assert!(p.urls.thumb.is_none());
    }
}
