//! Input validation and sanitization helpers

use std::path::PathBuf;
use std::time::Duration;

/// Maximum accepted search query length
const MAX_QUERY_LEN: usize = 100;

/// Maximum accepted prompt content length
const MAX_PROMPT_LEN: usize = 10_000;

/// Maximum storage key length
const MAX_KEY_LEN: usize = 50;

/// Escape HTML-significant characters and trim surrounding whitespace.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
        .trim()
        .to_string()
}

/// Sanitize a search query and cap its length.
#[must_use]
pub fn validate_search_query(query: &str) -> String {
    truncate(sanitize_input(query), MAX_QUERY_LEN)
}

/// Cap prompt content at the maximum length.
///
/// No characters are escaped: copied content must round-trip into other
/// tools unchanged. Escaping is for content echoed back into markup-ish
/// display contexts, not for the clipboard path.
#[must_use]
pub fn validate_prompt_content(content: &str) -> String {
    truncate(content.to_string(), MAX_PROMPT_LEN)
}

/// Restrict a storage key to alphanumerics, hyphens, and underscores, capped
/// at 50 characters.
#[must_use]
pub fn validate_storage_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_KEY_LEN)
        .collect()
}

fn truncate(mut s: String, max_len: usize) -> String {
    if s.len() > max_len {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}

/// File-backed sliding-window rate limiter.
///
/// Attempt timestamps (unix milliseconds, one per line) live in a file so
/// the window accumulates across process invocations; stale lines are
/// dropped on each check. A missing file means no attempts yet.
pub struct RateLimit {
    path: PathBuf,
    max_attempts: usize,
    window: Duration,
}

impl RateLimit {
    /// Create a limiter allowing `max_attempts` per `window`, backed by the
    /// given file.
    #[must_use]
    pub fn open(path: PathBuf, max_attempts: usize, window: Duration) -> Self {
        Self {
            path,
            max_attempts,
            window,
        }
    }

    /// Limiter for copy actions: 50 per minute.
    #[must_use]
    pub fn for_copies(path: PathBuf) -> Self {
        Self::open(path, 50, Duration::from_secs(60))
    }

    /// Check whether an action is allowed, recording it if so.
    ///
    /// A bookkeeping write failure is logged and the action allowed; the
    /// limiter degrades to best effort rather than locking the user out.
    pub fn is_allowed(&self) -> bool {
        let now = chrono::Utc::now().timestamp_millis();
        let window = self.window.as_millis() as i64;

        let mut recent: Vec<i64> = std::fs::read_to_string(&self.path)
            .ok()
            .map(|content| {
                content
                    .lines()
                    .filter_map(|line| line.trim().parse().ok())
                    .filter(|at| now - at < window)
                    .collect()
            })
            .unwrap_or_default();

        if recent.len() >= self.max_attempts {
            return false;
        }

        recent.push(now);
        let serialized: String = recent.iter().map(|at| format!("{at}\n")).collect();
        if let Err(e) = std::fs::write(&self.path, serialized) {
            tracing::warn!("Rate limit bookkeeping write failed: {e}");
        }
        true
    }
}
