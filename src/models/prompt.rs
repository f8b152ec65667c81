//! Prompt template model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A curated AI prompt template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Stable catalog ID
    pub id: String,
    /// Short title shown on cards
    pub title: String,
    /// One-sentence description
    pub description: String,
    /// Category name (one of [`crate::catalog::CATEGORIES`])
    pub category: String,
    /// Author display name
    pub author: String,
    /// Download/copy count
    pub downloads: u32,
    /// When the prompt was added to the catalog
    pub date_created: NaiveDate,
    /// The full prompt template text
    pub prompt: String,
}

impl Prompt {
    /// Format the download count for display (e.g. `2.8k`).
    #[must_use]
    pub fn downloads_display(&self) -> String {
        if self.downloads >= 1000 {
            format!("{:.1}k", f64::from(self.downloads) / 1000.0)
        } else {
            self.downloads.to_string()
        }
    }
}
