//! # PromptHub 🪄
//!
//! A catalog of curated AI prompt templates with Unsplash-powered card
//! imagery.
//!
//! ## Overview
//!
//! PromptHub lets you browse, search, and copy prompt templates. Each card
//! is decorated with a representative photo fetched lazily from Unsplash,
//! with caching, download-attribution tracking, and a layered fallback
//! chain when the live API is unavailable.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PhotoController                          │
//! │  Visibility gate → debounce → fetch → state + attribution   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │ UnsplashClient  │ │   PhotoCache    │ │ DownloadLedger  │
//! │                 │ │                 │ │                 │
//! │ • Search        │ │ • 5 min TTL     │ │ • In-memory set │
//! │ • Track usage   │ │ • 50 entries    │ │ • Session store │
//! │ • Attribution   │ │ • Hit metrics   │ │ • Once per photo│
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — Unsplash search client behind the [`api::PhotoSource`] seam
//! - [`catalog`] — the prompt dataset, search, and filtering
//! - [`config`] — configuration management
//! - [`models`] — data models (Photo, Prompt, Attribution)
//! - [`photos`] — acquisition controller, cache, ledger, fallback chain
//! - [`security`] — input sanitization and rate limiting
//!
//! ## Example
//!
//! ```no_run
//! use prompthub::api::{PhotoSource, UnsplashClient};
//! use prompthub::config::Config;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = UnsplashClient::new(&Config::default());
//!     let outcome = client.fetch_random_photo("programming").await;
//!     println!("{outcome:?}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::significant_drop_tightening)]
#![allow(clippy::return_self_not_must_use)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod photos;
pub mod security;

// Re-export main types for convenience
pub use api::UnsplashClient;
pub use config::Config;
pub use models::{Attribution, FetchOutcome, Photo, PhotoError, Prompt};
pub use photos::{ControllerOptions, DownloadLedger, PhotoCache, PhotoController};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
