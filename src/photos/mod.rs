//! Remote photo acquisition: cache, controller, ledger, fallback chain.
//!
//! The flow for one card: the controller waits for viewport visibility,
//! debounces the category query, fetches through the API client (cache
//! first), and exposes photo/src/attribution/error. The presentation layer
//! drives the fallback chain from those signals, and user interaction
//! triggers at-most-once download tracking through the ledger.

pub mod cache;
pub mod controller;
pub mod fallback;
pub mod ledger;
pub mod metrics;

pub use cache::PhotoCache;
pub use controller::{ControllerOptions, PhotoController, PhotoState};
pub use fallback::{FallbackChain, ImageSource};
pub use ledger::{DownloadLedger, FileSessionStore, MemorySessionStore, SessionStore};
pub use metrics::{Metrics, MetricsSnapshot};
