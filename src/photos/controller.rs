//! Photo acquisition controller.
//!
//! Orchestrates one photo slot: visibility gating, query debouncing,
//! generation-checked cancellation, loading/error state, derived src and
//! attribution, and idempotent download tracking.
//!
//! Every fetch captures a generation number; a result is applied only if the
//! generation is still current when it resolves, so the most recently
//! initiated fetch always wins regardless of network ordering. Dropping or
//! shutting down the controller bumps the generation, which discards any
//! in-flight result without partial writes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::sleep;

use crate::api::PhotoSource;
use crate::api::unsplash::build_attribution;
use crate::api::unsplash::build_photo_src;
use crate::models::{Attribution, FetchOutcome, Photo, PhotoError};

use super::ledger::DownloadLedger;

/// Tunables for a controller instance
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Fetch automatically once visible and a query settles. When false the
    /// controller stays idle until `refetch` is called.
    pub immediate: bool,
    /// Debounce delay applied to query changes
    pub debounce: Duration,
    /// Derived image width
    pub width: u32,
    /// Derived image height
    pub height: u32,
    /// App name for attribution UTM parameters
    pub app_name: String,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            immediate: true,
            debounce: Duration::from_millis(300),
            width: 800,
            height: 500,
            app_name: "PromptHub".to_string(),
        }
    }
}

/// Observable state of one photo slot
#[derive(Debug, Clone, Default)]
pub struct PhotoState {
    /// The loaded photo, if any
    pub photo: Option<Photo>,
    /// Derived resized/cropped display URL
    pub src: Option<String>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Surfaced error kind; mutually exclusive with `photo`
    pub error: Option<PhotoError>,
    /// Attribution for the loaded photo
    pub attribution: Option<Attribution>,
}

struct Inner<S> {
    source: S,
    ledger: DownloadLedger,
    options: ControllerOptions,
    state: Mutex<PhotoState>,
    raw_query: Mutex<String>,
    debounced_query: Mutex<String>,
    visible: AtomicBool,
    // Bumped on every query change; a debounce sleep only settles if its
    // generation is still current afterwards.
    debounce_gen: AtomicU64,
    // Bumped on every fetch start and on shutdown; stale resolutions are
    // discarded by comparison.
    fetch_gen: AtomicU64,
}

/// Acquisition controller for a single UI element's photo.
///
/// Cheap to clone; clones share state, like handles to the same mount point.
pub struct PhotoController<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for PhotoController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: PhotoSource> PhotoController<S> {
    /// Create a controller over a photo source and download ledger.
    #[must_use]
    pub fn new(source: S, ledger: DownloadLedger, options: ControllerOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                ledger,
                options,
                state: Mutex::new(PhotoState::default()),
                raw_query: Mutex::new(String::new()),
                debounced_query: Mutex::new(String::new()),
                visible: AtomicBool::new(false),
                debounce_gen: AtomicU64::new(0),
                fetch_gen: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> PhotoState {
        self.inner.state.lock().unwrap().clone()
    }

    /// The photo source this controller fetches from.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.inner.source
    }

    /// The most recently requested query, before the debounce settles it.
    #[must_use]
    pub fn query(&self) -> String {
        self.inner.raw_query.lock().unwrap().clone()
    }

    /// Whether the element has entered the viewport.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.visible.load(Ordering::Acquire)
    }

    /// Report that the element entered the viewport.
    ///
    /// One-shot: only the first call flips the gate (the observer detaches
    /// after the first intersection); later calls are no-ops. Triggers a
    /// fetch if a settled query is already waiting.
    pub async fn mark_visible(&self) {
        if self.inner.visible.swap(true, Ordering::AcqRel) {
            return;
        }
        let query = self.inner.debounced_query.lock().unwrap().clone();
        if self.inner.options.immediate && !query.trim().is_empty() {
            self.fetch(&query).await;
        }
    }

    /// Update the query, debounce it, and fetch if it settles.
    ///
    /// Rapid successive calls collapse: each call restarts the debounce
    /// window and only the final value triggers a fetch. The fetch fires
    /// only when immediate mode is on, the element is visible, and the
    /// settled query is non-empty.
    pub async fn update_query(&self, query: &str) {
        let generation = self.inner.debounce_gen.fetch_add(1, Ordering::AcqRel) + 1;
        *self.inner.raw_query.lock().unwrap() = query.to_string();

        sleep(self.inner.options.debounce).await;

        if self.inner.debounce_gen.load(Ordering::Acquire) != generation {
            // A newer query superseded this one within the window.
            return;
        }

        *self.inner.debounced_query.lock().unwrap() = query.to_string();

        if self.inner.options.immediate
            && self.inner.visible.load(Ordering::Acquire)
            && !query.trim().is_empty()
        {
            self.fetch(query).await;
        }
    }

    /// Re-run the fetch for the current settled query, bypassing the
    /// visibility and immediate-mode gates. Still subject to the
    /// latest-fetch-wins rule.
    pub async fn refetch(&self) {
        let query = self.inner.debounced_query.lock().unwrap().clone();
        self.fetch(&query).await;
    }

    /// Cancel in-flight work and drop the visibility subscription.
    ///
    /// Any fetch that resolves afterwards is discarded without touching
    /// state. Models component unmount.
    pub fn shutdown(&self) {
        self.inner.fetch_gen.fetch_add(1, Ordering::AcqRel);
        self.inner.debounce_gen.fetch_add(1, Ordering::AcqRel);
    }

    async fn fetch(&self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        let generation = self.inner.fetch_gen.fetch_add(1, Ordering::AcqRel) + 1;

        {
            let mut state = self.inner.state.lock().unwrap();
            state.loading = true;
            state.error = None;
            // Previous photo/src stay in place until the result lands, to
            // avoid flicker on refetch.
        }

        let outcome = self.inner.source.fetch_random_photo(query).await;

        // The generation check must happen under the state lock: a newer
        // fetch bumps the generation before it touches state, so a stale
        // result observed here can never interleave with the newer fetch's
        // writes.
        let mut state = self.inner.state.lock().unwrap();
        if self.inner.fetch_gen.load(Ordering::Acquire) != generation {
            tracing::debug!("discarding stale fetch result for {query:?}");
            return;
        }
        state.loading = false;
        match outcome {
            FetchOutcome::Found(photo) => {
                state.src = Some(build_photo_src(
                    &photo.urls.raw,
                    self.inner.options.width,
                    self.inner.options.height,
                ));
                state.attribution = Some(build_attribution(&photo, &self.inner.options.app_name));
                state.photo = Some(photo);
                state.error = None;
            }
            FetchOutcome::NotFound => {
                state.photo = None;
                state.src = None;
                state.attribution = None;
                state.error = Some(PhotoError::Fetch);
            }
            FetchOutcome::Failed => {
                state.photo = None;
                state.src = None;
                state.attribution = None;
                state.error = Some(PhotoError::Network);
            }
        }
    }

    /// Track the loaded photo's download at most once per photo per session.
    ///
    /// No-op without a loaded photo. Checks the in-memory set, then the
    /// session store; the in-memory mark is taken optimistically before the
    /// network call and rolled back on failure so a retry stays possible.
    /// Never surfaces an error.
    pub async fn trigger_download_once(&self) {
        let photo = {
            let state = self.inner.state.lock().unwrap();
            match &state.photo {
                Some(photo) => photo.clone(),
                None => return,
            }
        };

        if self.inner.ledger.is_tracked(&photo.id) {
            tracing::debug!("download already tracked for photo {}", photo.id);
            return;
        }

        if !self.inner.ledger.mark_in_memory(&photo.id) {
            // Lost a same-instance race; the winner handles the call.
            return;
        }

        if self
            .inner
            .source
            .track_download(&photo.links.download_location)
            .await
        {
            self.inner.ledger.persist(&photo.id);
            tracing::debug!("download tracked for photo {}", photo.id);
        } else {
            self.inner.ledger.unmark_in_memory(&photo.id);
            tracing::debug!("download tracking failed for photo {}", photo.id);
        }
    }
}
