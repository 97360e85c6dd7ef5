//! Progress-callback trait for per-page extraction events.
//!
//! Inject an [`Arc<dyn CardProgressCallback>`] via
//! [`crate::config::CardConfigBuilder::progress_callback`] to receive events
//! as the pipeline extracts each source page. The CLI uses this to drive its
//! progress bar.
//!
//! # Example
//!
//! ```rust
//! use scenario_cards::{CardConfig, CardProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     extracted: AtomicUsize,
//! }
//!
//! impl CardProgressCallback for CountingCallback {
//!     fn on_page_complete(&self, page_num: usize, total_pages: usize, text_len: usize) {
//!         self.extracted.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("page {page_num}/{total_pages}: {text_len} chars of text");
//!     }
//! }
//!
//! let config = CardConfig::builder()
//!     .progress_callback(Arc::new(CountingCallback { extracted: AtomicUsize::new(0) }))
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the pipeline as it works through the selected pages.
///
/// Events fire from the blocking worker thread that owns the pdfium
/// document, hence `Send + Sync`. All methods default to no-ops.
pub trait CardProgressCallback: Send + Sync {
    /// Called once, after the page selection is resolved.
    fn on_run_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called before a source page is rendered.
    ///
    /// `page_num` is 1-indexed; `total_pages` is the number selected.
    fn on_page_start(&self, page_num: usize, total_pages: usize) {
        let _ = (page_num, total_pages);
    }

    /// Called when a page's snapshot and text are both extracted.
    fn on_page_complete(&self, page_num: usize, total_pages: usize, text_len: usize) {
        let _ = (page_num, total_pages, text_len);
    }

    /// Called when a page fails. The run aborts right after this.
    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        let _ = (page_num, total_pages, error);
    }

    /// Called once after the output is written.
    ///
    /// `sheet_pages` is the number of output pages; zero for exports.
    fn on_run_complete(&self, cards: usize, sheet_pages: usize) {
        let _ = (cards, sheet_pages);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl CardProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::CardConfig`].
pub type ProgressCallback = Arc<dyn CardProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TrackingCallback {
        starts: AtomicUsize,
        completes: AtomicUsize,
        errors: AtomicUsize,
        run_total: AtomicUsize,
        sheet_pages: AtomicUsize,
    }

    impl CardProgressCallback for TrackingCallback {
        fn on_run_start(&self, total_pages: usize) {
            self.run_total.store(total_pages, Ordering::SeqCst);
        }

        fn on_page_start(&self, _page_num: usize, _total_pages: usize) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_complete(&self, _page_num: usize, _total_pages: usize, _text_len: usize) {
            self.completes.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_error(&self, _page_num: usize, _total_pages: usize, _error: &str) {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }

        fn on_run_complete(&self, _cards: usize, sheet_pages: usize) {
            self.sheet_pages.store(sheet_pages, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_run_start(12);
        cb.on_page_start(7, 12);
        cb.on_page_complete(7, 12, 420);
        cb.on_page_error(8, 12, "render failed");
        cb.on_run_complete(12, 4);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback::default();

        tracker.on_run_start(2);
        tracker.on_page_start(7, 2);
        tracker.on_page_complete(7, 2, 100);
        tracker.on_page_start(8, 2);
        tracker.on_page_error(8, 2, "text layer missing");

        assert_eq!(tracker.run_total.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.completes.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.errors.load(Ordering::SeqCst), 1);

        tracker.on_run_complete(1, 1);
        assert_eq!(tracker.sheet_pages.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: ProgressCallback = Arc::new(NoopProgressCallback);
        cb.on_run_start(3);
        cb.on_page_complete(1, 3, 0);
    }
}
