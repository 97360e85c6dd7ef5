//! # scenario-cards
//!
//! Turn the scenario pages of a tournament pack PDF into printable
//! poker-size playing cards.
//!
//! Each selected page yields one snapshot of its map area and the rules text
//! beneath it. The two become an image card and a text card, placed side by
//! side in a grid on US-letter sheets ready to print, cut and sleeve.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate the path and %PDF magic
//!  ├─ 2. Extract  render at zoom, crop + rotate the map, read the text region (pdfium)
//!  ├─ 3. Clean    normalise text, mark headers as **bold**
//!  ├─ 4. Layout   place image/text cell pairs on a column-major grid
//!  └─ 5. Compose  draw borders, images, text and underlines into a new PDF
//! ```
//!
//! [`export_pages`] stops after step 2 and writes `page_{n}_snapshot.png` /
//! `page_{n}_bottom.txt` files instead.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scenario_cards::{make_cards, CardConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CardConfig::default(); // pages 7–18, letter, 2.5 × 3.5 in cards
//!     let output = make_cards("scenario_pack.pdf", "playing_cards.pdf", &config).await?;
//!     eprintln!("{} cards on {} sheets", output.cards.len(), output.stats.sheet_pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `cardmaker` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! pdfium itself is loaded at runtime: from `CardConfig::pdfium_lib_path`,
//! `PDFIUM_LIB_PATH`, the working directory, or the system library path.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod card;
pub mod config;
pub mod convert;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use card::Card;
pub use config::{
    CardConfig, CardConfigBuilder, CardGeometry, CropRegion, ExtractionSettings, LayoutConfig,
    OverflowPolicy, PageSelection, SnapshotRotation, StrokeStyle, TextStyle,
};
pub use convert::{export_pages, export_pages_sync, inspect, make_cards, make_cards_sync};
pub use error::CardMakerError;
pub use layout::{layout_cards, CardSheet, LayoutCursor};
pub use output::{CardRunOutput, CardSummary, DocumentMetadata, ExportOutput, ExportedPage, RunStats};
pub use progress::{CardProgressCallback, NoopProgressCallback, ProgressCallback};
