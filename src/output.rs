//! Result types returned by the top-level entry points.
//!
//! All of them serialise to JSON for `cardmaker --json`.

use crate::card::Card;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Info dictionary and structure of the source PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub page_count: usize,
    pub pdf_version: String,
}

/// Outcome of [`crate::make_cards`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRunOutput {
    pub output_path: PathBuf,
    pub cards: Vec<CardSummary>,
    pub metadata: DocumentMetadata,
    pub stats: RunStats,
}

/// What became of one source page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub page_num: usize,
    pub image_width: u32,
    pub image_height: u32,
    pub text_lines: usize,
    /// Sheet page (1-indexed) holding the image card.
    pub sheet_page: usize,
}

impl CardSummary {
    pub fn new(card: &Card, sheet_page: usize) -> Self {
        Self {
            page_num: card.page_num,
            image_width: card.image_width,
            image_height: card.image_height,
            text_lines: card.text.lines().count(),
            sheet_page,
        }
    }
}

/// Counters and timings for one card run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Pages turned into cards.
    pub selected_pages: usize,
    /// Image and text cells placed; always twice the card count.
    pub placed_cells: usize,
    pub sheet_pages: usize,
    pub overflowing_text_cards: usize,
    pub extract_duration_ms: u64,
    pub compose_duration_ms: u64,
    pub total_duration_ms: u64,
}

/// Outcome of [`crate::export_pages`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOutput {
    pub image_dir: PathBuf,
    pub text_dir: PathBuf,
    pub pages: Vec<ExportedPage>,
    pub metadata: DocumentMetadata,
    pub total_duration_ms: u64,
}

/// Files written for one source page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedPage {
    pub page_num: usize,
    pub image_path: PathBuf,
    pub text_path: PathBuf,
    pub text_len: usize,
}
