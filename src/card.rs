//! The unit of work: one source page turned into an image + text pair.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One scenario page, ready to be laid out as an image card and a text card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// 1-indexed page number in the source PDF.
    pub page_num: usize,
    /// Scratch PNG holding the cropped (and rotated) snapshot.
    pub snapshot: PathBuf,
    /// Snapshot width in pixels.
    pub image_width: u32,
    /// Snapshot height in pixels.
    pub image_height: u32,
    /// Cleaned text with `**header**` markers.
    pub text: String,
}

impl Card {
    pub fn new(
        page_num: usize,
        snapshot: impl Into<PathBuf>,
        image_width: u32,
        image_height: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            page_num,
            snapshot: snapshot.into(),
            image_width,
            image_height,
            text: text.into(),
        }
    }

    /// Snapshot height over width. Degenerate snapshots count as square.
    pub fn aspect_ratio(&self) -> f32 {
        if self.image_width == 0 || self.image_height == 0 {
            1.0
        } else {
            self.image_height as f32 / self.image_width as f32
        }
    }
}

/// File name of a page snapshot: `page_{n}_snapshot.png`.
pub fn snapshot_file_name(page_num: usize) -> String {
    format!("page_{page_num}_snapshot.png")
}

/// File name of a page's extracted text: `page_{n}_bottom.txt`.
pub fn text_file_name(page_num: usize) -> String {
    format!("page_{page_num}_bottom.txt")
}
