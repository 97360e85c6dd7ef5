//! Card layout and pagination.
//!
//! Every [`Card`] becomes two adjacent grid cells: its image card, then its
//! text card. Cells fill each column top to bottom and each sheet page left
//! to right, as tracked by a [`LayoutCursor`] that is threaded through the
//! placement loop by value.
//!
//! Nothing here touches pdfium. The result is a [`CardSheet`] describing
//! every frame, image placement and text line in PDF points (origin at the
//! bottom-left of the sheet); [`crate::pipeline::compose`] turns that into a
//! document.

pub mod cursor;
pub mod text;

pub use cursor::{grid_capacity, LayoutCursor};
pub use text::{header_text, TextBlock, TextLine, Underline};

use crate::card::Card;
use crate::config::LayoutConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Axis-aligned rectangle in points, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// True if `other` lies within this rect, allowing float slack.
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.top() <= self.top() + EPS
    }
}

/// The full laid-out output: one entry per sheet page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSheet {
    pub pages: Vec<SheetPage>,
}

impl CardSheet {
    /// All cells in placement order.
    pub fn cells(&self) -> impl Iterator<Item = &CardCell> {
        self.pages.iter().flat_map(|p| p.cells.iter())
    }

    /// Number of text cards flagged as overflowing.
    pub fn overflowing_text_cells(&self) -> usize {
        self.cells()
            .filter(|c| matches!(&c.content, CellContent::Text(block) if block.overflows))
            .count()
    }
}

/// One output page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SheetPage {
    pub cells: Vec<CardCell>,
}

/// One grid position holding either an image card or a text card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardCell {
    pub slot: LayoutCursor,
    /// Card border.
    pub frame: Rect,
    /// Index into the input card slice.
    pub card_index: usize,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    /// Snapshot scaled to fit and centred in the frame.
    Image { placement: Rect },
    Text(TextBlock),
}

/// Lay `cards` out onto as many sheet pages as needed.
///
/// Always returns at least one page, even for no cards.
pub fn layout_cards(cards: &[Card], config: &LayoutConfig) -> CardSheet {
    let geometry = &config.geometry;
    let mut pages: Vec<SheetPage> = vec![SheetPage::default()];
    let mut cursor = LayoutCursor::start();

    for (card_index, card) in cards.iter().enumerate() {
        let frame = cursor.frame(geometry);
        let placement = fit_image(card.aspect_ratio(), &frame);
        place(&mut pages, cursor, frame, card_index, CellContent::Image { placement });
        cursor = cursor.advance(geometry);

        let frame = cursor.frame(geometry);
        let block = text::typeset(&card.text, &frame, &config.text, config.overflow);
        if block.overflows {
            warn!(
                "Text for page {} runs past its card ({} lines)",
                card.page_num,
                block.lines.len()
            );
        }
        place(&mut pages, cursor, frame, card_index, CellContent::Text(block));
        cursor = cursor.advance(geometry);
    }

    debug!(
        "Laid out {} cards on {} sheet pages",
        cards.len(),
        pages.len()
    );
    CardSheet { pages }
}

fn place(
    pages: &mut Vec<SheetPage>,
    slot: LayoutCursor,
    frame: Rect,
    card_index: usize,
    content: CellContent,
) {
    while pages.len() <= slot.page {
        pages.push(SheetPage::default());
    }
    pages[slot.page].cells.push(CardCell {
        slot,
        frame,
        card_index,
        content,
    });
}

/// Scale an image of the given height/width ratio to the frame width,
/// shrinking to the frame height instead if it would overflow, and centre it.
pub fn fit_image(aspect_ratio: f32, frame: &Rect) -> Rect {
    let mut width = frame.width;
    let mut height = frame.width * aspect_ratio;
    if height > frame.height {
        height = frame.height;
        width = frame.height / aspect_ratio;
    }
    Rect {
        x: frame.x + (frame.width - width) / 2.0,
        y: frame.y + (frame.height - height) / 2.0,
        width,
        height,
    }
}
