//! Composition: turn a laid-out [`CardSheet`] into a PDF with pdfium.
//!
//! The layout engine has already decided every coordinate; this module only
//! draws. Each cell gets a stroked border, then either its snapshot (read
//! back from scratch storage) or its text lines and header underlines.

use crate::card::Card;
use crate::config::{LayoutConfig, POINTS_PER_INCH};
use crate::error::CardMakerError;
use crate::layout::{CardCell, CardSheet, CellContent, Rect};
use crate::metrics::Typeface;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

struct Pens {
    regular: PdfFontToken,
    bold: PdfFontToken,
    stroke: PdfColor,
    stroke_width: PdfPoints,
}

/// Draw `sheet` into a new PDF and save it to `output`.
///
/// The file is written next to `output` first and renamed into place, so a
/// failed run never leaves a half-written card sheet behind.
pub fn write_sheet(
    pdfium: &Pdfium,
    sheet: &CardSheet,
    cards: &[Card],
    config: &LayoutConfig,
    output: &Path,
) -> Result<(), CardMakerError> {
    let mut document = pdfium
        .create_new_pdf()
        .map_err(|e| CardMakerError::ComposeFailed {
            page: 0,
            detail: format!("create document: {:?}", e),
        })?;

    let pens = Pens {
        regular: document.fonts_mut().helvetica(),
        bold: document.fonts_mut().helvetica_bold(),
        stroke: PdfColor::new(config.border.grey, config.border.grey, config.border.grey, 255),
        stroke_width: PdfPoints::new(config.border.width),
    };
    let page_width = PdfPoints::new(config.geometry.page_width * POINTS_PER_INCH);
    let page_height = PdfPoints::new(config.geometry.page_height * POINTS_PER_INCH);

    for (index, sheet_page) in sheet.pages.iter().enumerate() {
        let mut page = document
            .pages_mut()
            .create_page_at_end(PdfPagePaperSize::Custom(page_width, page_height))
            .map_err(|e| compose_error(index, "create page", e))?;

        for cell in &sheet_page.cells {
            draw_cell(&mut page, index, cell, cards, &pens)?;
        }
        debug!("Composed sheet page {} ({} cells)", index + 1, sheet_page.cells.len());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CardMakerError::OutputWriteFailed {
            path: output.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = output.with_extension("pdf.tmp");
    let saved = document
        .save_to_file(&tmp_path)
        .map_err(|e| std::io::Error::other(format!("{:?}", e)))
        .and_then(|()| std::fs::rename(&tmp_path, output));
    if let Err(source) = saved {
        discard_partial(&tmp_path);
        return Err(CardMakerError::OutputWriteFailed {
            path: output.to_path_buf(),
            source,
        });
    }

    info!("Card sheet saved to {} ({} pages)", output.display(), sheet.pages.len());
    Ok(())
}

/// Remove a half-written sheet. Missing files are fine.
fn discard_partial(tmp_path: &Path) {
    match std::fs::remove_file(tmp_path) {
        Ok(()) => debug!("Removed partial sheet {}", tmp_path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial sheet {}: {}", tmp_path.display(), e),
    }
}

fn compose_error(index: usize, what: &str, e: impl std::fmt::Debug) -> CardMakerError {
    CardMakerError::ComposeFailed {
        page: index + 1,
        detail: format!("{what}: {e:?}"),
    }
}

fn draw_cell(
    page: &mut PdfPage,
    index: usize,
    cell: &CardCell,
    cards: &[Card],
    pens: &Pens,
) -> Result<(), CardMakerError> {
    let objects = page.objects_mut();
    let f = &cell.frame;
    objects
        .create_path_object_rect(
            PdfRect::new_from_values(f.y, f.x, f.top(), f.right()),
            Some(pens.stroke),
            Some(pens.stroke_width),
            None,
        )
        .map_err(|e| compose_error(index, "border", e))?;

    match &cell.content {
        CellContent::Image { placement } => {
            let card = cards.get(cell.card_index).ok_or_else(|| {
                CardMakerError::Internal(format!("cell refers to missing card {}", cell.card_index))
            })?;
            let image = image::open(&card.snapshot).map_err(|source| {
                CardMakerError::SnapshotReadFailed {
                    path: card.snapshot.clone(),
                    source,
                }
            })?;
            let Rect { x, y, width, height } = *placement;
            objects
                .create_image_object(
                    PdfPoints::new(x),
                    PdfPoints::new(y),
                    &image,
                    Some(PdfPoints::new(width)),
                    Some(PdfPoints::new(height)),
                )
                .map_err(|e| compose_error(index, "image", e))?;
        }
        CellContent::Text(block) => {
            for line in block.lines.iter().filter(|l| !l.text.is_empty()) {
                let font = match line.face {
                    Typeface::Helvetica => pens.regular,
                    Typeface::HelveticaBold => pens.bold,
                };
                objects
                    .create_text_object(
                        PdfPoints::new(line.x),
                        PdfPoints::new(line.baseline),
                        &line.text,
                        font,
                        PdfPoints::new(line.font_size),
                    )
                    .map_err(|e| compose_error(index, "text", e))?;

                if let Some(u) = line.underline {
                    objects
                        .create_path_object_line(
                            PdfPoints::new(u.x1),
                            PdfPoints::new(u.y),
                            PdfPoints::new(u.x2),
                            PdfPoints::new(u.y),
                            pens.stroke,
                            pens.stroke_width,
                        )
                        .map_err(|e| compose_error(index, "underline", e))?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discard_partial_removes_leftover_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let tmp = dir.path().join("playing_cards.pdf.tmp");
        std::fs::write(&tmp, b"%PDF-1.7 half written").unwrap();

        discard_partial(&tmp);
        assert!(!tmp.exists());

        // already gone: nothing to do, nothing to report
        discard_partial(&tmp);
        assert!(!tmp.exists());
    }
}
