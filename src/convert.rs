//! Top-level entry points.
//!
//! Each entry point validates the input path on the async side, then moves
//! all pdfium work onto a blocking thread: pdfium keeps thread-local state and
//! must not run on a Tokio worker. Within that thread the run is strictly
//! sequential, and the first failing page aborts it.

use crate::card::{snapshot_file_name, Card};
use crate::config::CardConfig;
use crate::error::CardMakerError;
use crate::layout;
use crate::output::{CardRunOutput, CardSummary, DocumentMetadata, ExportOutput, RunStats};
use crate::pipeline::cleanup::{clean_text, HeaderMarker};
use crate::pipeline::{compose, engine, export, extract, input, metadata};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Turn the selected pages of `input` into a printable card sheet at
/// `output`.
///
/// # Errors
/// Any failure aborts the run: unreadable input, a page outside the
/// document, a render/extract failure on any page, or an unwritable output.
/// Scratch snapshots are removed either way.
pub async fn make_cards(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &CardConfig,
) -> Result<CardRunOutput, CardMakerError> {
    let total_start = Instant::now();
    let pdf_path = input::resolve_local(input)?;
    let output = output.as_ref().to_path_buf();
    let config = config.clone();
    info!("Making cards: {} → {}", pdf_path.display(), output.display());

    tokio::task::spawn_blocking(move || {
        make_cards_blocking(&pdf_path, &output, &config, total_start)
    })
    .await
    .map_err(|e| CardMakerError::Internal(format!("Card task panicked: {}", e)))?
}

/// Synchronous wrapper around [`make_cards`].
///
/// Creates a temporary tokio runtime internally.
pub fn make_cards_sync(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &CardConfig,
) -> Result<CardRunOutput, CardMakerError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CardMakerError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(make_cards(input, output, config))
}

/// Write every selected page's snapshot into `image_dir` and its text into
/// `text_dir`, without laying out cards.
///
/// Pages are extracted with `config.export_extraction`, not the card
/// extraction settings.
pub async fn export_pages(
    input: impl AsRef<Path>,
    image_dir: impl AsRef<Path>,
    text_dir: impl AsRef<Path>,
    config: &CardConfig,
) -> Result<ExportOutput, CardMakerError> {
    let total_start = Instant::now();
    let pdf_path = input::resolve_local(input)?;
    let image_dir = image_dir.as_ref().to_path_buf();
    let text_dir = text_dir.as_ref().to_path_buf();
    let config = config.clone();
    info!("Exporting pages of {}", pdf_path.display());

    tokio::task::spawn_blocking(move || {
        export_pages_blocking(&pdf_path, image_dir, text_dir, &config, total_start)
    })
    .await
    .map_err(|e| CardMakerError::Internal(format!("Export task panicked: {}", e)))?
}

/// Synchronous wrapper around [`export_pages`].
pub fn export_pages_sync(
    input: impl AsRef<Path>,
    image_dir: impl AsRef<Path>,
    text_dir: impl AsRef<Path>,
    config: &CardConfig,
) -> Result<ExportOutput, CardMakerError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CardMakerError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(export_pages(input, image_dir, text_dir, config))
}

/// Read PDF metadata without rendering anything.
///
/// Only `pdfium_lib_path` and `password` are taken from `config`.
pub async fn inspect(
    input: impl AsRef<Path>,
    config: &CardConfig,
) -> Result<DocumentMetadata, CardMakerError> {
    let pdf_path = input::resolve_local(input)?;
    let lib_dir = config.pdfium_lib_path.clone();
    let password = config.password.clone();

    tokio::task::spawn_blocking(move || {
        let pdfium = engine::bind_pdfium(lib_dir.as_deref())?;
        let document = engine::load_document(&pdfium, &pdf_path, password.as_deref())?;
        Ok(metadata::read_metadata(&document))
    })
    .await
    .map_err(|e| CardMakerError::Internal(format!("Metadata task panicked: {}", e)))?
}

// ── Blocking implementations ─────────────────────────────────────────────

fn make_cards_blocking(
    pdf_path: &Path,
    output: &Path,
    config: &CardConfig,
    total_start: Instant,
) -> Result<CardRunOutput, CardMakerError> {
    let pdfium = engine::bind_pdfium(config.pdfium_lib_path.as_deref())?;
    let document = engine::load_document(&pdfium, pdf_path, config.password.as_deref())?;
    let metadata = metadata::read_metadata(&document);
    info!("PDF loaded: {} pages", metadata.page_count);

    let indices = config.pages.resolve(metadata.page_count)?;
    let progress = config.progress_callback.as_ref();
    if let Some(cb) = progress {
        cb.on_run_start(indices.len());
    }

    let marker = HeaderMarker::new(config.headers.as_slice())?;
    let scratch = tempfile::Builder::new()
        .prefix("scenario-cards-")
        .tempdir()
        .map_err(|e| CardMakerError::Internal(format!("scratch dir: {e}")))?;
    debug!("Scratch snapshots in {}", scratch.path().display());

    // ── Extract ──────────────────────────────────────────────────────────
    let extract_start = Instant::now();
    let cards = extract::extract_pages(&document, &indices, &config.extraction, progress, |page| {
        let path = scratch.path().join(snapshot_file_name(page.page_num));
        extract::save_snapshot(&page.snapshot, &path, page.page_num)?;
        let text = marker.mark(&clean_text(&page.text));
        Ok(Card::new(
            page.page_num,
            path,
            page.snapshot.width(),
            page.snapshot.height(),
            text,
        ))
    })?;
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;
    info!("Extracted {} cards in {}ms", cards.len(), extract_duration_ms);

    // ── Layout + compose ─────────────────────────────────────────────────
    let compose_start = Instant::now();
    let sheet = layout::layout_cards(&cards, &config.layout);
    compose::write_sheet(&pdfium, &sheet, &cards, &config.layout, output)?;
    let compose_duration_ms = compose_start.elapsed().as_millis() as u64;

    let summaries = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let sheet_page = sheet
                .cells()
                .find(|cell| cell.card_index == i)
                .map(|cell| cell.slot.page + 1)
                .unwrap_or(0);
            CardSummary::new(card, sheet_page)
        })
        .collect();

    if let Err(e) = scratch.close() {
        warn!("Failed to remove scratch snapshots: {}", e);
    }

    let stats = RunStats {
        total_pages: metadata.page_count,
        selected_pages: indices.len(),
        placed_cells: sheet.cells().count(),
        sheet_pages: sheet.pages.len(),
        overflowing_text_cards: sheet.overflowing_text_cells(),
        extract_duration_ms,
        compose_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };
    info!(
        "Card sheet complete: {} cards on {} pages, {}ms total",
        cards.len(),
        stats.sheet_pages,
        stats.total_duration_ms
    );

    if let Some(cb) = progress {
        cb.on_run_complete(cards.len(), stats.sheet_pages);
    }

    Ok(CardRunOutput {
        output_path: output.to_path_buf(),
        cards: summaries,
        metadata,
        stats,
    })
}

fn export_pages_blocking(
    pdf_path: &Path,
    image_dir: PathBuf,
    text_dir: PathBuf,
    config: &CardConfig,
    total_start: Instant,
) -> Result<ExportOutput, CardMakerError> {
    let pdfium = engine::bind_pdfium(config.pdfium_lib_path.as_deref())?;
    let document = engine::load_document(&pdfium, pdf_path, config.password.as_deref())?;
    let metadata = metadata::read_metadata(&document);

    let indices = config.pages.resolve(metadata.page_count)?;
    let progress = config.progress_callback.as_ref();
    if let Some(cb) = progress {
        cb.on_run_start(indices.len());
    }

    export::prepare_dirs(&image_dir, &text_dir)?;
    let pages = extract::extract_pages(
        &document,
        &indices,
        &config.export_extraction,
        progress,
        |page| export::write_page(&page, &image_dir, &text_dir),
    )?;

    info!(
        "Processing complete. Images saved to {}, text saved to {}.",
        image_dir.display(),
        text_dir.display()
    );
    if let Some(cb) = progress {
        cb.on_run_complete(pages.len(), 0);
    }

    Ok(ExportOutput {
        image_dir,
        text_dir,
        pages,
        metadata,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    })
}
