//! Error type for the scenario-cards library.
//!
//! A card run is a one-shot batch: if any page fails to render, extract or
//! compose, the whole run aborts. There is therefore a single fatal error
//! type, [`CardMakerError`], returned from every top-level entry point.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the scenario-cards library.
#[derive(Debug, Error)]
pub enum CardMakerError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// A selected page number exceeds the actual page count.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange { page: usize, total: usize },

    /// The page selection resolved to nothing.
    #[error("No pages selected (document has {total} pages)")]
    NoPagesSelected { total: usize },

    /// pdfium-render failed to rasterise a page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// pdfium-render failed to read the text layer of a page.
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtractionFailed { page: usize, detail: String },

    // ── Scratch image errors ──────────────────────────────────────────────
    /// A cropped snapshot could not be encoded or written.
    #[error("Failed to write snapshot for page {page} to '{path}': {source}")]
    SnapshotWriteFailed {
        page: usize,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A snapshot written earlier in the run could not be loaded back.
    #[error("Failed to read snapshot '{path}': {source}")]
    SnapshotReadFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// pdfium refused to build part of the card document.
    #[error("Failed to compose sheet page {page}: {detail}")]
    ComposeFailed { page: usize, detail: String },

    /// Could not create or write an output file or directory.
    #[error("Failed to write output '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Place libpdfium next to the binary, install it system-wide, or\n\
set PDFIUM_LIB_PATH=/path/to/dir-containing-libpdfium.\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
