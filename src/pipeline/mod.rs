//! Pipeline stages between a scenario PDF and its card sheet.
//!
//! ```text
//! input ──▶ engine ──▶ extract ──▶ cleanup ──▶ (layout) ──▶ compose
//! (path)    (pdfium)   (crop/text)  (headers)                 (PDF)
//!                          │
//!                          └──────▶ export (PNG + TXT directories)
//! ```
//!
//! 1. [`input`]: validate the user-supplied path is a readable PDF
//! 2. [`engine`]: bind libpdfium and open the document
//! 3. [`extract`]: render, crop and rotate the image region; read the text
//!    region
//! 4. [`cleanup`]: normalise extracted text and mark headers
//! 5. [`compose`]: draw a [`crate::layout::CardSheet`] into a new PDF
//! 6. [`export`]: alternative sink: write snapshots and text files
//!
//! Layout itself lives in [`crate::layout`] because it has no pdfium
//! dependency.

pub mod cleanup;
pub mod compose;
pub mod engine;
pub mod export;
pub mod extract;
pub mod input;
pub mod metadata;
