//! Binding the pdfium shared library.

use crate::error::CardMakerError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a directory that contains libpdfium.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Bind to pdfium, trying in order: `lib_dir`, `$PDFIUM_LIB_PATH`, the
/// working directory, then the system library search path.
pub fn bind_pdfium(lib_dir: Option<&Path>) -> Result<Pdfium, CardMakerError> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(dir) = lib_dir {
        candidates.push(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(PDFIUM_LIB_PATH_ENV).filter(|v| !v.is_empty()) {
        candidates.push(PathBuf::from(dir));
    }
    candidates.push(PathBuf::from("./"));

    let mut failures = Vec::new();
    for dir in &candidates {
        let lib = Pdfium::pdfium_platform_library_name_at_path(dir);
        match Pdfium::bind_to_library(&lib) {
            Ok(bindings) => {
                debug!("Bound pdfium from {}", lib.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => failures.push(format!("{}: {e:?}", lib.display())),
        }
    }

    match Pdfium::bind_to_system_library() {
        Ok(bindings) => {
            debug!("Bound system pdfium library");
            Ok(Pdfium::new(bindings))
        }
        Err(e) => {
            failures.push(format!("system library: {e:?}"));
            Err(CardMakerError::PdfiumBindingFailed(failures.join("; ")))
        }
    }
}

/// Open a PDF, mapping pdfium's load errors onto our error type.
pub fn load_document<'a>(
    pdfium: &'a Pdfium,
    pdf_path: &Path,
    password: Option<&'a str>,
) -> Result<PdfDocument<'a>, CardMakerError> {
    pdfium.load_pdf_from_file(pdf_path, password).map_err(|e| {
        let err_str = format!("{:?}", e);
        if err_str.contains("Password") || err_str.contains("password") {
            if password.is_some() {
                CardMakerError::WrongPassword {
                    path: pdf_path.to_path_buf(),
                }
            } else {
                CardMakerError::PasswordRequired {
                    path: pdf_path.to_path_buf(),
                }
            }
        } else {
            CardMakerError::CorruptPdf {
                path: pdf_path.to_path_buf(),
                detail: err_str,
            }
        }
    })
}
