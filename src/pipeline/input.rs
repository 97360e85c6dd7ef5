//! Input validation: make sure the user-supplied path is a readable PDF.
//!
//! We validate the PDF magic bytes (`%PDF`) up front so callers get a
//! meaningful error rather than an opaque pdfium load failure.

use crate::error::CardMakerError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a local file path, validating existence and PDF magic bytes.
pub fn resolve_local(path: impl AsRef<Path>) -> Result<PathBuf, CardMakerError> {
    let path = path.as_ref().to_path_buf();

    if !path.exists() {
        return Err(CardMakerError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(CardMakerError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(CardMakerError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(CardMakerError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_reported() {
        let err = resolve_local("/definitely/not/a/scenario_pack.pdf").unwrap_err();
        assert!(matches!(err, CardMakerError::FileNotFound { .. }));
    }

    #[test]
    fn non_pdf_is_rejected_with_magic() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"PK\x03\x04zip").unwrap();
        match resolve_local(f.path()) {
            Err(CardMakerError::NotAPdf { magic, .. }) => assert_eq!(&magic, b"PK\x03\x04"),
            other => panic!("expected NotAPdf, got {other:?}"),
        }
    }

    #[test]
    fn pdf_header_is_accepted() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n").unwrap();
        let resolved = resolve_local(f.path()).unwrap();
        assert_eq!(resolved, f.path());
    }
}
