//! Export: dump each page's snapshot and text into two directories.
//!
//! Files are named `page_{n}_snapshot.png` and `page_{n}_bottom.txt`, with
//! `n` the 1-indexed source page. Text is cleaned but not header-marked.

use crate::card::{snapshot_file_name, text_file_name};
use crate::error::CardMakerError;
use crate::output::ExportedPage;
use crate::pipeline::cleanup::clean_text;
use crate::pipeline::extract::{save_snapshot, PageExtract};
use std::path::Path;
use tracing::debug;

/// Create both output directories if they don't exist.
pub fn prepare_dirs(image_dir: &Path, text_dir: &Path) -> Result<(), CardMakerError> {
    for dir in [image_dir, text_dir] {
        std::fs::create_dir_all(dir).map_err(|source| CardMakerError::OutputWriteFailed {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write one page's snapshot and text.
pub fn write_page(
    page: &PageExtract,
    image_dir: &Path,
    text_dir: &Path,
) -> Result<ExportedPage, CardMakerError> {
    let image_path = image_dir.join(snapshot_file_name(page.page_num));
    save_snapshot(&page.snapshot, &image_path, page.page_num)?;

    let text = clean_text(&page.text);
    let text_path = text_dir.join(text_file_name(page.page_num));
    std::fs::write(&text_path, &text).map_err(|source| CardMakerError::OutputWriteFailed {
        path: text_path.clone(),
        source,
    })?;

    debug!(
        "Exported page {} → {}, {}",
        page.page_num,
        image_path.display(),
        text_path.display()
    );

    Ok(ExportedPage {
        page_num: page.page_num,
        image_path,
        text_path,
        text_len: text.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    #[test]
    fn writes_named_files_into_both_dirs() {
        let root = tempfile::tempdir().unwrap();
        let image_dir = root.path().join("snapshot_images_high_res");
        let text_dir = root.path().join("extracted_text");
        prepare_dirs(&image_dir, &text_dir).unwrap();

        let page = PageExtract {
            page_num: 7,
            snapshot: DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 6, Rgba([9, 9, 9, 255]))),
            text: "Game Length \r\nThe game lasts 5 turns.\r\n".to_string(),
        };
        let exported = write_page(&page, &image_dir, &text_dir).unwrap();

        assert_eq!(exported.image_path, image_dir.join("page_7_snapshot.png"));
        assert_eq!(exported.text_path, text_dir.join("page_7_bottom.txt"));
        assert!(exported.image_path.exists());
        let text = std::fs::read_to_string(&exported.text_path).unwrap();
        assert_eq!(text, "Game Length\nThe game lasts 5 turns.\n");
        assert_eq!(exported.text_len, text.len());
    }

    #[test]
    fn prepare_dirs_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let a = root.path().join("a");
        let b = root.path().join("b");
        prepare_dirs(&a, &b).unwrap();
        prepare_dirs(&a, &b).unwrap();
        assert!(a.is_dir() && b.is_dir());
    }
}
