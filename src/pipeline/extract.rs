//! Region extraction: crop a snapshot and read a text block off each page.
//!
//! Each page is rendered whole at `zoom` × 72 DPI and the image region is
//! cropped from the bitmap; cropping after rendering keeps the pixel maths
//! independent of pdfium's clip handling. Text comes from pdfium's text
//! layer, bounded by the text region.
//!
//! Both regions are fractions of the page with a top-left origin. PDF user
//! space has a bottom-left origin, so the text region is flipped before it is
//! handed to pdfium.

use crate::config::{CropRegion, ExtractionSettings, SnapshotRotation};
use crate::error::CardMakerError;
use crate::progress::ProgressCallback;
use image::{DynamicImage, ImageFormat};
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// What one source page yields before it becomes a card or an export.
#[derive(Debug)]
pub struct PageExtract {
    /// 1-indexed.
    pub page_num: usize,
    pub snapshot: DynamicImage,
    /// Raw text from the text region, as pdfium returned it.
    pub text: String,
}

/// Extract every page in `indices` (0-indexed) in order, handing each result
/// to `sink`. The first error aborts the loop.
pub fn extract_pages<T>(
    document: &PdfDocument,
    indices: &[usize],
    settings: &ExtractionSettings,
    progress: Option<&ProgressCallback>,
    mut sink: impl FnMut(PageExtract) -> Result<T, CardMakerError>,
) -> Result<Vec<T>, CardMakerError> {
    let pages = document.pages();
    let total = indices.len();
    info!("Extracting {} pages at zoom {}", total, settings.zoom);

    let mut results = Vec::with_capacity(total);
    for &idx in indices {
        let page_num = idx + 1;
        if let Some(cb) = progress {
            cb.on_page_start(page_num, total);
        }

        let outcome = pages
            .get(idx as PdfPageIndex)
            .map_err(|e| CardMakerError::RasterisationFailed {
                page: page_num,
                detail: format!("{:?}", e),
            })
            .and_then(|page| extract_page(&page, page_num, settings))
            .and_then(|extract| {
                let text_len = extract.text.len();
                sink(extract).map(|out| (out, text_len))
            });

        match outcome {
            Ok((out, text_len)) => {
                if let Some(cb) = progress {
                    cb.on_page_complete(page_num, total, text_len);
                }
                results.push(out);
            }
            Err(e) => {
                if let Some(cb) = progress {
                    cb.on_page_error(page_num, total, &e.to_string());
                }
                return Err(e);
            }
        }
    }

    Ok(results)
}

/// Render, crop and rotate the image region of `page`, and read its text
/// region.
pub fn extract_page(
    page: &PdfPage,
    page_num: usize,
    settings: &ExtractionSettings,
) -> Result<PageExtract, CardMakerError> {
    let width = page.width().value;
    let height = page.height().value;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(settings.zoom);
    let bitmap = page.render_with_config(&render_config).map_err(|e| {
        CardMakerError::RasterisationFailed {
            page: page_num,
            detail: format!("{:?}", e),
        }
    })?;
    let rendered = bitmap.as_image();

    let (x, y, w, h) = pixel_rect(&settings.image_region, rendered.width(), rendered.height());
    let snapshot = rotate(rendered.crop_imm(x, y, w, h), settings.rotation);
    debug!(
        "Page {} snapshot → {}x{} px",
        page_num,
        snapshot.width(),
        snapshot.height()
    );

    let (bottom, left, top, right) = pdf_bounds(&settings.text_region, width, height);
    let text = page
        .text()
        .map_err(|e| CardMakerError::TextExtractionFailed {
            page: page_num,
            detail: format!("{:?}", e),
        })?
        .inside_rect(PdfRect::new_from_values(bottom, left, top, right));
    debug!("Page {} text → {} chars", page_num, text.len());

    Ok(PageExtract {
        page_num,
        snapshot,
        text,
    })
}

/// Write a snapshot as PNG.
pub fn save_snapshot(
    snapshot: &DynamicImage,
    path: &Path,
    page_num: usize,
) -> Result<(), CardMakerError> {
    snapshot
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| CardMakerError::SnapshotWriteFailed {
            page: page_num,
            path: path.to_path_buf(),
            source,
        })
}

/// Pixel rectangle `(x, y, width, height)` of `region` in an image of the
/// given size. Always at least one pixel and never past the image edge.
pub fn pixel_rect(region: &CropRegion, img_width: u32, img_height: u32) -> (u32, u32, u32, u32) {
    let px = |frac: f32, extent: u32| ((frac * extent as f32).round() as u32).min(extent);
    let x0 = px(region.left, img_width).min(img_width.saturating_sub(1));
    let y0 = px(region.top, img_height).min(img_height.saturating_sub(1));
    let x1 = px(region.right, img_width).max(x0 + 1);
    let y1 = px(region.bottom, img_height).max(y0 + 1);
    (x0, y0, x1 - x0, y1 - y0)
}

/// `(bottom, left, top, right)` of `region` in PDF points for a page of the
/// given size.
pub fn pdf_bounds(region: &CropRegion, page_width: f32, page_height: f32) -> (f32, f32, f32, f32) {
    (
        page_height * (1.0 - region.bottom),
        page_width * region.left,
        page_height * (1.0 - region.top),
        page_width * region.right,
    )
}

pub fn rotate(image: DynamicImage, rotation: SnapshotRotation) -> DynamicImage {
    match rotation {
        SnapshotRotation::None => image,
        SnapshotRotation::Clockwise90 => image.rotate90(),
        SnapshotRotation::Half => image.rotate180(),
        SnapshotRotation::Counterclockwise90 => image.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn pixel_rect_of_card_region() {
        // letter page at zoom 4: 2448 x 3168
        let region = CropRegion::new(0.14, 0.07, 0.86, 0.49);
        let (x, y, w, h) = pixel_rect(&region, 2448, 3168);
        assert_eq!((x, y), (343, 222));
        assert_eq!((x + w, y + h), (2105, 1552));
    }

    #[test]
    fn pixel_rect_never_empty_or_outside() {
        let sliver = CropRegion::new(0.5, 0.5, 0.5001, 0.5001);
        let (_, _, w, h) = pixel_rect(&sliver, 10, 10);
        assert_eq!((w, h), (1, 1));

        let edge = CropRegion::new(0.99, 0.99, 1.0, 1.0);
        let (x, y, w, h) = pixel_rect(&edge, 10, 10);
        assert!(x + w <= 10 && y + h <= 10);
        assert!(w >= 1 && h >= 1);
    }

    #[test]
    fn text_region_is_flipped_to_pdf_space() {
        let (bottom, left, top, right) = pdf_bounds(&CropRegion::bottom_half(), 612.0, 792.0);
        assert_eq!((bottom, left, top, right), (0.0, 0.0, 396.0, 612.0));

        let upper = CropRegion::new(0.1, 0.0, 0.9, 0.25);
        let (bottom, _, top, _) = pdf_bounds(&upper, 612.0, 792.0);
        assert_eq!((bottom, top), (594.0, 792.0));
    }

    #[test]
    fn clockwise_rotation_swaps_dimensions() {
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        let rotated = rotate(DynamicImage::ImageRgba8(img), SnapshotRotation::Clockwise90);
        assert_eq!((rotated.width(), rotated.height()), (2, 4));
        // top-left moves to top-right under a clockwise quarter turn
        assert_eq!(rotated.to_rgba8().get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn save_snapshot_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page_7_snapshot.png");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 5, Rgba([0, 0, 0, 255])));
        save_snapshot(&img, &path, 7).unwrap();
        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (3, 5));
    }

    #[test]
    fn save_snapshot_into_missing_dir_fails() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(1, 1));
        let err = save_snapshot(&img, Path::new("/no/such/dir/x.png"), 3).unwrap_err();
        assert!(matches!(err, CardMakerError::SnapshotWriteFailed { page: 3, .. }));
    }
}
