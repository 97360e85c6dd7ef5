//! Configuration types for a card run.
//!
//! Everything that used to be a constant in the card-making scripts lives in
//! [`CardConfig`]: the page selection, the crop fractions, render zoom and
//! rotation, the header list, and the full card geometry. Build one through
//! [`CardConfig::builder()`] or load one from JSON; every field has a default
//! matching the April tournament scenario pack.

use crate::error::CardMakerError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Headers bolded and underlined on text cards by default.
pub const DEFAULT_HEADERS: [&str; 4] = [
    "Setting up the Battlefield",
    "Scenario Special Rules",
    "Victory Points",
    "Game Length",
];

/// Configuration for one card run.
///
/// # Example
/// ```rust
/// use scenario_cards::{CardConfig, PageSelection};
///
/// let config = CardConfig::builder()
///     .pages(PageSelection::Range(7, 18))
///     .zoom(4.0)
///     .build()
///     .unwrap();
/// assert_eq!(config.extraction.zoom, 4.0);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Directory containing the pdfium shared library. If None, tries
    /// `PDFIUM_LIB_PATH`, then the working directory, then the system library.
    pub pdfium_lib_path: Option<PathBuf>,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Source pages to turn into cards. Default: pages 7 through 18.
    pub pages: PageSelection,

    /// Where to crop the image and read the text on each source page.
    pub extraction: ExtractionSettings,

    /// Extraction used by the snapshot/text export instead of `extraction`.
    /// Default: [`ExtractionSettings::snapshot_export`].
    pub export_extraction: ExtractionSettings,

    /// Header strings to mark bold on text cards.
    pub headers: Vec<String>,

    /// Card sheet geometry and typography.
    pub layout: LayoutConfig,

    /// Optional per-page progress events.
    #[serde(skip)]
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            pdfium_lib_path: None,
            password: None,
            pages: PageSelection::default(),
            extraction: ExtractionSettings::default(),
            export_extraction: ExtractionSettings::snapshot_export(),
            headers: DEFAULT_HEADERS.iter().map(|h| h.to_string()).collect(),
            layout: LayoutConfig::default(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for CardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardConfig")
            .field("pdfium_lib_path", &self.pdfium_lib_path)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pages", &self.pages)
            .field("extraction", &self.extraction)
            .field("export_extraction", &self.export_extraction)
            .field("headers", &self.headers)
            .field("layout", &self.layout)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn CardProgressCallback>"),
            )
            .finish()
    }
}

impl CardConfig {
    /// Create a new builder for `CardConfig`.
    pub fn builder() -> CardConfigBuilder {
        CardConfigBuilder {
            config: Self::default(),
        }
    }

    /// Parse a JSON document into a config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, CardMakerError> {
        let config: CardConfig = serde_json::from_str(json)
            .map_err(|e| CardMakerError::InvalidConfig(format!("bad config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Turn this config back into a builder for further overrides.
    pub fn into_builder(self) -> CardConfigBuilder {
        CardConfigBuilder { config: self }
    }

    /// Check every constraint the builder enforces.
    pub fn validate(&self) -> Result<(), CardMakerError> {
        self.extraction.validate("extraction")?;
        self.export_extraction.validate("export_extraction")?;
        if self.headers.iter().any(|h| h.trim().is_empty()) {
            return Err(CardMakerError::InvalidConfig(
                "header strings must not be blank".into(),
            ));
        }
        self.layout.validate()
    }
}

/// Builder for [`CardConfig`].
#[derive(Debug)]
pub struct CardConfigBuilder {
    config: CardConfig,
}

impl CardConfigBuilder {
    pub fn pdfium_lib_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.pdfium_lib_path = Some(dir.into());
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pages(mut self, selection: PageSelection) -> Self {
        self.config.pages = selection;
        self
    }

    pub fn extraction(mut self, settings: ExtractionSettings) -> Self {
        self.config.extraction = settings;
        self
    }

    pub fn export_extraction(mut self, settings: ExtractionSettings) -> Self {
        self.config.export_extraction = settings;
        self
    }

    pub fn image_region(mut self, region: CropRegion) -> Self {
        self.config.extraction.image_region = region;
        self
    }

    pub fn text_region(mut self, region: CropRegion) -> Self {
        self.config.extraction.text_region = region;
        self
    }

    pub fn zoom(mut self, zoom: f32) -> Self {
        self.config.extraction.zoom = zoom;
        self
    }

    pub fn rotation(mut self, rotation: SnapshotRotation) -> Self {
        self.config.extraction.rotation = rotation;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn geometry(mut self, geometry: CardGeometry) -> Self {
        self.config.layout.geometry = geometry;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.config.layout.text.font_size = size;
        self
    }

    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.config.layout.overflow = policy;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<CardConfig, CardMakerError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// ── Extraction ───────────────────────────────────────────────────────────

/// How to pull an image and a text block off each source page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    /// Region rasterised into the image card.
    pub image_region: CropRegion,
    /// Region whose text layer becomes the text card.
    pub text_region: CropRegion,
    /// Render scale relative to 72 DPI. Default: 4.0.
    pub zoom: f32,
    /// Rotation applied to the cropped snapshot. Default: clockwise 90°.
    pub rotation: SnapshotRotation,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            image_region: CropRegion::new(0.14, 0.07, 0.86, 0.49),
            text_region: CropRegion::bottom_half(),
            zoom: 4.0,
            rotation: SnapshotRotation::Clockwise90,
        }
    }
}

impl ExtractionSettings {
    /// Preset used when dumping raw snapshots and text to directories:
    /// a slightly wider crop at half the zoom, unrotated.
    pub fn snapshot_export() -> Self {
        Self {
            image_region: CropRegion::new(0.12, 0.06, 0.88, 0.52),
            text_region: CropRegion::bottom_half(),
            zoom: 2.0,
            rotation: SnapshotRotation::None,
        }
    }

    fn validate(&self, name: &str) -> Result<(), CardMakerError> {
        self.image_region.validate(&format!("{name}.image_region"))?;
        self.text_region.validate(&format!("{name}.text_region"))?;
        if !(0.1..=10.0).contains(&self.zoom) {
            return Err(CardMakerError::InvalidConfig(format!(
                "{name}.zoom must be 0.1–10, got {}",
                self.zoom
            )));
        }
        Ok(())
    }
}

/// A page region as fractions of page width/height, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl CropRegion {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The lower half of the page, full width.
    pub const fn bottom_half() -> Self {
        Self::new(0.0, 0.5, 1.0, 1.0)
    }

    fn validate(&self, name: &str) -> Result<(), CardMakerError> {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        if ![self.left, self.top, self.right, self.bottom]
            .into_iter()
            .all(in_unit)
        {
            return Err(CardMakerError::InvalidConfig(format!(
                "{name}: fractions must lie in 0.0–1.0, got {self:?}"
            )));
        }
        if self.left >= self.right || self.top >= self.bottom {
            return Err(CardMakerError::InvalidConfig(format!(
                "{name}: left/top must be less than right/bottom, got {self:?}"
            )));
        }
        Ok(())
    }
}

/// Rotation applied to a cropped snapshot before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotRotation {
    None,
    /// Quarter turn clockwise; landscape crops become portrait cards.
    #[default]
    Clockwise90,
    Half,
    Counterclockwise90,
}

// ── Layout ───────────────────────────────────────────────────────────────

/// Everything the layout engine needs besides the cards themselves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub geometry: CardGeometry,
    pub text: TextStyle,
    pub border: StrokeStyle,
    pub overflow: OverflowPolicy,
}

impl LayoutConfig {
    fn validate(&self) -> Result<(), CardMakerError> {
        let g = &self.geometry;
        let lengths = [
            g.page_width,
            g.page_height,
            g.card_width,
            g.card_height,
            g.vertical_margin,
            g.horizontal_margin,
            g.horizontal_spacing,
            g.vertical_spacing,
        ];
        if lengths.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(CardMakerError::InvalidConfig(
                "card geometry must be finite and non-negative".into(),
            ));
        }
        if g.card_width <= 0.0 || g.card_height <= 0.0 {
            return Err(CardMakerError::InvalidConfig(
                "card width and height must be positive".into(),
            ));
        }
        if g.card_width + 2.0 * g.horizontal_margin > g.page_width
            || g.card_height + 2.0 * g.vertical_margin > g.page_height
        {
            return Err(CardMakerError::InvalidConfig(format!(
                "a {}×{} in card does not fit inside the page margins",
                g.card_width, g.card_height
            )));
        }
        if self.text.font_size <= 0.0 {
            return Err(CardMakerError::InvalidConfig(
                "font size must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Physical sheet and card dimensions, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub card_width: f32,
    pub card_height: f32,
    /// Top and bottom margin.
    pub vertical_margin: f32,
    /// Left and right margin.
    pub horizontal_margin: f32,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
}

impl Default for CardGeometry {
    /// US letter, poker-size cards.
    fn default() -> Self {
        Self {
            page_width: 8.5,
            page_height: 11.0,
            card_width: 2.5,
            card_height: 3.5,
            vertical_margin: 0.5,
            horizontal_margin: 0.3,
            horizontal_spacing: 0.1,
            vertical_spacing: 0.1,
        }
    }
}

/// Text card typography. Sizes are in points, paddings in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_size: f32,
    /// Extra leading added to the font size for each line step.
    pub line_gap: f32,
    /// Left inset of the text from the card edge.
    pub padding_left: f32,
    /// Inset from the card top to the nominal first line.
    pub padding_top: f32,
    /// Inset from the card bottom used by [`OverflowPolicy::Truncate`].
    pub padding_bottom: f32,
    /// Points the whole block is raised above the nominal first line.
    pub baseline_raise: f32,
    /// Distance from a header baseline down to its underline, in points.
    pub underline_offset: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 5.75,
            line_gap: 2.5,
            padding_left: 0.1,
            padding_top: 0.2,
            padding_bottom: 0.2,
            baseline_raise: 5.0,
            underline_offset: 2.0,
        }
    }
}

/// Stroke used for card borders and header underlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    /// Line width in points.
    pub width: f32,
    /// Grey level, 0 = black, 255 = white.
    pub grey: u8,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 0.5,
            grey: 128,
        }
    }
}

/// What to do when a text block is taller than its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep drawing past the card edge and flag the block.
    #[default]
    Overflow,
    /// Stop once the next line would pass the bottom padding.
    Truncate,
}

// ── Page selection ───────────────────────────────────────────────────────

/// Specifies which pages of the PDF become cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSelection {
    /// Every page in the document.
    All,
    /// A single page (1-indexed).
    Single(usize),
    /// A contiguous range of pages (1-indexed, inclusive).
    Range(usize, usize),
    /// Specific pages (1-indexed, deduplicated).
    Set(Vec<usize>),
}

impl Default for PageSelection {
    /// The scenario pages of the tournament pack.
    fn default() -> Self {
        PageSelection::Range(7, 18)
    }
}

impl PageSelection {
    /// Expand the selection into a sorted, deduplicated list of 0-indexed
    /// page numbers, silently dropping pages outside the document.
    pub fn to_indices(&self, total_pages: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = match self {
            PageSelection::All => (0..total_pages).collect(),
            PageSelection::Single(p) => {
                if *p >= 1 && *p <= total_pages {
                    vec![p - 1]
                } else {
                    vec![]
                }
            }
            PageSelection::Range(start, end) => {
                let s = (*start).max(1) - 1;
                let e = (*end).min(total_pages);
                (s..e).collect()
            }
            PageSelection::Set(pages) => pages
                .iter()
                .filter(|&&p| p >= 1 && p <= total_pages)
                .map(|p| p - 1)
                .collect(),
        };
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Like [`to_indices`](Self::to_indices), but any requested page past
    /// the end of the document (or page 0) is an error.
    pub fn resolve(&self, total_pages: usize) -> Result<Vec<usize>, CardMakerError> {
        let out_of_range = |p: usize| p == 0 || p > total_pages;
        let bad = match self {
            PageSelection::All => None,
            PageSelection::Single(p) => Some(*p).filter(|&p| out_of_range(p)),
            PageSelection::Range(start, end) => [*start, *end]
                .into_iter()
                .find(|&p| out_of_range(p)),
            PageSelection::Set(pages) => pages.iter().copied().find(|&p| out_of_range(p)),
        };
        if let Some(page) = bad {
            return Err(CardMakerError::PageOutOfRange {
                page,
                total: total_pages,
            });
        }

        let indices = self.to_indices(total_pages);
        if indices.is_empty() {
            return Err(CardMakerError::NoPagesSelected { total: total_pages });
        }
        Ok(indices)
    }
}

/// Highest page number pdfium can address (its page index is a `u16`).
pub const MAX_PAGE_NUMBER: usize = u16::MAX as usize + 1;

impl FromStr for PageSelection {
    type Err = CardMakerError;

    /// Parses `all`, `5`, `7-18` or `1,3,5`. Page numbers are 1-indexed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = |why: String| CardMakerError::InvalidConfig(format!("pages '{s}': {why}"));
        let number = |p: &str| -> Result<usize, CardMakerError> {
            let n: usize = p
                .trim()
                .parse()
                .map_err(|_| invalid(format!("'{}' is not a page number", p.trim())))?;
            match n {
                0 => Err(invalid("pages are 1-indexed".into())),
                n if n > MAX_PAGE_NUMBER => {
                    Err(invalid(format!("page {n} is past the {MAX_PAGE_NUMBER}-page limit")))
                }
                n => Ok(n),
            }
        };

        if s.eq_ignore_ascii_case("all") {
            Ok(PageSelection::All)
        } else if let Some((start, end)) = s.split_once('-') {
            let (start, end) = (number(start)?, number(end)?);
            if start > end {
                return Err(invalid("range start is after its end".into()));
            }
            Ok(PageSelection::Range(start, end))
        } else if s.contains(',') {
            s.split(',')
                .map(number)
                .collect::<Result<Vec<_>, _>>()
                .map(PageSelection::Set)
        } else {
            number(s).map(PageSelection::Single)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CardConfig::builder().build().expect("defaults validate");
        assert_eq!(config.pages, PageSelection::Range(7, 18));
        assert_eq!(config.headers.len(), 4);
        assert_eq!(config.extraction.rotation, SnapshotRotation::Clockwise90);
    }

    #[test]
    fn default_export_uses_snapshot_preset() {
        let config = CardConfig::default();
        assert_eq!(config.export_extraction, ExtractionSettings::snapshot_export());
        assert_eq!(config.export_extraction.zoom, 2.0);
        assert_eq!(config.export_extraction.rotation, SnapshotRotation::None);
        assert_eq!(
            config.export_extraction.image_region,
            CropRegion::new(0.12, 0.06, 0.88, 0.52)
        );

        // a config file that only tweaks the card extraction keeps the export preset
        let config = CardConfig::from_json(r#"{"extraction": {"zoom": 3.0}}"#).unwrap();
        assert_eq!(config.export_extraction, ExtractionSettings::snapshot_export());
    }

    #[test]
    fn rejects_invalid_export_extraction() {
        let settings = ExtractionSettings {
            zoom: 0.0,
            ..ExtractionSettings::snapshot_export()
        };
        let err = CardConfig::builder()
            .export_extraction(settings)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("export_extraction.zoom"), "got: {err}");
    }

    #[test]
    fn rejects_inverted_crop_region() {
        let err = CardConfig::builder()
            .image_region(CropRegion::new(0.8, 0.1, 0.2, 0.5))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("image_region"), "got: {err}");
    }

    #[test]
    fn rejects_fraction_outside_unit_interval() {
        let err = CardConfig::builder()
            .text_region(CropRegion::new(0.0, 0.5, 1.2, 1.0))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("text_region"), "got: {err}");
    }

    #[test]
    fn rejects_zoom_out_of_bounds() {
        assert!(CardConfig::builder().zoom(0.0).build().is_err());
        assert!(CardConfig::builder().zoom(11.0).build().is_err());
        assert!(CardConfig::builder().zoom(2.0).build().is_ok());
    }

    #[test]
    fn rejects_card_larger_than_page() {
        let geometry = CardGeometry {
            card_width: 8.0,
            ..CardGeometry::default()
        };
        let err = CardConfig::builder().geometry(geometry).build().unwrap_err();
        assert!(err.to_string().contains("does not fit"), "got: {err}");
    }

    #[test]
    fn rejects_blank_header() {
        assert!(CardConfig::builder().headers(["Victory Points", "  "]).build().is_err());
    }

    #[test]
    fn json_round_trip_keeps_overrides() {
        let json = r#"{
            "pages": {"Range": [1, 4]},
            "extraction": {"zoom": 3.0},
            "layout": {"overflow": "truncate", "text": {"font_size": 6.0}}
        }"#;
        let config = CardConfig::from_json(json).expect("valid json config");
        assert_eq!(config.pages, PageSelection::Range(1, 4));
        assert_eq!(config.extraction.zoom, 3.0);
        // untouched nested fields keep their defaults
        assert_eq!(config.extraction.rotation, SnapshotRotation::Clockwise90);
        assert_eq!(config.layout.overflow, OverflowPolicy::Truncate);
        assert_eq!(config.layout.text.font_size, 6.0);
        assert_eq!(config.layout.text.line_gap, 2.5);
        assert_eq!(config.layout.geometry, CardGeometry::default());
    }

    #[test]
    fn json_with_invalid_values_is_rejected() {
        let json = r#"{"extraction": {"zoom": 50.0}}"#;
        assert!(CardConfig::from_json(json).is_err());
        assert!(CardConfig::from_json("not json").is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let config = CardConfig::builder().password("hunter2").build().unwrap();
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn page_selection_to_indices() {
        assert_eq!(PageSelection::All.to_indices(5), vec![0, 1, 2, 3, 4]);
        assert_eq!(PageSelection::Single(3).to_indices(5), vec![2]);
        assert_eq!(PageSelection::Single(6).to_indices(5), Vec::<usize>::new());
        assert_eq!(PageSelection::Range(2, 4).to_indices(5), vec![1, 2, 3]);
        assert_eq!(
            PageSelection::Set(vec![3, 1, 3]).to_indices(5),
            vec![0, 2] // deduplicated and sorted
        );
    }

    #[test]
    fn default_selection_resolves_to_twelve_pages() {
        let indices = PageSelection::default().resolve(24).unwrap();
        assert_eq!(indices.len(), 12);
        assert_eq!(indices.first(), Some(&6));
        assert_eq!(indices.last(), Some(&17));
    }

    #[test]
    fn resolve_rejects_pages_past_the_end() {
        match PageSelection::Range(7, 18).resolve(10) {
            Err(CardMakerError::PageOutOfRange { page, total }) => {
                assert_eq!((page, total), (18, 10));
            }
            other => panic!("expected PageOutOfRange, got {other:?}"),
        }
        assert!(PageSelection::Single(0).resolve(10).is_err());
        assert!(PageSelection::Set(vec![2, 11]).resolve(10).is_err());
    }

    #[test]
    fn resolve_rejects_empty_selection() {
        assert!(matches!(
            PageSelection::All.resolve(0),
            Err(CardMakerError::NoPagesSelected { total: 0 })
        ));
        assert!(matches!(
            PageSelection::Range(5, 3).resolve(10),
            Err(CardMakerError::NoPagesSelected { .. })
        ));
    }

    #[test]
    fn page_selection_parses_cli_forms() {
        assert_eq!("all".parse::<PageSelection>().unwrap(), PageSelection::All);
        assert_eq!("ALL".parse::<PageSelection>().unwrap(), PageSelection::All);
        assert_eq!(" 7-18 ".parse::<PageSelection>().unwrap(), PageSelection::Range(7, 18));
        assert_eq!("1, 3,5".parse::<PageSelection>().unwrap(), PageSelection::Set(vec![1, 3, 5]));
        assert_eq!("9".parse::<PageSelection>().unwrap(), PageSelection::Single(9));
    }

    #[test]
    fn page_selection_parse_rejects_bad_input() {
        for bad in ["0", "18-7", "1,x", "0,2", "", "-3", "seven", "70000", "1-65537"] {
            assert!(
                matches!(bad.parse::<PageSelection>(), Err(CardMakerError::InvalidConfig(_))),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            "65536".parse::<PageSelection>().unwrap(),
            PageSelection::Single(MAX_PAGE_NUMBER)
        );
    }
}
