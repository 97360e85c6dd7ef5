//! Advance widths for the two PDF base-14 fonts used on text cards.
//!
//! Underlines under header lines must span exactly the drawn string, so the
//! width has to be known before anything is handed to pdfium. The tables are
//! the Adobe AFM widths (1/1000 em) for printable ASCII; any other character
//! is measured as a digit-wide glyph.

use serde::{Deserialize, Serialize};

const FIRST_CHAR: u32 = 32;
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Font face of a rendered text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Typeface {
    Helvetica,
    HelveticaBold,
}

impl Typeface {
    fn widths(self) -> &'static [u16; 95] {
        match self {
            Typeface::Helvetica => &HELVETICA,
            Typeface::HelveticaBold => &HELVETICA_BOLD,
        }
    }

    /// Advance width of one character in 1/1000 em.
    pub fn glyph_width(self, c: char) -> u16 {
        let code = c as u32;
        code.checked_sub(FIRST_CHAR)
            .and_then(|i| self.widths().get(i as usize))
            .copied()
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// Width of `text` set at `font_size` points, in points.
    pub fn string_width(self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.glyph_width(c))).sum();
        units as f32 * font_size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyph_widths() {
        assert_eq!(Typeface::Helvetica.glyph_width(' '), 278);
        assert_eq!(Typeface::Helvetica.glyph_width('A'), 667);
        assert_eq!(Typeface::Helvetica.glyph_width('i'), 222);
        assert_eq!(Typeface::Helvetica.glyph_width('~'), 584);
        assert_eq!(Typeface::HelveticaBold.glyph_width('A'), 722);
        assert_eq!(Typeface::HelveticaBold.glyph_width('i'), 278);
    }

    #[test]
    fn non_ascii_uses_fallback() {
        assert_eq!(Typeface::Helvetica.glyph_width('é'), FALLBACK_WIDTH);
        assert_eq!(Typeface::HelveticaBold.glyph_width('\n'), FALLBACK_WIDTH);
    }

    #[test]
    fn bold_header_is_wider_than_regular() {
        let header = "Victory Points";
        let regular = Typeface::Helvetica.string_width(header, 5.75);
        let bold = Typeface::HelveticaBold.string_width(header, 5.75);
        assert!(bold > regular);
    }

    #[test]
    fn width_scales_with_font_size() {
        // "Game" in Helvetica-Bold: 778 + 556 + 889 + 556 = 2779 units
        let w = Typeface::HelveticaBold.string_width("Game", 10.0);
        assert!((w - 27.79).abs() < 1e-4, "got {w}");
        assert_eq!(Typeface::Helvetica.string_width("", 12.0), 0.0);
    }
}
