//! Text card typesetting: one line per source line, no wrapping.

use super::Rect;
use crate::config::{OverflowPolicy, TextStyle, POINTS_PER_INCH};
use crate::metrics::Typeface;
use serde::{Deserialize, Serialize};

/// A typeset text card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
    /// True when some line falls below the card's bottom padding. Under
    /// [`OverflowPolicy::Truncate`] those lines were dropped instead.
    pub overflows: bool,
}

/// One drawn line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub face: Typeface,
    pub font_size: f32,
    /// Left end of the baseline, in points.
    pub x: f32,
    pub baseline: f32,
    pub underline: Option<Underline>,
}

/// Horizontal stroke under a header line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Underline {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
}

impl Underline {
    pub fn length(&self) -> f32 {
        self.x2 - self.x1
    }
}

/// If `line` is a whole-line `**header**`, return the header text.
///
/// The opening and closing markers must not overlap: a bare `**` is plain
/// text, while `****` is an empty header.
pub fn header_text(line: &str) -> Option<&str> {
    line.trim_end()
        .strip_prefix("**")
        .and_then(|rest| rest.strip_suffix("**"))
}

/// Typeset `text` inside `frame`.
///
/// The first baseline sits `padding_top` below the frame top, raised by
/// `baseline_raise`; each further line steps down by `font_size + line_gap`.
pub fn typeset(text: &str, frame: &Rect, style: &TextStyle, overflow: OverflowPolicy) -> TextBlock {
    let x = frame.x + style.padding_left * POINTS_PER_INCH;
    let floor = frame.y + style.padding_bottom * POINTS_PER_INCH;
    let step = style.font_size + style.line_gap;
    let mut cursor_y = frame.top() - style.padding_top * POINTS_PER_INCH;

    let mut lines = Vec::new();
    let mut overflows = false;

    for (i, raw) in text.lines().enumerate() {
        if i > 0 && cursor_y < floor {
            overflows = true;
            if overflow == OverflowPolicy::Truncate {
                break;
            }
        }

        let baseline = cursor_y + style.baseline_raise;
        let line = match header_text(raw) {
            Some(header) => {
                let width = Typeface::HelveticaBold.string_width(header, style.font_size);
                let y = baseline - style.underline_offset;
                TextLine {
                    text: header.to_string(),
                    face: Typeface::HelveticaBold,
                    font_size: style.font_size,
                    x,
                    baseline,
                    underline: Some(Underline { x1: x, x2: x + width, y }),
                }
            }
            None => TextLine {
                text: raw.trim().to_string(),
                face: Typeface::Helvetica,
                font_size: style.font_size,
                x,
                baseline,
                underline: None,
            },
        };
        lines.push(line);
        cursor_y -= step;
    }

    TextBlock { lines, overflows }
}
