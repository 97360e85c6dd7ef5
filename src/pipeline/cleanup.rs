//! Text cleanup: normalise what pdfium extracts, then mark headers.
//!
//! pdfium returns bounded text with `\r\n` line breaks, occasional soft
//! hyphens and zero-width characters, and trailing spaces on most lines.
//! Those break the whole-line `**header**` test the layout engine relies on,
//! so every extracted block goes through [`clean_text`] first.
//!
//! ## Rule Order
//!
//! Line endings are normalised before trimming so a lone `\r` never survives
//! as trailing whitespace; headers are marked last, on clean lines.

use crate::error::CardMakerError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Apply the cleanup rules, in order:
/// 1. Normalise line endings (CRLF / CR → LF)
/// 2. Strip invisible Unicode (zero-width spaces, BOM, soft hyphens, pdfium markers)
/// 3. Trim trailing whitespace per line
pub fn clean_text(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = remove_invisible_chars(&s);
    trim_trailing_whitespace(&s)
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Remove invisible Unicode characters ─────────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input.replace(
        [
            '\u{200B}', '\u{FEFF}', '\u{00AD}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{0002}',
            '\u{FFFE}',
        ],
        "",
    )
}

// ── Rule 3: Trim trailing whitespace per line ────────────────────────────────

static RE_TRAILING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

fn trim_trailing_whitespace(input: &str) -> String {
    RE_TRAILING_WS.replace_all(input, "").into_owned()
}

// ── Header marking ───────────────────────────────────────────────────────────

/// Wraps every occurrence of a known header in `**…**`.
///
/// All headers are matched in one pass, longest first, so a header that
/// contains another is never marked twice.
#[derive(Debug, Clone)]
pub struct HeaderMarker {
    pattern: Option<Regex>,
}

impl HeaderMarker {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Result<Self, CardMakerError> {
        let mut headers: Vec<&str> = headers
            .iter()
            .map(|h| h.as_ref())
            .filter(|h| !h.is_empty())
            .collect();
        if headers.is_empty() {
            return Ok(Self { pattern: None });
        }
        headers.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        headers.dedup();

        let alternation = headers
            .iter()
            .map(|h| regex::escape(h))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation)
            .map_err(|e| CardMakerError::InvalidConfig(format!("header pattern: {e}")))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn mark(&self, text: &str) -> String {
        match &self.pattern {
            Some(re) => re.replace_all(text, "**${0}**").into_owned(),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HEADERS;

    #[test]
    fn test_normalise_line_endings() {
        assert_eq!(normalise_line_endings("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_remove_invisible() {
        assert_eq!(remove_invisible_chars("Vic\u{00AD}tory\u{200B}"), "Victory");
    }

    #[test]
    fn test_trim_trailing_whitespace() {
        assert_eq!(trim_trailing_whitespace("a  \nb\t\n  c"), "a\nb\n  c");
    }

    #[test]
    fn test_clean_text_full_pipeline() {
        let raw = "Game Length \r\nThe game lasts 5 turns.\u{FEFF}\r\n\r\nVictory Points\r\n";
        assert_eq!(
            clean_text(raw),
            "Game Length\nThe game lasts 5 turns.\n\nVictory Points\n"
        );
    }

    #[test]
    fn marks_default_headers_on_their_own_lines() {
        let marker = HeaderMarker::new(&DEFAULT_HEADERS).unwrap();
        let marked = marker.mark("Game Length\nThe game lasts 5 turns.\nVictory Points");
        assert_eq!(
            marked,
            "**Game Length**\nThe game lasts 5 turns.\n**Victory Points**"
        );
    }

    #[test]
    fn marks_headers_mid_line_too() {
        let marker = HeaderMarker::new(&["Victory Points"]).unwrap();
        assert_eq!(
            marker.mark("Score Victory Points at the end."),
            "Score **Victory Points** at the end."
        );
    }

    #[test]
    fn longest_header_wins() {
        let marker = HeaderMarker::new(&["Rules", "Scenario Special Rules"]).unwrap();
        assert_eq!(
            marker.mark("Scenario Special Rules"),
            "**Scenario Special Rules**"
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let marker = HeaderMarker::new(&["Deployment (A+B)"]).unwrap();
        assert_eq!(marker.mark("Deployment (A+B)"), "**Deployment (A+B)**");
        assert_eq!(marker.mark("Deployment AAB"), "Deployment AAB");
    }

    #[test]
    fn no_headers_is_identity() {
        let marker = HeaderMarker::new::<&str>(&[]).unwrap();
        assert_eq!(marker.mark("Game Length"), "Game Length");
    }
}
