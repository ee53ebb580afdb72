//! Line Classifier — tags each line of normalized prose as a section header,
//! bullet item, or plain paragraph.
//!
//! Purely line-local: no multi-line state, no lookahead. Single-line regex
//! classification is inherently ambiguous for malformed markdown (unbalanced
//! asterisks and the like); any line that does not cleanly match the header or
//! bullet pattern falls back to `Paragraph`. That fallback is the documented
//! behavior, not a bug.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bullet glyph prepended to bullet lines.
pub const BULLET_GLYPH: char = '\u{2022}';

/// A line wrapped entirely in a pair of double-asterisk markers.
static HEADER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*.+\*\*$").unwrap());

/// The kind assigned to a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    SectionHeader,
    Bullet,
    Paragraph,
}

/// One non-empty input line with its kind and extracted display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub text: String,
}

impl ClassifiedLine {
    fn new(kind: LineKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Classifies a single line. Returns `None` for empty / whitespace-only lines,
/// which contribute no document element.
pub fn classify_line(line: &str) -> Option<ClassifiedLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if HEADER_LINE.is_match(line) {
        let text = line.replace('*', "");
        return Some(ClassifiedLine::new(LineKind::SectionHeader, text));
    }

    if line.starts_with('*') {
        let text = format!("{BULLET_GLYPH} {}", line.replace('*', "").trim());
        return Some(ClassifiedLine::new(LineKind::Bullet, text));
    }

    Some(ClassifiedLine::new(LineKind::Paragraph, line.to_string()))
}

/// Classifies every line of normalized prose, preserving input order.
pub fn classify(text: &str) -> Vec<ClassifiedLine> {
    text.lines().filter_map(classify_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_lines_dropped() {
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("   \t  "), None);
    }

    #[test]
    fn test_double_asterisk_line_is_section_header() {
        let got = classify_line("**Professional Summary**").unwrap();
        assert_eq!(got.kind, LineKind::SectionHeader);
        assert_eq!(got.text, "Professional Summary");
    }

    #[test]
    fn test_header_strips_all_asterisks() {
        let got = classify_line("**Skills **and** Tools**").unwrap();
        assert_eq!(got.kind, LineKind::SectionHeader);
        assert_eq!(got.text, "Skills and Tools");
    }

    #[test]
    fn test_star_space_line_is_bullet() {
        let got = classify_line("* Wrote the first algorithm").unwrap();
        assert_eq!(got.kind, LineKind::Bullet);
        assert_eq!(got.text, "\u{2022} Wrote the first algorithm");
    }

    #[test]
    fn test_bare_star_line_is_bullet() {
        let got = classify_line("*Led a team of four").unwrap();
        assert_eq!(got.kind, LineKind::Bullet);
        assert_eq!(got.text, "\u{2022} Led a team of four");
    }

    #[test]
    fn test_plain_line_is_paragraph_trimmed() {
        let got = classify_line("  Loves mathematics.  ").unwrap();
        assert_eq!(got.kind, LineKind::Paragraph);
        assert_eq!(got.text, "Loves mathematics.");
    }

    #[test]
    fn test_unbalanced_markup_falls_back_to_paragraph() {
        // Mid-line bold markers do not make a header; the line stays a paragraph.
        let got = classify_line("Skills: **Rust** and Go").unwrap();
        assert_eq!(got.kind, LineKind::Paragraph);
        assert_eq!(got.text, "Skills: **Rust** and Go");
    }

    #[test]
    fn test_classify_preserves_order_and_drops_blanks() {
        let text = "**Summary**\n\n* Wrote the first algorithm\nLoves mathematics.\n   \n";
        let lines = classify(text);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].kind, LineKind::SectionHeader);
        assert_eq!(lines[1].kind, LineKind::Bullet);
        assert_eq!(lines[2].kind, LineKind::Paragraph);
    }

    #[test]
    fn test_paragraph_classification_is_idempotent() {
        let first = classify_line("A plain paragraph line.").unwrap();
        let second = classify_line(&first.text).unwrap();
        assert_eq!(first, second);
    }
}
