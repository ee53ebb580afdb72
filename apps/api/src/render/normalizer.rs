//! Text Normalizer — strips known generation-API boilerplate from raw prose.
//!
//! The upstream model tends to wrap its output in conversational framing: an
//! introductory disclaimer before the resume body and a "considerations" section
//! after it. Normalization removes both so the classifier only ever sees resume
//! content. All steps are best-effort: a step that finds nothing to strip is a
//! no-op, and normalization never fails for any input string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Introductory disclaimer the generation API prepends to most responses.
/// Removed verbatim wherever it occurs.
pub const INTRO_BOILERPLATE: &str =
    "Okay, here's a professional resume based on the information you provided:";

/// Trailing disclaimer the generation API appends when it editorializes.
/// Removed verbatim wherever it occurs.
pub const CONSIDERATIONS_BOILERPLATE: &str = "Important Considerations for a *Real* Resume:";

/// Case-insensitive marker that opens the model's trailing commentary section.
/// Everything at and after the first occurrence is dropped.
static COMMENTARY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)key improvements and considerations").unwrap());

/// Best-effort truncation: keep content through the "Extracurricular Activities"
/// section, cutting anything after it that starts a new capitalized line.
///
/// This assumes a section ordering the upstream API does not guarantee — it is a
/// heuristic, not a contract. No match means the full text is retained.
static EXTRACURRICULAR_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(.*?Extracurricular Activities.*?)($|\n[A-Z].*)").unwrap());

/// Normalizes raw generated prose for classification.
///
/// Steps, in order: (a) remove every verbatim occurrence of each boilerplate
/// phrase, (b) truncate at the first case-insensitive commentary marker,
/// (c) apply the extracurricular tail heuristic. Returns the empty string for
/// empty input.
pub fn normalize(raw: &str) -> String {
    let stripped = raw
        .replace(INTRO_BOILERPLATE, "")
        .replace(CONSIDERATIONS_BOILERPLATE, "");

    let before_marker = match COMMENTARY_MARKER.find(&stripped) {
        Some(m) => &stripped[..m.start()],
        None => stripped.as_str(),
    };
    let mut text = before_marker.trim().to_string();

    if let Some(caps) = EXTRACURRICULAR_TAIL.captures(&text) {
        if let Some(body) = caps.get(1) {
            text = body.as_str().trim().to_string();
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_clean_prose_is_identity_up_to_trimming() {
        let prose = "**Summary**\n* Shipped things\nEnjoys shipping.";
        assert_eq!(normalize(prose), prose);

        let padded = format!("\n  {prose}  \n");
        assert_eq!(normalize(&padded), prose);
    }

    #[test]
    fn test_intro_boilerplate_removed() {
        let raw = format!("{INTRO_BOILERPLATE}\n**Summary**\nA paragraph.");
        let out = normalize(&raw);
        assert!(!out.contains(INTRO_BOILERPLATE));
        assert!(out.starts_with("**Summary**"));
    }

    #[test]
    fn test_considerations_boilerplate_removed_everywhere() {
        let raw = format!(
            "{CONSIDERATIONS_BOILERPLATE}\nBody text\n{CONSIDERATIONS_BOILERPLATE}"
        );
        let out = normalize(&raw);
        assert!(!out.contains(CONSIDERATIONS_BOILERPLATE));
        assert!(out.contains("Body text"));
    }

    #[test]
    fn test_commentary_marker_truncates_case_insensitively() {
        for marker in [
            "Key Improvements and Considerations",
            "KEY IMPROVEMENTS AND CONSIDERATIONS",
            "key improvements and considerations",
        ] {
            let raw = format!("Resume body here.\n\n{marker}:\n- tighten wording");
            let out = normalize(&raw);
            assert_eq!(out, "Resume body here.", "marker variant: {marker}");
        }
    }

    #[test]
    fn test_no_marker_retains_full_text() {
        let raw = "Just a resume.\nNothing else.";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn test_extracurricular_tail_truncated() {
        let raw = "**Experience**\n* Built APIs\n**Extracurricular Activities**\n* Chess club\nNote from the model about formatting.";
        let out = normalize(raw);
        assert!(out.contains("Extracurricular Activities"));
        assert!(!out.contains("Note from the model"));
    }

    #[test]
    fn test_extracurricular_at_end_of_text_kept_whole() {
        let raw = "**Extracurricular Activities**\n* debate team";
        let out = normalize(raw);
        assert!(out.contains("debate team"));
    }
}
