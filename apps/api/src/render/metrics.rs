//! Static font-metric tables for the two PDF base fonts the renderer uses.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Adobe AFM tables for Helvetica and Helvetica-Bold divided by 1000. Base-14
//! fonts ship no metrics inside the PDF, so the renderer word-wraps against
//! these tables. Non-ASCII characters (the bullet glyph included) fall back to
//! an average width; the resulting ±1–2% error is invisible at resume line
//! lengths. All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.
#![allow(dead_code)]

use crate::render::assembler::FontFace;

/// Static character-width table for one base font.
///
/// All widths are in em units at 1em (i.e., at the configured font size).
/// `widths[i]` = width of ASCII character `(i + 32)`.
pub struct FontMetricTable {
    pub face: FontFace,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in points at the given font size.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let em: f32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum();
        em * size_pt
    }

    /// Greedy word-wrap: breaks `s` into lines no wider than `max_width_pt`.
    ///
    /// A single word wider than the line is placed on its own line rather than
    /// split — base fonts have no hyphenation support and resume content never
    /// legitimately produces such words.
    pub fn wrap(&self, s: &str, size_pt: f32, max_width_pt: f32) -> Vec<String> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let space_w = self.space_width * size_pt;
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_w = self.measure_str(word, size_pt);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width_pt {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Helvetica — AFM widths / 1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Helvetica-Bold — AFM widths / 1000.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.536,
    space_width: 0.278,
};

/// Returns the static metric table for a given font face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert_eq!(metrics.measure_str("", 10.0), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFace::Helvetica);
        // "Rust" at 1pt = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust", 1.0);
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_scales_with_font_size() {
        let metrics = get_metrics(FontFace::Helvetica);
        let at_one = metrics.measure_str("resume", 1.0);
        let at_ten = metrics.measure_str("resume", 10.0);
        assert!((at_ten - at_one * 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_glyph_falls_back_to_average() {
        let metrics = get_metrics(FontFace::Helvetica);
        let width = metrics.measure_str("\u{2022}", 1.0);
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "Professional Summary";
        let regular = get_metrics(FontFace::Helvetica).measure_str(text, 14.0);
        let bold = get_metrics(FontFace::HelveticaBold).measure_str(text, 14.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_wrap_empty_string_yields_no_lines() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert!(metrics.wrap("", 10.0, 495.0).is_empty());
    }

    #[test]
    fn test_wrap_short_line_stays_single() {
        let metrics = get_metrics(FontFace::Helvetica);
        let lines = metrics.wrap("Loves mathematics.", 10.0, 495.0);
        assert_eq!(lines, vec!["Loves mathematics.".to_string()]);
    }

    #[test]
    fn test_wrap_long_text_breaks_and_preserves_words() {
        let metrics = get_metrics(FontFace::Helvetica);
        let text = "word ".repeat(60);
        let lines = metrics.wrap(&text, 10.0, 200.0);
        assert!(lines.len() > 1, "60 words at 200pt must wrap");
        let rejoined = lines.join(" ");
        assert_eq!(rejoined.split_whitespace().count(), 60);
        for line in &lines {
            assert!(metrics.measure_str(line, 10.0) <= 200.0 + 1e-3);
        }
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let metrics = get_metrics(FontFace::Helvetica);
        let text = "tiny Supercalifragilisticexpialidocious tiny";
        let lines = metrics.wrap(text, 10.0, 60.0);
        assert!(lines.iter().any(|l| l == "Supercalifragilisticexpialidocious"));
    }
}
