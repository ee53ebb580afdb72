//! Document Assembler — converts classified lines into an ordered list of typed
//! document elements with a fixed visual style per element kind.
//!
//! The assembler performs no validation of text content: markup in the text is
//! treated as literal, and safe text handling is the renderer's concern.

use std::path::{Path, PathBuf};

use crate::render::classifier::{ClassifiedLine, LineKind};

/// Fill color, 0.0–1.0 per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
/// Section header color (dark blue).
pub const DARK_BLUE: Color = Color { r: 0.0, g: 0.0, b: 0.545 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

/// Visual style applied to a text element. Fixed per element kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size_pt: f32,
    /// Baseline-to-baseline distance for wrapped lines.
    pub leading_pt: f32,
    pub space_before_pt: f32,
    pub space_after_pt: f32,
    pub color: Color,
    pub align: Align,
}

/// Document title: large, bold, centered.
pub const TITLE_STYLE: TextStyle = TextStyle {
    face: FontFace::HelveticaBold,
    size_pt: 18.0,
    leading_pt: 22.0,
    space_before_pt: 0.0,
    space_after_pt: 6.0,
    color: BLACK,
    align: Align::Center,
};

/// Section header: bold, dark blue, extra spacing before and after.
pub const SECTION_HEADER_STYLE: TextStyle = TextStyle {
    face: FontFace::HelveticaBold,
    size_pt: 14.0,
    leading_pt: 16.0,
    space_before_pt: 12.0,
    space_after_pt: 10.0,
    color: DARK_BLUE,
    align: Align::Left,
};

/// Body text, shared by bullets and paragraphs.
pub const BODY_STYLE: TextStyle = TextStyle {
    face: FontFace::Helvetica,
    size_pt: 10.0,
    leading_pt: 12.0,
    space_before_pt: 0.0,
    space_after_pt: 4.0,
    color: BLACK,
    align: Align::Left,
};

/// Fixed-size vertical spacer inserted after the image and after the title.
pub const SPACER_PT: f32 = 12.0;

/// Profile image size and alignment (right-aligned square).
pub const IMAGE_SIZE_PT: f32 = 80.0;

/// One paginated-layout unit. Ordering in the element list is significant and
/// is exactly the order lines were classified.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentElement {
    /// Right-aligned profile image. The renderer skips it if loading fails.
    Image { path: PathBuf, width_pt: f32, height_pt: f32 },
    Spacer { height_pt: f32 },
    Title { text: String },
    SectionHeader { text: String },
    Bullet { text: String },
    Paragraph { text: String },
}

impl DocumentElement {
    /// The fixed style for text elements; `None` for images and spacers.
    pub fn style(&self) -> Option<&'static TextStyle> {
        match self {
            DocumentElement::Title { .. } => Some(&TITLE_STYLE),
            DocumentElement::SectionHeader { .. } => Some(&SECTION_HEADER_STYLE),
            DocumentElement::Bullet { .. } | DocumentElement::Paragraph { .. } => {
                Some(&BODY_STYLE)
            }
            DocumentElement::Image { .. } | DocumentElement::Spacer { .. } => None,
        }
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self, DocumentElement::Spacer { .. })
    }
}

/// Assembles the ordered element list for rendering.
///
/// Prepends an `Image` element (plus a spacer) only when an image path is given
/// and the file exists on disk; then the `Title` (plus a spacer); then one
/// element per classified line, kind mapped 1:1.
pub fn assemble(
    lines: &[ClassifiedLine],
    title: &str,
    image_path: Option<&Path>,
) -> Vec<DocumentElement> {
    let mut elements = Vec::with_capacity(lines.len() + 4);

    if let Some(path) = image_path {
        if path.exists() {
            elements.push(DocumentElement::Image {
                path: path.to_path_buf(),
                width_pt: IMAGE_SIZE_PT,
                height_pt: IMAGE_SIZE_PT,
            });
            elements.push(DocumentElement::Spacer { height_pt: SPACER_PT });
        }
    }

    elements.push(DocumentElement::Title {
        text: title.to_string(),
    });
    elements.push(DocumentElement::Spacer { height_pt: SPACER_PT });

    for line in lines {
        let element = match line.kind {
            LineKind::SectionHeader => DocumentElement::SectionHeader {
                text: line.text.clone(),
            },
            LineKind::Bullet => DocumentElement::Bullet {
                text: line.text.clone(),
            },
            LineKind::Paragraph => DocumentElement::Paragraph {
                text: line.text.clone(),
            },
        };
        elements.push(element);
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::classifier::classify;

    fn classified() -> Vec<ClassifiedLine> {
        classify("**Summary**\n* Wrote the first algorithm\nLoves mathematics.")
    }

    fn non_spacer_count(elements: &[DocumentElement]) -> usize {
        elements.iter().filter(|e| !e.is_spacer()).count()
    }

    #[test]
    fn test_element_count_without_image() {
        let elements = assemble(&classified(), "Ada Lovelace's Resume", None);
        // 1 Title + 3 classified lines
        assert_eq!(non_spacer_count(&elements), 4);
    }

    #[test]
    fn test_element_order_matches_line_order() {
        let elements = assemble(&classified(), "Ada Lovelace's Resume", None);
        let kinds: Vec<&DocumentElement> =
            elements.iter().filter(|e| !e.is_spacer()).collect();
        assert!(matches!(kinds[0], DocumentElement::Title { text } if text == "Ada Lovelace's Resume"));
        assert!(matches!(kinds[1], DocumentElement::SectionHeader { text } if text == "Summary"));
        assert!(
            matches!(kinds[2], DocumentElement::Bullet { text } if text == "\u{2022} Wrote the first algorithm")
        );
        assert!(matches!(kinds[3], DocumentElement::Paragraph { text } if text == "Loves mathematics."));
    }

    #[test]
    fn test_missing_image_path_contributes_no_element() {
        let missing = Path::new("/definitely/not/a/real/image.png");
        let elements = assemble(&classified(), "Resume", Some(missing));
        assert!(!elements.iter().any(|e| matches!(e, DocumentElement::Image { .. })));
        assert_eq!(non_spacer_count(&elements), 4);
    }

    #[test]
    fn test_existing_image_is_first_element() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let elements = assemble(&classified(), "Resume", Some(file.path()));
        assert!(matches!(
            &elements[0],
            DocumentElement::Image { width_pt, height_pt, .. }
                if *width_pt == IMAGE_SIZE_PT && *height_pt == IMAGE_SIZE_PT
        ));
        assert!(elements[1].is_spacer());
        // 1 Image + 1 Title + 3 lines
        assert_eq!(non_spacer_count(&elements), 5);
    }

    #[test]
    fn test_styles_fixed_per_kind() {
        let elements = assemble(&classified(), "Resume", None);
        for element in &elements {
            match element {
                DocumentElement::Title { .. } => {
                    assert_eq!(element.style(), Some(&TITLE_STYLE))
                }
                DocumentElement::SectionHeader { .. } => {
                    assert_eq!(element.style(), Some(&SECTION_HEADER_STYLE))
                }
                DocumentElement::Bullet { .. } | DocumentElement::Paragraph { .. } => {
                    assert_eq!(element.style(), Some(&BODY_STYLE))
                }
                _ => assert_eq!(element.style(), None),
            }
        }
    }
}
