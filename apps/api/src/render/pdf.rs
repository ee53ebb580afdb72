//! Document Renderer — flows assembled elements onto A4 pages and serializes
//! to PDF bytes via printpdf.
//!
//! The renderer preserves element order and style exactly as produced by the
//! assembler. Pagination is automatic: a block that does not fit the remaining
//! vertical space starts a new page. An image that cannot be loaded is logged
//! and skipped; it never fails the document.

use std::path::Path;

use printpdf::{
    image_crate, BuiltinFont, Color as PdfColor, Image, ImageTransform, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Pt, Rgb,
};
use thiserror::Error;
use tracing::warn;

use crate::render::assembler::{Align, DocumentElement, FontFace, TextStyle};
use crate::render::metrics::get_metrics;

/// A4 page geometry in points, with a fixed 50pt margin on all four sides.
pub const PAGE_WIDTH_PT: f32 = 595.27;
pub const PAGE_HEIGHT_PT: f32 = 841.89;
pub const MARGIN_PT: f32 = 50.0;
pub const CONTENT_WIDTH_PT: f32 = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;

/// Resolution used when embedding images.
const IMAGE_DPI: f32 = 300.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF backend error: {0}")]
    Pdf(String),
}

fn pt(v: f32) -> Mm {
    Mm::from(Pt(v))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Vertical flow state for the page currently being filled.
/// `cursor_pt` is the distance consumed from the top of the page.
struct Flow {
    layer: PdfLayerReference,
    cursor_pt: f32,
    at_page_top: bool,
}

/// Renders the element list to PDF bytes.
pub fn render_pdf(elements: &[DocumentElement]) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new("Resume", Mm(210.0), Mm(297.0), "content");
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
    };

    let mut flow = Flow {
        layer: doc.get_page(page).get_layer(layer),
        cursor_pt: MARGIN_PT,
        at_page_top: true,
    };

    for element in elements {
        match element {
            DocumentElement::Image {
                path,
                width_pt,
                height_pt,
            } => draw_image(&doc, &mut flow, path, *width_pt, *height_pt),
            DocumentElement::Spacer { height_pt } => {
                ensure_space(&doc, &mut flow, *height_pt);
                if !flow.at_page_top {
                    flow.cursor_pt += height_pt;
                }
            }
            DocumentElement::Title { text }
            | DocumentElement::SectionHeader { text }
            | DocumentElement::Bullet { text }
            | DocumentElement::Paragraph { text } => {
                // style() is Some for every text element kind
                if let Some(style) = element.style() {
                    draw_text(&doc, &mut flow, &fonts, text, style);
                }
            }
        }
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

/// Starts a new page if `height_pt` does not fit the remaining vertical space.
/// A fresh page always accepts the next block, however tall.
fn ensure_space(doc: &PdfDocumentReference, flow: &mut Flow, height_pt: f32) {
    if flow.at_page_top {
        return;
    }
    if flow.cursor_pt + height_pt > PAGE_HEIGHT_PT - MARGIN_PT {
        let (page, layer) = doc.add_page(Mm(210.0), Mm(297.0), "content");
        flow.layer = doc.get_page(page).get_layer(layer);
        flow.cursor_pt = MARGIN_PT;
        flow.at_page_top = true;
    }
}

fn draw_text(
    doc: &PdfDocumentReference,
    flow: &mut Flow,
    fonts: &Fonts,
    text: &str,
    style: &TextStyle,
) {
    let metrics = get_metrics(style.face);
    let lines = metrics.wrap(text, style.size_pt, CONTENT_WIDTH_PT);
    if lines.is_empty() {
        return;
    }

    if !flow.at_page_top {
        flow.cursor_pt += style.space_before_pt;
    }

    // Keep the whole block together when it fits a page; oversized blocks
    // break per line below.
    ensure_space(doc, flow, lines.len() as f32 * style.leading_pt);

    let font = match style.face {
        FontFace::Helvetica => &fonts.regular,
        FontFace::HelveticaBold => &fonts.bold,
    };

    for line in lines {
        ensure_space(doc, flow, style.leading_pt);

        let x_pt = match style.align {
            Align::Left => MARGIN_PT,
            Align::Center => {
                let line_width = metrics.measure_str(&line, style.size_pt);
                MARGIN_PT + ((CONTENT_WIDTH_PT - line_width).max(0.0) / 2.0)
            }
        };
        let baseline_pt = PAGE_HEIGHT_PT - flow.cursor_pt - style.size_pt;

        flow.layer.set_fill_color(PdfColor::Rgb(Rgb::new(
            style.color.r,
            style.color.g,
            style.color.b,
            None,
        )));
        flow.layer
            .use_text(line, style.size_pt, pt(x_pt), pt(baseline_pt), font);

        flow.cursor_pt += style.leading_pt;
        flow.at_page_top = false;
    }

    flow.cursor_pt += style.space_after_pt;
}

/// Embeds the profile image right-aligned at the current cursor position.
/// Any load failure skips the image and leaves the rest of the document intact.
fn draw_image(
    doc: &PdfDocumentReference,
    flow: &mut Flow,
    path: &Path,
    width_pt: f32,
    height_pt: f32,
) {
    let dynamic_image = match image_crate::open(path) {
        Ok(img) => img,
        Err(e) => {
            warn!("Skipping profile image {}: {e}", path.display());
            return;
        }
    };

    let pdf_image = Image::from_dynamic_image(&dynamic_image);
    let px_w = pdf_image.image.width.0 as f32;
    let px_h = pdf_image.image.height.0 as f32;
    if px_w == 0.0 || px_h == 0.0 {
        warn!("Skipping profile image {}: zero-sized", path.display());
        return;
    }

    ensure_space(doc, flow, height_pt);

    // Scale from the natural print size at IMAGE_DPI to the requested box.
    let natural_w_pt = px_w / IMAGE_DPI * 72.0;
    let natural_h_pt = px_h / IMAGE_DPI * 72.0;
    let transform = ImageTransform {
        translate_x: Some(pt(PAGE_WIDTH_PT - MARGIN_PT - width_pt)),
        translate_y: Some(pt(PAGE_HEIGHT_PT - flow.cursor_pt - height_pt)),
        scale_x: Some(width_pt / natural_w_pt),
        scale_y: Some(height_pt / natural_h_pt),
        dpi: Some(IMAGE_DPI),
        ..Default::default()
    };
    pdf_image.add_to_layer(flow.layer.clone(), transform);

    flow.cursor_pt += height_pt;
    flow.at_page_top = false;
}
