// Free-text-to-document rendering pipeline.
// Data flows one way: raw prose → normalized prose → classified lines →
// document elements → PDF bytes. No stage reads back from a later one.
// CPU-bound; callers run `render_resume` inside tokio::task::spawn_blocking.

pub mod assembler;
pub mod classifier;
pub mod metrics;
pub mod normalizer;
pub mod pdf;

use std::path::Path;

pub use pdf::RenderError;

/// Runs the full pipeline: Normalizer → Classifier → Assembler → Renderer.
///
/// `name` becomes the document title ("{name}'s Resume"); `image_path` is the
/// optional staged profile image.
pub fn render_resume(
    raw_prose: &str,
    name: &str,
    image_path: Option<&Path>,
) -> Result<Vec<u8>, RenderError> {
    let normalized = normalizer::normalize(raw_prose);
    let lines = classifier::classify(&normalized);
    let title = format!("{name}'s Resume");
    let elements = assembler::assemble(&lines, &title, image_path);
    pdf::render_pdf(&elements)
}
