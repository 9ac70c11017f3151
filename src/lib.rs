mod docx;
mod error;
mod layout;
mod media;
pub mod model;
pub mod paper;

pub use error::Error;
pub use layout::build_document;
pub use paper::{Figure, Section, StructuredPaper};

use std::path::Path;
use std::time::Instant;

pub const DOCX_EXTENSION: &str = "docx";
pub const DEFAULT_FILE_STEM: &str = "ieee_paper";

const MAX_FILE_STEM_CHARS: usize = 50;

/// Lays out `paper` as a two-column conference document and returns the
/// DOCX bytes. `images` are addressed by `Figure::index`.
///
/// Each call builds into its own context; concurrent calls share nothing.
/// Bad image data degrades to a placeholder, so the only failure is
/// serialization itself.
pub fn generate<I: AsRef<[u8]>>(paper: &StructuredPaper, images: &[I]) -> Result<Vec<u8>, Error> {
    let t0 = Instant::now();

    let doc = layout::build_document(paper, images);
    let t_layout = t0.elapsed();

    let bytes = docx::write(&doc)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: layout={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes, {} media)",
        t_layout.as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
        doc.media.len(),
    );

    Ok(bytes)
}

pub fn generate_to_file<I: AsRef<[u8]>>(
    paper: &StructuredPaper,
    images: &[I],
    output: &Path,
) -> Result<(), Error> {
    let bytes = generate(paper, images)?;
    std::fs::write(output, &bytes).map_err(|e| {
        Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", e, output.display())))
    })?;
    Ok(())
}

/// Download name for a paper: the first 50 characters of the title, reduced
/// to alphanumerics, spaces, hyphens and underscores.
pub fn suggested_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .take(MAX_FILE_STEM_CHARS)
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let stem = stem.trim();
    let stem = if stem.is_empty() { DEFAULT_FILE_STEM } else { stem };
    format!("{stem}.{DOCX_EXTENSION}")
}
