use thiserror::Error;

/// Fatal errors. Unrenderable images and out-of-range figure indices are
/// recovered inside the layout pass and never show up here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write DOCX package: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid paper JSON: {0}")]
    Json(#[from] serde_json::Error),
}
