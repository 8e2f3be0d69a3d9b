mod docx;
mod pdf;

use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentKind::Pdf),
            Some("docx") => Ok(DocumentKind::Docx),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Best-effort plain-text extraction from an uploaded resume. Returns an
/// empty string when the document has no extractable text layer; the
/// caller treats that the same as a missing document.
pub fn extract_text(path: &Path) -> Result<String> {
    let kind = DocumentKind::from_path(path)?;
    let bytes = std::fs::read(path)?;

    tracing::info!(path = %path.display(), ?kind, "extracting resume text");

    match kind {
        DocumentKind::Pdf => pdf::extract_text(&bytes),
        DocumentKind::Docx => docx::extract_text(&bytes),
    }
}
