//! Resume text extraction — PDF and DOCX to plain text.
//!
//! Exactly two file kinds are accepted; anything else is rejected upstream
//! with an explicit unsupported-media error, never silently skipped.

mod docx;
mod pdf;

use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The two accepted resume file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    Docx,
}

impl ResumeKind {
    /// Resolves the resume kind from the declared content type, falling back
    /// to the filename extension when the browser omits the type or sends a
    /// generic one.
    pub fn resolve(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match content_type {
            Some(PDF_MIME) => return Some(ResumeKind::Pdf),
            Some(DOCX_MIME) => return Some(ResumeKind::Docx),
            _ => {}
        }

        match file_name.and_then(extension) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Some(ResumeKind::Pdf),
            Some(ext) if ext.eq_ignore_ascii_case("docx") => Some(ResumeKind::Docx),
            _ => None,
        }
    }
}

fn extension(name: &str) -> Option<&str> {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("malformed DOCX: {0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error("no text could be extracted from the document")]
    Empty,
}

/// Extracts plain text from an uploaded resume.
/// Documents that parse but yield no text at all are rejected rather than
/// sent to the model as an empty resume.
pub fn extract_text(data: &[u8], kind: ResumeKind) -> Result<String, ExtractError> {
    let text = match kind {
        ResumeKind::Pdf => pdf::extract(data)?,
        ResumeKind::Docx => docx::extract(data)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(text)
}
