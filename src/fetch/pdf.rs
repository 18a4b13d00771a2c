//! PDF text extraction.

use crate::error::{AppError, Result};
use std::path::Path;

/// Extract the plain text of every page.
pub fn read_pdf(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|err| AppError::file_read(path, err))?;
    tracing::debug!("Read {} KB of PDF data from {}", bytes.len() / 1024, path.display());
    pdf_extract::extract_text_from_mem(&bytes).map_err(|err| AppError::file_read(path, err))
}
