//! Local text file reading.

use crate::error::{AppError, Result};
use crate::utils::decode_text;
use std::path::Path;

/// Read the whole file as text, decoding non-UTF-8 content when needed.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|err| AppError::file_read(path, err))?;
    let (content, encoding) = decode_text(&bytes);
    if encoding != "utf-8" {
        tracing::debug!("Decoded {} as {}", path.display(), encoding);
    }
    Ok(content)
}
