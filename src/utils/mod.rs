//! Small helpers shared across modules.

pub mod encoding;
#[cfg(test)]
pub(crate) mod test_server;

pub use encoding::decode_text;

/// Keep at most `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
