//! Text decoding with UTF-8 fast path and charset detection fallback.
//!
//! Strategy:
//! - BOM markers first (UTF-8, UTF-16 LE/BE)
//! - strict UTF-8
//! - chardetng guess, decoding with replacement characters

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

const DETECTION_SAMPLE_SIZE: usize = 8192;

/// Decode raw file bytes into text.
///
/// # Returns
/// A tuple `(content, encoding_used)` where the label is lowercase
/// (e.g. "utf-8", "utf-16le", "windows-1252").
pub fn decode_text(bytes: &[u8]) -> (String, String) {
    if let Some((encoding, bom_len)) = bom_encoding(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), encoding.name().to_lowercase());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), "utf-8".to_string());
    }

    let encoding = detect_encoding(bytes);
    let (decoded, used, _had_errors) = encoding.decode(bytes);
    (decoded.into_owned(), used.name().to_lowercase())
}

fn bom_encoding(bytes: &[u8]) -> Option<(&'static Encoding, usize)> {
    if bytes.starts_with(&[0xef, 0xbb, 0xbf]) {
        Some((UTF_8, 3))
    } else if bytes.starts_with(&[0xff, 0xfe]) {
        Some((UTF_16LE, 2))
    } else if bytes.starts_with(&[0xfe, 0xff]) {
        Some((UTF_16BE, 2))
    } else {
        None
    }
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let sample = &bytes[..bytes.len().min(DETECTION_SAMPLE_SIZE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    detector.guess(None, true)
}
