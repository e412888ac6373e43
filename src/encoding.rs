//! Byte input decoding.
//!
//! A byte-order mark wins; otherwise the head of the document is prescanned
//! for a `<meta>` charset declaration; otherwise the input is UTF-8.
//! Malformed sequences become U+FFFD, so decoding never fails.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;

/// Bytes examined by the meta prescan.
const PRESCAN_LIMIT: usize = 1024;

/// `charset=` inside a `<meta>` tag, covering both `<meta charset>` and the
/// http-equiv `content="text/html; charset=..."` form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Pick the encoding for a document: BOM, then meta prescan, then UTF-8.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    prescan_meta(bytes).unwrap_or(UTF_8)
}

/// Charset declared by a `<meta>` tag in the first kilobyte.
///
/// A declared UTF-16 is read as UTF-8: without a BOM the bytes that spelled
/// the declaration were ASCII-compatible.
fn prescan_meta(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(PRESCAN_LIMIT)]);
    let label = META_CHARSET.captures(&head)?.get(1)?.as_str();
    let encoding = Encoding::for_label(label.as_bytes())?;

    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Some(UTF_8);
    }
    Some(encoding)
}

/// Decode a document to a string.
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = actual.name(), "replaced malformed byte sequences");
    }
    text.into_owned()
}
