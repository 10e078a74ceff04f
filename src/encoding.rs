//! Character encoding detection and transcoding.
//!
//! Web pages arrive in whatever charset their server declared. This
//! module sniffs the declaration from the document head and converts
//! the byte stream to UTF-8 before extraction, replacing invalid
//! sequences rather than failing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Matches the charset parameter of an http-equiv Content-Type meta tag.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)content\s*=\s*["'][^"']*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Detect the declared character encoding of an HTML byte stream.
///
/// Only the first 1024 bytes are examined; that window covers the
/// `<head>` of any well-formed page. Defaults to UTF-8 when no usable
/// declaration is found.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    for pattern in [&*META_CHARSET, &*HTTP_EQUIV_CHARSET] {
        if let Some(captures) = pattern.captures(&head_str) {
            if let Some(label) = captures.get(1) {
                if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                    return encoding;
                }
            }
        }
    }

    UTF_8
}

/// Convert HTML bytes to a UTF-8 string using the declared encoding.
///
/// Invalid sequences are replaced with U+FFFD rather than causing errors.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_meta_charset() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head></html>";
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detects_http_equiv_charset() {
        let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1251\"></head></html>";
        assert_eq!(detect_encoding(html).name(), "windows-1251");
    }

    #[test]
    fn defaults_to_utf8() {
        let html = b"<html><head><title>No charset</title></head></html>";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn transcodes_latin1_bytes() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let text = transcode_to_utf8(html);
        assert!(text.contains("Caf\u{e9}"));
    }
}
