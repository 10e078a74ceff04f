//! URL utilities for validation and resolution.
//!
//! Provides the pre-flight admissibility predicate for source URLs and
//! helpers for resolving media references to absolute form.

use url::Url;

use crate::patterns::BLOCKED_EXTENSIONS;

/// Check whether a URL points to a fetchable web document.
///
/// This is a pure predicate with no side effects, usable standalone for
/// pre-flight validation. A URL is admissible when:
///
/// - the scheme is `http` or `https`,
/// - the host is not a loopback or local address, and
/// - the path does not end in a known non-document extension
///   (document, spreadsheet, archive, executable).
///
/// # Example
///
/// ```rust
/// use pagecast::url_utils::is_valid_url;
///
/// assert!(is_valid_url("https://a.com/article"));
/// assert!(!is_valid_url("http://localhost/page"));
/// assert!(!is_valid_url("https://a.com/file.pdf"));
/// ```
#[must_use]
pub fn is_valid_url(url_str: &str) -> bool {
    let Ok(url) = Url::parse(url_str.trim()) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let Some(host) = url.host_str() else {
        return false;
    };
    if is_local_host(host) {
        return false;
    }

    let path = url.path().to_ascii_lowercase();
    !BLOCKED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Check whether a hostname is a loopback or otherwise local address.
fn is_local_host(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');

    if host.eq_ignore_ascii_case("localhost") || host.ends_with(".localhost") {
        return true;
    }
    if host == "::1" || host == "0.0.0.0" {
        return true;
    }
    if host.starts_with("127.") {
        return true;
    }
    // RFC 1918 ranges and mDNS names count as local
    if host.starts_with("10.") || host.starts_with("192.168.") {
        return true;
    }
    if let Some(second) = host.strip_prefix("172.") {
        if let Some(octet) = second.split('.').next() {
            if let Ok(n) = octet.parse::<u8>() {
                if (16..=31).contains(&n) {
                    return true;
                }
            }
        }
    }
    host.ends_with(".local")
}

/// Parse a source URL, requiring scheme and host.
///
/// # Returns
/// * `Some(Url)` when the URL decomposes into scheme/host/path, `None` otherwise
#[must_use]
pub fn parse_source_url(url_str: &str) -> Option<Url> {
    let url = Url::parse(url_str.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str()?;
    Some(url)
}

/// Extract the hostname from a URL string.
///
/// # Returns
/// * The hostname, or empty string if the URL is not absolute
#[must_use]
pub fn extract_hostname(url_str: &str) -> String {
    parse_source_url(url_str)
        .and_then(|url| url.host_str().map(std::string::ToString::to_string))
        .unwrap_or_default()
}

/// Convert a relative or absolute URL to absolute form against a base.
///
/// # Returns
/// * `Some(absolute)` when resolution succeeds, `None` for empty input,
///   data/javascript pseudo-URLs, or unresolvable references
#[must_use]
pub fn resolve_absolute(url_str: &str, base: &Url) -> Option<String> {
    let url_str = url_str.trim();

    if url_str.is_empty()
        || url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with('#')
    {
        return None;
    }

    if url_str.starts_with("http://") || url_str.starts_with("https://") {
        // Validate rather than trust the attribute
        return Url::parse(url_str).ok().map(|u| u.to_string());
    }

    base.join(url_str).ok().and_then(|resolved| {
        matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
    })
}
