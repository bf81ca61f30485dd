//! Absolute URL resolution and percent-escaping.

use super::UrlResolver;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;
use std::sync::LazyLock;

/// Anything with a scheme counts as already absolute.
static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap());

/// Characters outside the RFC 3986 unreserved and reserved sets. `%` is
/// deliberately not in the set, so already-encoded input is left alone.
const URL_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-escape a URL, preserving reserved delimiters like `/` and `?`.
pub fn percent_escape(input: &str) -> String {
    utf8_percent_encode(input, URL_UNSAFE).to_string()
}

/// [`UrlResolver`] joining site-relative paths onto a fixed base URL.
pub struct SiteUrls {
    base_url: String,
}

impl SiteUrls {
    /// `base_url` is the site origin plus any path prefix, e.g.
    /// `https://example.com` or `https://example.com/blog`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl UrlResolver for SiteUrls {
    fn absolute_url(&self, path: &str) -> String {
        if self.is_absolute_url(path) {
            return path.to_owned();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_owned()
        } else if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    fn is_absolute_url(&self, path: &str) -> bool {
        URL_SCHEME.is_match(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> SiteUrls {
        SiteUrls::new("https://example.com")
    }

    #[test]
    fn test_absolute_url_rooted_path() {
        assert_eq!(
            urls().absolute_url("/img/logo.png"),
            "https://example.com/img/logo.png"
        );
    }

    #[test]
    fn test_absolute_url_bare_path() {
        assert_eq!(
            urls().absolute_url("img/logo.png"),
            "https://example.com/img/logo.png"
        );
    }

    #[test]
    fn test_absolute_url_already_absolute() {
        assert_eq!(
            urls().absolute_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_absolute_url_empty_path() {
        assert_eq!(urls().absolute_url(""), "https://example.com");
    }

    #[test]
    fn test_absolute_url_trailing_slash_base() {
        let urls = SiteUrls::new("https://example.com/");
        assert_eq!(urls.absolute_url("/a/"), "https://example.com/a/");
    }

    #[test]
    fn test_is_absolute_url() {
        let urls = urls();
        assert!(urls.is_absolute_url("https://example.com/a"));
        assert!(urls.is_absolute_url("ftp://example.com"));
        assert!(!urls.is_absolute_url("/a/b"));
        assert!(!urls.is_absolute_url("a/b"));
        assert!(!urls.is_absolute_url("//example.com/a"));
    }

    #[test]
    fn test_percent_escape_spaces() {
        assert_eq!(
            percent_escape("/img/site logo.png"),
            "/img/site%20logo.png"
        );
    }

    #[test]
    fn test_percent_escape_preserves_reserved() {
        assert_eq!(
            percent_escape("https://example.com/a/b?x=1&y=2"),
            "https://example.com/a/b?x=1&y=2"
        );
    }

    #[test]
    fn test_percent_escape_preserves_encoded() {
        assert_eq!(percent_escape("/a%20b.png"), "/a%20b.png");
    }

    #[test]
    fn test_percent_escape_non_ascii() {
        assert_eq!(percent_escape("/läge.png"), "/l%C3%A4ge.png");
    }
}
