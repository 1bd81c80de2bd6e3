//! Shared helpers for XML generation and archive paths.

use std::borrow::Cow;

/// Escape the five reserved XML characters.
///
/// Applied to every caller-supplied string (titles, authors, file names)
/// before it is embedded in a generated document, so the output stays
/// well-formed regardless of input content.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// Sanitize a path for use as an archive member name (forward slashes,
/// no leading slash, no empty segments).
pub(crate) fn sanitize_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello & World"), "Hello &amp; World");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/images/cover.png"), "images/cover.png");
        assert_eq!(sanitize_path("images\\cover.png"), "images/cover.png");
        assert_eq!(sanitize_path("images//cover.png"), "images/cover.png");
        assert_eq!(sanitize_path("images///cover.png"), "images/cover.png");
        assert_eq!(sanitize_path("//images/cover.png"), "images/cover.png");
    }
}
