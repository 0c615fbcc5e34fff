//! HTML escaping and URL sanitization.
//!
//! Resume fields are caller-supplied and land directly in markup, so every
//! text value is entity-escaped and every URL value passes a scheme
//! allow-list before insertion. Values that fail the allow-list collapse to
//! `#` rather than erroring; malformed input is accepted, never surfaced.

/// Escapes the HTML-significant characters `&`, `<`, `>` and `"`.
///
/// # Example
///
/// ```rust
/// use portfolio_render::escape_html;
///
/// assert_eq!(escape_html("Fish & Chips"), "Fish &amp; Chips");
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Schemes accepted by [`sanitize_url`]. Anything else collapses to `#`.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Sanitizes a URL for insertion into an `href` attribute.
///
/// Accepts absolute URLs with an allow-listed scheme, fragment-only links
/// (`#`), and relative paths (no scheme). Everything else, notably
/// `javascript:`, is replaced with `#`. Characters that would break out of
/// a quoted attribute are percent-encoded.
///
/// # Example
///
/// ```rust
/// use portfolio_render::sanitize_url;
///
/// assert_eq!(sanitize_url("https://github.com/ana"), "https://github.com/ana");
/// assert_eq!(sanitize_url("./assets/resume.pdf"), "./assets/resume.pdf");
/// assert_eq!(sanitize_url("javascript:alert(1)"), "#");
/// ```
pub fn sanitize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return "#".to_string();
    }

    if let Some(scheme) = scheme_of(trimmed) {
        let allowed = ALLOWED_SCHEMES
            .iter()
            .any(|s| scheme.eq_ignore_ascii_case(s));
        if !allowed {
            return "#".to_string();
        }
    }

    trimmed
        .replace('"', "%22")
        .replace('<', "%3C")
        .replace('>', "%3E")
}

/// Returns the URL scheme, if the value has one before any path/query/fragment.
fn scheme_of(url: &str) -> Option<&str> {
    let end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'))?;
    if url.as_bytes()[end] == b':' {
        Some(&url[..end])
    } else {
        None
    }
}
