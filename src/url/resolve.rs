use url::Url;

/// Resolves an attribute value to an absolute http(s) URL
///
/// Joining follows RFC 3986 (`Url::join`), so `/about` resolves against the
/// origin while `about` resolves against the page's directory.
///
/// Returns None if the value should be excluded:
/// - empty values and fragment-only links
/// - `javascript:`, `mailto:`, `tel:` and `data:` URIs
/// - values that do not resolve
/// - non-HTTP(S) URLs after resolution
///
/// # Examples
///
/// ```
/// use site_harvest::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/index.html").unwrap();
/// assert_eq!(
///     resolve_link("guide.html", &base).map(|u| u.to_string()),
///     Some("https://example.com/docs/guide.html".to_string())
/// );
/// assert!(resolve_link("mailto:someone@example.com", &base).is_none());
/// ```
pub fn resolve_link(raw: &str, base_url: &Url) -> Option<Url> {
    let raw = raw.trim();

    if raw.is_empty() || raw.starts_with('#') {
        return None;
    }

    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    match base_url.join(raw) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url)
            } else {
                None
            }
        }
        Err(e) => {
            tracing::debug!("Skipping unresolvable link '{}': {}", raw, e);
            None
        }
    }
}
