use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_harvest::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks whether a resolved link passes the page-link domain filter
///
/// The filter is a plain substring test against the full resolved URL, so
/// `casl.website` keeps `https://casl.website/about` as well as
/// `https://blog.casl.website/`.
///
/// # Examples
///
/// ```
/// use site_harvest::url::matches_domain_filter;
///
/// assert!(matches_domain_filter("https://example.com/about", "example.com"));
/// assert!(!matches_domain_filter("https://other.org/", "example.com"));
/// ```
pub fn matches_domain_filter(link: &str, filter: &str) -> bool {
    link.contains(filter)
}
