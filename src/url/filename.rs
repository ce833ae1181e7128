use crate::{UrlError, UrlResult};
use url::Url;

/// Derives the local file name for a downloaded image
///
/// The name is the last non-empty path segment, kept exactly as it appears
/// in the URL (percent-encoding included). Query strings and fragments do not
/// contribute. Images sharing a basename map to the same file.
///
/// # Examples
///
/// ```
/// use site_harvest::url::image_file_name;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/assets/logo.png?v=3").unwrap();
/// assert_eq!(image_file_name(&url).unwrap(), "logo.png");
/// ```
pub fn image_file_name(url: &Url) -> UrlResult<String> {
    let name = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| UrlError::MissingFileName(url.to_string()))?;

    if name == "." || name == ".." {
        return Err(UrlError::MissingFileName(url.to_string()));
    }

    Ok(name.to_string())
}
