//! Stream-wrapper style URI helpers.

/// Split `scheme://target` into its scheme and target.
///
/// Returns `None` for plain paths. The scheme must be non-empty and consist
/// of ASCII alphanumerics, `+`, `-` or `.`, starting with a letter.
///
/// # Examples
///
/// ```
/// use kaltura_core::split_uri;
///
/// assert_eq!(split_uri("public://kaltura_thumbnails"), Some(("public", "kaltura_thumbnails")));
/// assert_eq!(split_uri("/var/www/files"), None);
/// assert_eq!(split_uri("://nothing"), None);
/// ```
pub fn split_uri(uri: &str) -> Option<(&str, &str)> {
    let (scheme, target) = uri.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, target))
}
