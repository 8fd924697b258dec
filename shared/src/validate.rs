//! Rules a link has to satisfy before the backend accepts it.
use url::Url;

use crate::form::{SLUG_MAX_LENGTH, SLUG_MIN_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The slug must be between {min} and {max} characters long", min = SLUG_MIN_LENGTH, max = SLUG_MAX_LENGTH)]
    SlugLength,

    #[error("The slug may only contain letters, digits, '-' and '_'")]
    SlugCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// # Errors
/// Fails if the slug is too short, too long or contains characters that do not
/// belong in a path segment.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let length = slug.chars().count();
    if !(SLUG_MIN_LENGTH..=SLUG_MAX_LENGTH).contains(&length) {
        return Err(ValidationError::SlugLength);
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::SlugCharacters);
    }
    Ok(())
}

/// Parse the destination and make sure it is an absolute http(s) url.
///
/// # Errors
/// Fails for unparsable input and for every scheme other than `http` and `https`.
pub fn validate_target(target: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(target.trim()).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ValidationError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_length_is_bounded() {
        assert_eq!(validate_slug("abc"), Err(ValidationError::SlugLength));
        assert_eq!(validate_slug("abcdefghijklm"), Err(ValidationError::SlugLength));
        assert!(validate_slug("abcdef").is_ok());
        assert!(validate_slug("abcdefghijkl").is_ok());
    }

    #[test]
    fn slug_rejects_path_characters() {
        assert_eq!(validate_slug("abc/def"), Err(ValidationError::SlugCharacters));
        assert_eq!(validate_slug("abc def"), Err(ValidationError::SlugCharacters));
        assert!(validate_slug("my-link_1").is_ok());
    }

    #[test]
    fn target_must_be_http() {
        assert!(validate_target("https://example.com/path?q=1").is_ok());
        assert!(validate_target("http://example.com").is_ok());
        assert_eq!(
            validate_target("javascript:alert(1)"),
            Err(ValidationError::UnsupportedProtocol)
        );
        assert!(matches!(
            validate_target("example.com"),
            Err(ValidationError::InvalidUrl(_))
        ));
    }
}
