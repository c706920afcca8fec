//! Validation and defaulting of parsed records.

use url::Url;

use super::record::ParsedRecord;
use super::report::FailureReason;

/// Category assigned to lines that do not name one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A record that passed validation.
///
/// `url` has a scheme and a host; `title` and `category` are never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub url: String,
    pub title: String,
    pub category: String,
}

/// Returns true if `input` is an absolute URL with a non-empty host.
///
/// Rejects relative references (`example.com/path`) and host-less schemes
/// such as `mailto:` or `file:///`.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

/// Validates a parsed record.
///
/// Rules, in order:
///
/// 1. An empty category becomes [`DEFAULT_CATEGORY`]
/// 2. The url must pass [`is_valid_url`], otherwise [`FailureReason::InvalidUrl`]
/// 3. An empty title becomes the url
pub fn validate_record(record: ParsedRecord) -> Result<ValidatedRecord, FailureReason> {
    let ParsedRecord {
        url,
        title,
        category,
    } = record;

    let category = if category.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category
    };

    if !is_valid_url(&url) {
        return Err(FailureReason::InvalidUrl);
    }

    let title = if title.is_empty() { url.clone() } else { title };

    Ok(ValidatedRecord {
        url,
        title,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(url: &str, title: &str, category: &str) -> ParsedRecord {
        ParsedRecord {
            url: url.to_string(),
            title: title.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1#frag"));
        assert!(is_valid_url("ftp://files.example.com/pub"));
        assert!(is_valid_url("https://nourl-only.com/"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_complete_record_passes_unchanged() {
        let record = validate_record(parsed("https://a.com", "A", "Cat")).unwrap();
        assert_eq!(record.url, "https://a.com");
        assert_eq!(record.title, "A");
        assert_eq!(record.category, "Cat");
    }

    #[test]
    fn test_defaults_applied() {
        let record = validate_record(parsed("https://nourl-only.com/", "", "")).unwrap();
        assert_eq!(record.title, "https://nourl-only.com/");
        assert_eq!(record.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = validate_record(parsed("not-a-url", "Title", "Cat"));
        assert_eq!(result.unwrap_err(), FailureReason::InvalidUrl);
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = validate_record(parsed("", "Title", ""));
        assert_eq!(result.unwrap_err(), FailureReason::InvalidUrl);
    }
}
