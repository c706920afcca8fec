//! URL-safe slugs for category names.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Runs of anything that is not a letter or digit.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Number of hex characters kept from the name hash in fallback slugs.
const FALLBACK_HASH_LEN: usize = 12;

/// Derives a URL-safe slug from a category name.
///
/// # Rules
///
/// 1. The name is lower-cased
/// 2. Every run of non-alphanumeric characters becomes a single `-`
/// 3. Leading and trailing `-` are removed
/// 4. Non-ASCII characters are percent-encoded (lower-case hex)
///
/// Names without any letter or digit get `category-<hash>` where `<hash>`
/// is the start of the SHA-256 of the name, so distinct names keep distinct
/// slugs.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("My Category"), "my-category");
/// assert_eq!(slugify("Café"), "caf%c3%a9");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let dashed = SEPARATOR_REGEX.replace_all(&lowered, "-");
    let trimmed = dashed.trim_matches('-');

    if trimmed.is_empty() {
        return fallback_slug(name);
    }

    url::form_urlencoded::byte_serialize(trimmed.as_bytes())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn fallback_slug(name: &str) -> String {
    let digest = hex::encode(Sha256::digest(name.as_bytes()));
    format!("category-{}", &digest[..FALLBACK_HASH_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(slugify("My Category"), "my-category");
        assert_eq!(slugify("Uncategorized"), "uncategorized");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("  C++ & Rust!! "), "c-rust");
        assert_eq!(slugify("news/tech -- daily"), "news-tech-daily");
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(slugify("Top 10 Links"), "top-10-links");
    }

    #[test]
    fn test_non_ascii_percent_encoded() {
        assert_eq!(slugify("Café"), "caf%c3%a9");
    }

    #[test]
    fn test_fallback_for_symbols_only() {
        let slug = slugify("!!!");
        assert!(slug.starts_with("category-"));
        assert_eq!(slug.len(), "category-".len() + FALLBACK_HASH_LEN);
        assert_eq!(slug, slugify("!!!"));
        assert_ne!(slug, slugify("???"));
    }
}
