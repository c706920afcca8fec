//! Plain-text sanitizing for stored link titles.

use regex::Regex;
use std::sync::LazyLock;

/// `<script>` and `<style>` elements, content included.
static SCRIPT_STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap()
});

/// Any remaining markup tag.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Reduces a title to plain text.
///
/// 1. `<script>` and `<style>` elements are removed with their content
/// 2. Every other tag is removed, its text kept
/// 3. Control characters are dropped
/// 4. Whitespace runs collapse into one space, ends trimmed
pub fn sanitize_text(input: &str) -> String {
    let without_scripts = SCRIPT_STYLE_REGEX.replace_all(input, "");
    let without_tags = TAG_REGEX.replace_all(&without_scripts, "");

    let printable: String = without_tags
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();

    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}
