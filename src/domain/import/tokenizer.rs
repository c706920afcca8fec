//! Splits raw import text into candidate lines.

/// Splits `raw` on `\n`, trims every segment and drops the empty ones.
///
/// Order is preserved and there is no cap on the number of lines. Trimming
/// also removes the `\r` of CRLF input.
pub fn tokenize_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
