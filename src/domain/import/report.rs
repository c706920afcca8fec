//! Per-line outcomes and the aggregate import report.

use std::fmt;

/// Why a single line was not imported.
///
/// These are recorded in the report; none of them stops the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The url has no scheme or no host.
    InvalidUrl,
    /// The category did not exist and could not be created.
    CategoryCreationFailed { category: String, detail: String },
    /// The url is already stored under the target category.
    DuplicateLink { category: String },
    /// Storage rejected the new link.
    LinkInsertFailed { detail: String },
}

impl FailureReason {
    /// Language-neutral name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FailureReason::InvalidUrl => "invalid_url",
            FailureReason::CategoryCreationFailed { .. } => "category_creation_failed",
            FailureReason::DuplicateLink { .. } => "duplicate_link",
            FailureReason::LinkInsertFailed { .. } => "link_insert_failed",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::InvalidUrl => f.write_str("Invalid URL format."),
            FailureReason::CategoryCreationFailed { category, detail } => {
                write!(f, "Error creating category \"{category}\": {detail}")
            }
            FailureReason::DuplicateLink { category } => {
                write!(f, "Duplicate link found in category \"{category}\".")
            }
            FailureReason::LinkInsertFailed { detail } => {
                write!(f, "Error inserting link: {detail}")
            }
        }
    }
}

/// A line that was not imported.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedLine {
    pub url: String,
    pub reason: FailureReason,
}

/// Outcome of one import run.
///
/// Every processed line ends up in exactly one of `imported` or `failed`, so
/// `total_processed == imported.len() + failed.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub imported: Vec<String>,
    pub failed: Vec<FailedLine>,
    /// Categories created during the run, in creation order, each once.
    pub new_categories: Vec<String>,
    pub total_processed: usize,
}

impl ImportReport {
    pub fn record_imported(&mut self, url: String) {
        self.total_processed += 1;
        self.imported.push(url);
    }

    pub fn record_failed(&mut self, url: String, reason: FailureReason) {
        self.total_processed += 1;
        self.failed.push(FailedLine { url, reason });
    }

    /// Adds a created category name unless it is already listed.
    pub fn record_new_category(&mut self, name: &str) {
        if !self.new_categories.iter().any(|existing| existing == name) {
            self.new_categories.push(name.to_string());
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_messages() {
        assert_eq!(FailureReason::InvalidUrl.to_string(), "Invalid URL format.");
        assert_eq!(
            FailureReason::CategoryCreationFailed {
                category: "Failing Category".to_string(),
                detail: "Simulated term creation failure.".to_string(),
            }
            .to_string(),
            "Error creating category \"Failing Category\": Simulated term creation failure."
        );
        assert_eq!(
            FailureReason::DuplicateLink {
                category: "X".to_string()
            }
            .to_string(),
            "Duplicate link found in category \"X\"."
        );
        assert_eq!(
            FailureReason::LinkInsertFailed {
                detail: "Database error".to_string()
            }
            .to_string(),
            "Error inserting link: Database error"
        );
    }

    #[test]
    fn test_reason_kinds() {
        assert_eq!(FailureReason::InvalidUrl.kind(), "invalid_url");
        assert_eq!(
            FailureReason::DuplicateLink {
                category: "X".to_string()
            }
            .kind(),
            "duplicate_link"
        );
    }

    #[test]
    fn test_totals_track_outcomes() {
        let mut report = ImportReport::default();
        report.record_imported("https://a.com".to_string());
        report.record_failed("not-a-url".to_string(), FailureReason::InvalidUrl);
        report.record_imported("https://b.com".to_string());

        assert_eq!(report.total_processed, 3);
        assert_eq!(
            report.total_processed,
            report.imported.len() + report.failed.len()
        );
        assert!(report.has_failures());
    }

    #[test]
    fn test_new_categories_deduplicated_in_order() {
        let mut report = ImportReport::default();
        report.record_new_category("B");
        report.record_new_category("A");
        report.record_new_category("B");

        assert_eq!(report.new_categories, vec!["B", "A"]);
        assert_eq!(report.total_processed, 0);
    }
}
