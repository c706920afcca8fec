//! DTOs for the bulk link import endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::import::{FailedLine, ImportReport};

/// Request body for `POST /api/import`.
///
/// `links` holds the raw multi-line text, one `url,title,category` record per
/// line. A missing field is treated like an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub links: Option<String>,
}

/// Import report returned on success.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ImportResponse {
    pub imported: Vec<String>,
    pub failed: Vec<FailedItem>,
    pub new_categories: Vec<String>,
    pub total_processed: usize,
}

/// A line that was not imported, with its human-readable reason.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FailedItem {
    pub url: String,
    pub reason: String,
}

impl From<FailedLine> for FailedItem {
    fn from(line: FailedLine) -> Self {
        Self {
            url: line.url,
            reason: line.reason.to_string(),
        }
    }
}

impl From<ImportReport> for ImportResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            imported: report.imported,
            failed: report.failed.into_iter().map(FailedItem::from).collect(),
            new_categories: report.new_categories,
            total_processed: report.total_processed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::import::FailureReason;
    use serde_json::json;

    #[test]
    fn test_request_links_optional() {
        let req: ImportRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.links.is_none());

        let req: ImportRequest = serde_json::from_value(json!({"links": "a"})).unwrap();
        assert_eq!(req.links.as_deref(), Some("a"));
    }

    #[test]
    fn test_response_shape() {
        let mut report = ImportReport::default();
        report.record_imported("https://a.com".to_string());
        report.record_failed("bad".to_string(), FailureReason::InvalidUrl);
        report.record_new_category("News");

        let value = serde_json::to_value(ImportResponse::from(report)).unwrap();
        assert_eq!(
            value,
            json!({
                "imported": ["https://a.com"],
                "failed": [{"url": "bad", "reason": "Invalid URL format."}],
                "new_categories": ["News"],
                "total_processed": 2
            })
        );
    }
}
