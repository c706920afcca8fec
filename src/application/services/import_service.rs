//! Bulk link import orchestration.

use std::sync::Arc;

use crate::application::services::category_resolver::{CategoryResolution, CategoryResolver};
use crate::application::services::duplicate_detector::DuplicateDetector;
use crate::application::services::link_writer::LinkWriter;
use crate::domain::entities::{Caller, Permission};
use crate::domain::import::{
    FailureReason, ImportReport, ParsedRecord, parse_record, tokenize_lines, validate_record,
};
use crate::domain::repositories::{CategoryRepository, LinkRepository};
use crate::error::{AppError, ImportError};

/// Import service backed by trait objects, as stored in [`crate::state::AppState`].
pub type DynImportService = ImportService<dyn CategoryRepository, dyn LinkRepository>;

/// Imports pasted link lists.
///
/// Each non-empty line goes through parse, validate, category resolution,
/// duplicate check and write, strictly in input order. A failing line is
/// recorded in the report and never stops the lines after it; nothing is
/// rolled back.
pub struct ImportService<C: CategoryRepository + ?Sized, L: LinkRepository + ?Sized> {
    categories: Arc<C>,
    resolver: CategoryResolver<C>,
    detector: DuplicateDetector<L>,
    writer: LinkWriter<L>,
}

impl<C, L> ImportService<C, L>
where
    C: CategoryRepository + ?Sized,
    L: LinkRepository + ?Sized,
{
    /// Creates a new import service.
    pub fn new(categories: Arc<C>, links: Arc<L>) -> Self {
        Self {
            resolver: CategoryResolver::new(categories.clone()),
            detector: DuplicateDetector::new(links.clone()),
            writer: LinkWriter::new(links),
            categories,
        }
    }

    /// Imports every line of `raw` on behalf of `caller`.
    ///
    /// # Preconditions
    ///
    /// Checked in this order before any line is processed:
    ///
    /// 1. `caller` holds [`Permission::ManageLinks`]
    /// 2. `raw` is not empty
    /// 3. `raw` contains at least one non-blank line
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::PermissionDenied`], [`ImportError::NoInputProvided`]
    /// or [`ImportError::NoValidLinesFound`] when a precondition fails.
    /// Returns [`ImportError::Storage`] if the storage layer fails outside the
    /// per-line failure kinds (category lookup, duplicate listing); the run
    /// stops there and lines already written stay written.
    pub async fn import_links(
        &self,
        caller: &Caller,
        raw: &str,
    ) -> Result<ImportReport, ImportError> {
        if !caller.has_permission(Permission::ManageLinks) {
            tracing::warn!(caller = %caller.name, "link import denied: missing permission");
            return Err(ImportError::PermissionDenied);
        }

        if raw.is_empty() {
            return Err(ImportError::NoInputProvided);
        }

        let lines = tokenize_lines(raw);
        if lines.is_empty() {
            return Err(ImportError::NoValidLinesFound);
        }

        tracing::info!(caller = %caller.name, lines = lines.len(), "starting link import");

        let mut report = ImportReport::default();

        for line in lines {
            let parsed = parse_record(line);
            let url = parsed.url.clone();

            match self.process_record(parsed, &mut report).await? {
                Ok(()) => {
                    tracing::debug!(url = %url, "link imported");
                    report.record_imported(url);
                }
                Err(reason) => {
                    tracing::debug!(url = %url, kind = reason.kind(), "line not imported");
                    report.record_failed(url, reason);
                }
            }
        }

        tracing::info!(
            caller = %caller.name,
            total = report.total_processed,
            imported = report.imported.len(),
            failed = report.failed.len(),
            new_categories = report.new_categories.len(),
            "link import finished"
        );

        Ok(report)
    }

    /// Runs one parsed line through the storage-backed stages.
    ///
    /// The outer `Result` carries fatal storage errors, the inner one the
    /// per-line outcome.
    async fn process_record(
        &self,
        parsed: ParsedRecord,
        report: &mut ImportReport,
    ) -> Result<Result<(), FailureReason>, AppError> {
        let record = match validate_record(parsed) {
            Ok(record) => record,
            Err(reason) => return Ok(Err(reason)),
        };

        let category = match self.resolver.resolve(&record.category).await? {
            CategoryResolution::Existing(category) => category,
            CategoryResolution::Created(category) => {
                report.record_new_category(&record.category);
                category
            }
            CategoryResolution::Failed(detail) => {
                return Ok(Err(FailureReason::CategoryCreationFailed {
                    category: record.category,
                    detail,
                }));
            }
        };

        if self.detector.is_duplicate(&record.url, category.id).await? {
            return Ok(Err(FailureReason::DuplicateLink {
                category: record.category,
            }));
        }

        if let Err(reason) = self.writer.write(&record, category.id).await {
            return Ok(Err(reason));
        }

        Ok(Ok(()))
    }

    /// Number of stored categories; doubles as a storage liveness probe.
    ///
    /// # Errors
    ///
    /// Returns the repository error if storage is unreachable.
    pub async fn category_count(&self) -> Result<i64, AppError> {
        self.categories.count().await
    }
}
