//! Persists validated links.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::import::{FailureReason, ValidatedRecord};
use crate::domain::repositories::LinkRepository;
use crate::utils::text::sanitize_text;

/// Writes new, visible links tagged with a single category.
pub struct LinkWriter<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkWriter<R> {
    /// Creates a new link writer.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores `record` under `category_id`.
    ///
    /// The title is sanitized before storage; when nothing printable is left
    /// the url is used instead. The url is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`FailureReason::LinkInsertFailed`] with the storage message
    /// if the repository rejects the link.
    pub async fn write(
        &self,
        record: &ValidatedRecord,
        category_id: i64,
    ) -> Result<Link, FailureReason> {
        let title = match sanitize_text(&record.title) {
            sanitized if sanitized.is_empty() => record.url.clone(),
            sanitized => sanitized,
        };

        let new_link = NewLink {
            url: record.url.clone(),
            title,
            category_id,
            visible: true,
        };

        self.repository.create(new_link).await.map_err(|e| {
            tracing::warn!(error = %e, url = %record.url, category_id, "failed to insert link");
            FailureReason::LinkInsertFailed {
                detail: e.to_string(),
            }
        })
    }
}
