//! Category-scoped duplicate detection.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Checks whether a url is already stored under a category.
///
/// The check is scoped to one category: the same url may be stored under
/// several categories.
pub struct DuplicateDetector<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> DuplicateDetector<R> {
    /// Creates a new duplicate detector.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns true if a link with exactly `url` is tagged with `category_id`.
    ///
    /// Comparison is an exact string match, no normalization.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the links cannot be listed.
    pub async fn is_duplicate(&self, url: &str, category_id: i64) -> Result<bool, AppError> {
        let links = self.repository.list_by_category(category_id).await?;
        Ok(links.iter().any(|link| link.url == url))
    }
}
