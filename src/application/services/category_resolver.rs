//! Lookup-or-create resolution of link categories.

use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use crate::utils::slug::slugify;

/// Result of resolving a category name.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryResolution {
    /// The category was already stored.
    Existing(Category),
    /// The category was created by this call.
    Created(Category),
    /// The category was missing and creating it failed; holds the storage message.
    Failed(String),
}

/// Resolves category names to stored categories, creating missing ones.
///
/// Holds no cache: every call asks the repository, so a category created
/// earlier in the same run is seen as existing on the next lookup.
pub struct CategoryResolver<R: CategoryRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryResolver<R> {
    /// Creates a new category resolver.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves `name` by exact match, creating the category when absent.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the lookup itself fails. A failed
    /// creation is not an error; it is reported as [`CategoryResolution::Failed`].
    pub async fn resolve(&self, name: &str) -> Result<CategoryResolution, AppError> {
        if let Some(category) = self.repository.find_by_name(name).await? {
            return Ok(CategoryResolution::Existing(category));
        }

        let new_category = NewCategory {
            name: name.to_string(),
            slug: slugify(name),
        };

        match self.repository.create(new_category).await {
            Ok(category) => {
                tracing::info!(category_id = category.id, name, slug = %category.slug, "created category");
                Ok(CategoryResolution::Created(category))
            }
            Err(e) => {
                tracing::warn!(error = %e, name, "failed to create category");
                Ok(CategoryResolution::Failed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCategoryRepository;
    use chrono::Utc;
    use serde_json::json;

    fn category(id: i64, name: &str) -> Category {
        Category::new(id, name.to_string(), slugify(name), Utc::now())
    }

    #[tokio::test]
    async fn test_resolve_existing() {
        let mut mock_repo = MockCategoryRepository::new();

        let existing = category(4, "News");
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "News")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().times(0);

        let resolver = CategoryResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve("News").await.unwrap();

        match result {
            CategoryResolution::Existing(found) => {
                assert_eq!(found.id, 4);
                assert_eq!(found.name, "News");
            }
            other => panic!("expected Existing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_creates_missing() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|new_category| {
                new_category.name == "My Category" && new_category.slug == "my-category"
            })
            .times(1)
            .returning(|new_category| {
                Ok(Category::new(
                    9,
                    new_category.name,
                    new_category.slug,
                    Utc::now(),
                ))
            });

        let resolver = CategoryResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve("My Category").await.unwrap();

        match result {
            CategoryResolution::Created(created) => {
                assert_eq!(created.id, 9);
                assert_eq!(created.name, "My Category");
            }
            other => panic!("expected Created, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_creation_failure() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({"constraint": "categories_name_key"}),
            ))
        });

        let resolver = CategoryResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve("Racy").await.unwrap();

        assert_eq!(
            result,
            CategoryResolution::Failed("Unique constraint violation".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_lookup_failure_propagates() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_name()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        mock_repo.expect_create().times(0);

        let resolver = CategoryResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve("News").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
