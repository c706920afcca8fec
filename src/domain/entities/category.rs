//! Category entity grouping imported links.

use chrono::{DateTime, Utc};

/// A named link category.
///
/// Names are unique within the category namespace; uniqueness is enforced
/// by the storage layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new Category instance.
    pub fn new(id: i64, name: String, slug: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            slug,
            created_at,
        }
    }
}

/// Input data for creating a new category.
///
/// `slug` is a URL-safe hint derived from the name (see
/// [`crate::utils::slug::slugify`]).
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let now = Utc::now();
        let category = Category::new(
            3,
            "My Category".to_string(),
            "my-category".to_string(),
            now,
        );

        assert_eq!(category.id, 3);
        assert_eq!(category.name, "My Category");
        assert_eq!(category.slug, "my-category");
        assert_eq!(category.created_at, now);
    }
}
