//! Link entity representing an imported URL.

use chrono::{DateTime, Utc};

/// A stored link with its display title and category.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub visible: bool,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        url: String,
        title: String,
        visible: bool,
        category_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            title,
            visible,
            category_id,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// The link is stored and tagged with `category_id` in one step; links are
/// never updated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub url: String,
    pub title: String,
    pub category_id: i64,
    pub visible: bool,
}
