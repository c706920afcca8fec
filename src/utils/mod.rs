//! Helper functions used across the application.
//!
//! - [`slug`] - URL-safe slugs for category names
//! - [`text`] - Plain-text sanitizing for link titles

pub mod slug;
pub mod text;
