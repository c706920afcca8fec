//! HTTP request handlers for API endpoints.

pub mod health;
pub mod import;

pub use health::health_handler;
pub use import::import_handler;
