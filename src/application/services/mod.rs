//! Business logic services for the application layer.

pub mod auth_service;
pub mod category_resolver;
pub mod duplicate_detector;
pub mod import_service;
pub mod link_writer;

pub use auth_service::AuthService;
pub use category_resolver::{CategoryResolution, CategoryResolver};
pub use duplicate_detector::DuplicateDetector;
pub use import_service::{DynImportService, ImportService};
pub use link_writer::LinkWriter;
