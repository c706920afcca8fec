//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::import_service::ImportService`] - Bulk link import pipeline
//! - [`services::category_resolver::CategoryResolver`] - Category lookup-or-create
//! - [`services::duplicate_detector::DuplicateDetector`] - Per-category duplicate check
//! - [`services::link_writer::LinkWriter`] - Link persistence
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
