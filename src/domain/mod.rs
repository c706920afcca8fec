//! Domain layer containing business entities and logic.
//!
//! This module holds everything the import pipeline needs that does not
//! touch storage or transport.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`import`] - Pure pipeline stages: tokenizing, record parsing, validation
//!   and the import report
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])
//!
//! # Import Flow
//!
//! 1. Raw text is split into lines by [`import::tokenize_lines`]
//! 2. Each line becomes a [`import::ParsedRecord`] via [`import::parse_record`]
//! 3. [`import::validate_record`] checks the URL and applies defaults
//! 4. The category is resolved, the link deduplicated and written by
//!    [`crate::application::services::ImportService`]

pub mod entities;
pub mod import;
pub mod repositories;
