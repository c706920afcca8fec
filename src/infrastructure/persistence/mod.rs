//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits. The PostgreSQL
//! repositories use SQLx runtime queries; [`MemoryStore`] keeps everything in
//! process.
//!
//! # Repositories
//!
//! - [`PgCategoryRepository`] - Category lookup and creation
//! - [`PgLinkRepository`] - Link storage and per-category listing
//! - [`PgTokenRepository`] - API token storage and validation
//! - [`MemoryStore`] - All of the above, in memory

pub mod memory_store;
pub mod pg_category_repository;
pub mod pg_link_repository;
pub mod pg_token_repository;

pub use memory_store::MemoryStore;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_token_repository::PgTokenRepository;
