//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored link, tagged with one category
//! - [`Category`] - A named grouping of links
//! - [`Caller`] - The principal invoking an import, with its permissions
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewLink` and `NewCategory` carry only the fields a caller supplies.

pub mod caller;
pub mod category;
pub mod link;

pub use caller::{Caller, Permission};
pub use category::{Category, NewCategory};
pub use link::{Link, NewLink};
