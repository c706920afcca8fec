//! Pure stages of the link import pipeline.
//!
//! Nothing here touches storage. The stages run in this order for every
//! input line:
//!
//! 1. [`tokenize_lines`] - raw text to trimmed, non-empty lines
//! 2. [`parse_record`] - one line to a [`ParsedRecord`]
//! 3. [`validate_record`] - URL check and defaults, yielding a [`ValidatedRecord`]
//!
//! Outcomes are collected in an [`ImportReport`].

pub mod record;
pub mod report;
pub mod tokenizer;
pub mod validator;

pub use record::{ParsedRecord, parse_record};
pub use report::{FailedLine, FailureReason, ImportReport};
pub use tokenizer::tokenize_lines;
pub use validator::{DEFAULT_CATEGORY, ValidatedRecord, is_valid_url, validate_record};
