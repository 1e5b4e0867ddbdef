//! Links module - Source references in story documents
//!
//! Provides:
//! - extract: Find `[Source: ...]` references
//! - validate: Check targets and anchors (the `check` command)

pub mod extract;
pub mod validate;
