//! Rewrite module - Literal link substitutions in story documents
//!
//! Provides:
//! - rules: Load `{old, new}` rules from JSON
//! - apply: Apply rules to stories (the `fix` command)

pub mod apply;
pub mod rules;
