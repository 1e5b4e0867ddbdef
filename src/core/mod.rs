//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - Report model (Issue, ValidationReport, RewriteReport)
//! - Rendering for text/jsonl/json output
//! - Path normalization utilities
//! - Story document discovery
//! - Configuration errors

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod stories;
