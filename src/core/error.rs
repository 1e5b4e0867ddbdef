//! Configuration errors
//!
//! These abort a run before any per-story work. Link problems are not errors;
//! they are reported as [`crate::core::model::Issue`]s.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Stories directory not found: {}", .0.display())]
    StoriesDirNotFound(PathBuf),

    #[error("Rewrite configuration not found: {}", .0.display())]
    RewritesFileNotFound(PathBuf),

    #[error("Rewrite configuration {} is not valid JSON", .path.display())]
    RewritesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Rewrite configuration {} must be a list of {{\"old\",\"new\"}} objects", .0.display())]
    RewritesNotList(PathBuf),

    #[error("Malformed entry at index {index}: {entry}")]
    MalformedRewrite { index: usize, entry: String },
}
