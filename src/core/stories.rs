//! Story document discovery
//!
//! Uses walkdir to list `*.story.md` files directly inside the stories directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::ConfigError;

/// File name suffix identifying story documents
pub const STORY_SUFFIX: &str = ".story.md";

/// List story documents in lexicographic file name order (non-recursive)
pub fn list_stories(stories_dir: &Path) -> Result<Vec<PathBuf>> {
    if !stories_dir.is_dir() {
        return Err(ConfigError::StoriesDirNotFound(stories_dir.to_path_buf()).into());
    }

    let mut stories = Vec::new();
    let walker = WalkDir::new(stories_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry
            .with_context(|| format!("Failed to list {}", stories_dir.display()))?;

        // Follows symlinks: a linked story file counts as a story.
        if !entry.path().is_file() {
            continue;
        }

        let is_story = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(STORY_SUFFIX))
            .unwrap_or(false);

        if is_story {
            stories.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %stories_dir.display(), count = stories.len(), "listed stories");
    Ok(stories)
}
