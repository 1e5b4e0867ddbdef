//! Source link validation
//!
//! Checks every story link for an existing target file and, when an anchor is
//! given, for a matching heading in that file.

use anyhow::{Context, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::anchors::index::AnchorIndex;
use crate::core::model::{Issue, ValidationReport};
use crate::core::paths::{display_path, resolve_reference};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::stories::list_stories;
use crate::links::extract::extract_links;

/// Anchor indexes of target documents, built at most once per run
#[derive(Debug, Default)]
pub struct AnchorCache {
    entries: HashMap<PathBuf, AnchorIndex>,
    builds: usize,
}

impl AnchorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for `path`, reading and scanning the file on first use
    pub fn get_or_build(&mut self, path: &Path) -> Result<&AnchorIndex> {
        match self.entries.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => {
                tracing::trace!(path = %path.display(), "anchor index cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let index = AnchorIndex::from_markdown(&content);
                self.builds += 1;
                tracing::debug!(
                    path = %path.display(),
                    anchors = index.len(),
                    "built anchor index"
                );
                Ok(entry.insert(index))
            }
        }
    }

    /// Number of indexes built so far
    pub fn builds(&self) -> usize {
        self.builds
    }
}

/// Run-scoped validation context
pub struct Validator {
    root: PathBuf,
    cache: AnchorCache,
}

impl Validator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: AnchorCache::new(),
        }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &AnchorCache {
        &self.cache
    }

    /// Validate every story in `stories_dir`
    pub fn validate_dir(&mut self, stories_dir: &Path) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        for story in list_stories(stories_dir)? {
            self.validate_story(&story, &mut report)?;
            report.stories_scanned += 1;
        }

        report.indexes_built = self.cache.builds();
        Ok(report)
    }

    /// Validate one story, appending issues in document order
    pub fn validate_story(&mut self, story: &Path, report: &mut ValidationReport) -> Result<()> {
        let content = fs::read_to_string(story)
            .with_context(|| format!("Failed to read {}", story.display()))?;
        let story_name = display_path(story, &self.root);

        for link in extract_links(&content) {
            report.links_checked += 1;

            let target = resolve_reference(&self.root, &link.file_ref);
            if !target.exists() {
                report
                    .issues
                    .push(Issue::missing_file(story_name.as_str(), link.line, &link.file_ref));
                continue;
            }

            let Some(anchor) = link.anchor.as_deref() else {
                continue;
            };

            let index = self.cache.get_or_build(&target)?;
            if !index.contains(anchor) {
                tracing::debug!(
                    story = %story_name,
                    line = link.line,
                    anchor,
                    available = ?index.anchors(),
                    "anchor not found"
                );
                report.issues.push(Issue::missing_anchor(
                    story_name.as_str(),
                    link.line,
                    &link.file_ref,
                    anchor,
                ));
            }
        }

        Ok(())
    }
}

/// Run the check command
pub fn run_check(
    root: &Path,
    stories_dir: &Path,
    fail_on_issues: bool,
    config: RenderConfig,
) -> Result<()> {
    let stories_dir = root.join(stories_dir);
    let mut validator = Validator::new(root);
    let report = validator.validate_dir(&stories_dir)?;

    tracing::info!(
        stories = report.stories_scanned,
        links = report.links_checked,
        issues = report.issues.len(),
        "validation finished"
    );

    let renderer = Renderer::with_config(config);
    let output = renderer.render_validation(&report);
    if !output.is_empty() {
        println!("{}", output);
    }

    if fail_on_issues && !report.is_clean() {
        anyhow::bail!("{} Source link issue(s) found", report.issues.len());
    }

    Ok(())
}
