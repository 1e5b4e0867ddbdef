//! Report model
//!
//! Both subcommands map their findings to these types before rendering output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of problem found for a single Source link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingFile,
    MissingAnchor,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingFile => "missing_file",
            IssueKind::MissingAnchor => "missing_anchor",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broken Source link found in a story document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Story path relative to the repository root, using '/' as separator
    pub story: String,

    /// 1-indexed line of the `[Source: ...]` occurrence
    pub line: u32,

    /// The offending reference (`file` or `file#anchor`)
    pub reference: String,

    pub kind: IssueKind,
}

impl Issue {
    pub fn missing_file(story: impl Into<String>, line: u32, file_ref: &str) -> Self {
        Self {
            story: story.into(),
            line,
            reference: file_ref.to_string(),
            kind: IssueKind::MissingFile,
        }
    }

    pub fn missing_anchor(story: impl Into<String>, line: u32, file_ref: &str, anchor: &str) -> Self {
        Self {
            story: story.into(),
            line,
            reference: format!("{}#{}", file_ref, anchor),
            kind: IssueKind::MissingAnchor,
        }
    }
}

/// Outcome of a validation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Issues in story order, then document order
    pub issues: Vec<Issue>,

    pub stories_scanned: usize,
    pub links_checked: usize,

    /// Number of target documents whose headings were indexed
    pub indexes_built: usize,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Rewrite outcome for one story document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRewrite {
    /// Story path relative to the repository root
    pub path: String,

    /// Number of rules whose `old` text was present
    pub applied: usize,

    /// Whether the text differs from the original
    pub changed: bool,

    pub dry_run: bool,
}

/// Outcome of a rewrite run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteReport {
    /// Stories with at least one applied rule, in filename order
    pub files: Vec<StoryRewrite>,

    pub total_applied: usize,
    pub dry_run: bool,
}

impl RewriteReport {
    pub fn push(&mut self, rewrite: StoryRewrite) {
        self.total_applied += rewrite.applied;
        self.files.push(rewrite);
    }
}
