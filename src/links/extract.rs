//! Source link extraction
//!
//! Finds `[Source: path/to/file.md#anchor]` references in story documents.

use once_cell::sync::Lazy;
use regex::Regex;

/// Static regex for Source references
/// Format: [Source: <payload without ']'>]
pub static SOURCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Source: ([^\]]+)\]").expect("Invalid SOURCE_RE regex"));

/// Payloads under this prefix are never validated
pub const SKIPPED_PREFIX: &str = "move/";

/// A reference from a story to a file and optional heading anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryLink {
    /// Path relative to the repository root
    pub file_ref: String,

    /// Heading anchor; `None` when absent or empty
    pub anchor: Option<String>,

    /// 1-indexed line where the reference starts
    pub line: u32,
}

impl StoryLink {
    /// Split a payload at its first '#'
    pub fn from_payload(payload: &str, line: u32) -> Self {
        let (file_ref, anchor) = match payload.split_once('#') {
            Some((file, anchor)) => (file.trim(), anchor.trim()),
            None => (payload.trim(), ""),
        };

        Self {
            file_ref: file_ref.to_string(),
            anchor: (!anchor.is_empty()).then(|| anchor.to_string()),
            line,
        }
    }
}

/// Extract links in document order, duplicates included
pub fn extract_links(content: &str) -> Vec<StoryLink> {
    let mut links = Vec::new();
    let mut line = 1u32;
    let mut scanned = 0usize;

    for caps in SOURCE_RE.captures_iter(content) {
        let (Some(whole), Some(payload)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        line += content[scanned..whole.start()].matches('\n').count() as u32;
        scanned = whole.start();

        if payload.as_str().starts_with(SKIPPED_PREFIX) {
            continue;
        }

        links.push(StoryLink::from_payload(payload.as_str(), line));
    }

    links
}
