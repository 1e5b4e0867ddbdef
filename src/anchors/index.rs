//! Heading anchor index
//!
//! Scans markdown heading lines in document order and assigns each one the
//! anchor a GitHub-style renderer would: the first use of a base slug is left
//! unsuffixed, the Kth repeat becomes `slug-K`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::anchors::slug::slugify;

/// Static regex for ATX heading lines
/// Format: 1-6 '#' characters, whitespace, title
pub static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid HEADING_RE regex"));

/// A heading line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1-6
    pub level: u8,
    pub title: String,
    /// 1-indexed
    pub line: u32,
}

/// Parse heading lines in document order.
///
/// Fenced code blocks are not special-cased: a `# comment` inside one counts.
pub fn parse_headings(content: &str) -> Vec<Heading> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let caps = HEADING_RE.captures(line)?;
            Some(Heading {
                level: caps[1].len() as u8,
                title: caps[2].to_string(),
                line: idx as u32 + 1,
            })
        })
        .collect()
}

/// Anchors available in one markdown document
#[derive(Debug, Clone, Default)]
pub struct AnchorIndex {
    /// anchor -> number of headings that resolved to it
    anchors: HashMap<String, usize>,
}

impl AnchorIndex {
    /// Build the index from a document's full text
    pub fn from_markdown(content: &str) -> Self {
        Self::from_headings(&parse_headings(content))
    }

    pub fn from_headings(headings: &[Heading]) -> Self {
        let mut repeats: HashMap<String, usize> = HashMap::new();
        let mut anchors: HashMap<String, usize> = HashMap::new();

        for heading in headings {
            let base = slugify(&heading.title);

            // Keyed by base slug only: "Intro 1" after two "Intro"s lands on
            // the same anchor as the first repeat.
            let anchor = match repeats.get_mut(&base) {
                Some(count) => {
                    *count += 1;
                    format!("{}-{}", base, count)
                }
                None => {
                    repeats.insert(base.clone(), 0);
                    base
                }
            };

            tracing::trace!(
                line = heading.line,
                level = heading.level,
                anchor = %anchor,
                "heading anchor"
            );
            *anchors.entry(anchor).or_insert(0) += 1;
        }

        Self { anchors }
    }

    pub fn contains(&self, anchor: &str) -> bool {
        self.anchors.contains_key(anchor)
    }

    /// How many headings resolved to `anchor` (0 when absent)
    #[cfg(test)]
    pub fn count(&self, anchor: &str) -> usize {
        self.anchors.get(anchor).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anchors in sorted order
    pub fn anchors(&self) -> Vec<&str> {
        let mut anchors: Vec<&str> = self.anchors.keys().map(String::as_str).collect();
        anchors.sort_unstable();
        anchors
    }
}
