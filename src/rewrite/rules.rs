//! Rewrite rule loading
//!
//! Rules live in a JSON array: `[{"old": "...", "new": "..."}, ...]`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::core::error::ConfigError;

/// Default location of the rule file
pub const DEFAULT_REWRITES_FILE: &str = "utils/story_link_rewrites.json";

/// A literal substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub old: String,
    pub new: String,
}

/// Load and validate rules from `path`, preserving their order
pub fn load_rules(path: &Path) -> Result<Vec<RewriteRule>> {
    if !path.exists() {
        return Err(ConfigError::RewritesFileNotFound(path.to_path_buf()).into());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rules = parse_rules(&text, path)?;

    tracing::debug!(path = %path.display(), rules = rules.len(), "loaded rewrite rules");
    Ok(rules)
}

/// Parse rule JSON; `path` is only used in error messages
pub fn parse_rules(text: &str, path: &Path) -> Result<Vec<RewriteRule>, ConfigError> {
    let value: Value = serde_json::from_str(text).map_err(|source| ConfigError::RewritesParse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(entries) = value else {
        return Err(ConfigError::RewritesNotList(path.to_path_buf()));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let malformed = || ConfigError::MalformedRewrite {
                index,
                entry: entry.to_string(),
            };
            let rule: RewriteRule = serde_json::from_value(entry.clone()).map_err(|_| malformed())?;
            if rule.old.is_empty() {
                return Err(malformed());
            }
            Ok(rule)
        })
        .collect()
}
