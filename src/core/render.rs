//! Renderer module
//!
//! Renders validation and rewrite reports to text, jsonl or json

use colored::Colorize;
use serde::Serialize;

use crate::core::model::{IssueKind, RewriteReport, ValidationReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the outcome of `check`
    pub fn render_validation(&self, report: &ValidationReport) -> String {
        match self.config.format {
            OutputFormat::Text => render_validation_text(report),
            OutputFormat::Jsonl => self.render_lines(&report.issues),
            OutputFormat::Json => self.render_value(report),
        }
    }

    /// Render the outcome of `fix`
    pub fn render_rewrite(&self, report: &RewriteReport) -> String {
        match self.config.format {
            OutputFormat::Text => render_rewrite_text(report),
            OutputFormat::Jsonl => self.render_lines(&report.files),
            OutputFormat::Json => self.render_value(report),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_lines<T: Serialize>(&self, items: &[T]) -> String {
        items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON object
    fn render_value<T: Serialize>(&self, value: &T) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}

fn render_validation_text(report: &ValidationReport) -> String {
    if report.is_clean() {
        return "All Source links validated successfully."
            .green()
            .to_string();
    }

    let mut output = String::from("Found potential issues:");
    for issue in &report.issues {
        let kind = match issue.kind {
            IssueKind::MissingFile => issue.kind.as_str().red(),
            IssueKind::MissingAnchor => issue.kind.as_str().yellow(),
        };
        output.push_str(&format!(
            "\n - {}:{}: {}: {}",
            issue.story, issue.line, kind, issue.reference
        ));
    }
    output
}

fn render_rewrite_text(report: &RewriteReport) -> String {
    let mut lines = Vec::new();

    for file in &report.files {
        if file.dry_run {
            lines.push(format!(
                "{} {}: {} replacements",
                "[dry-run]".cyan(),
                file.path,
                file.applied
            ));
        } else {
            lines.push(format!("{}: {} replacements applied", file.path, file.applied));
        }
    }

    if report.total_applied == 0 {
        lines.push("No replacements matched.".to_string());
    } else {
        lines.push(format!(
            "Total replacements applied: {}",
            report.total_applied
        ));
    }

    lines.join("\n")
}
