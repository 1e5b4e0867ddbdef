//! Rule application (the `fix` command)

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::error::ConfigError;
use crate::core::model::{RewriteReport, StoryRewrite};
use crate::core::paths::display_path;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::stories::list_stories;
use crate::rewrite::rules::{load_rules, RewriteRule};

/// Apply rules in order to the accumulating text.
///
/// Returns the new text and the number of rules whose `old` text was present
/// when their turn came.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> (String, usize) {
    let mut current = text.to_string();
    let mut applied = 0;

    for rule in rules {
        if current.contains(&rule.old) {
            current = current.replace(&rule.old, &rule.new);
            applied += 1;
        }
    }

    (current, applied)
}

/// Rewrite one story; returns `None` when no rule matched
pub fn rewrite_story(
    story: &Path,
    root: &Path,
    rules: &[RewriteRule],
    dry_run: bool,
) -> Result<Option<StoryRewrite>> {
    let text = fs::read_to_string(story)
        .with_context(|| format!("Failed to read {}", story.display()))?;
    let (new_text, applied) = apply_rules(&text, rules);

    if applied == 0 {
        return Ok(None);
    }

    let changed = new_text != text;
    if changed && !dry_run {
        fs::write(story, &new_text)
            .with_context(|| format!("Failed to write {}", story.display()))?;
        tracing::info!(path = %story.display(), applied, "rewrote story");
    }

    Ok(Some(StoryRewrite {
        path: display_path(story, root),
        applied,
        changed,
        dry_run,
    }))
}

/// Apply rules to every story in `stories_dir`
pub fn rewrite_stories(
    stories_dir: &Path,
    root: &Path,
    rules: &[RewriteRule],
    dry_run: bool,
) -> Result<RewriteReport> {
    let mut report = RewriteReport {
        dry_run,
        ..Default::default()
    };

    for story in list_stories(stories_dir)? {
        if let Some(rewrite) = rewrite_story(&story, root, rules, dry_run)? {
            report.push(rewrite);
        }
    }

    Ok(report)
}

/// Run the fix command
pub fn run_fix(
    root: &Path,
    stories_dir: &Path,
    rewrites_file: &Path,
    dry_run: bool,
    config: RenderConfig,
) -> Result<()> {
    let stories_dir = root.join(stories_dir);
    // Checked before the rules are loaded.
    if !stories_dir.is_dir() {
        return Err(ConfigError::StoriesDirNotFound(stories_dir).into());
    }

    let rules = load_rules(rewrites_file)?;
    let report = rewrite_stories(&stories_dir, root, &rules, dry_run)?;

    let renderer = Renderer::with_config(config);
    let output = renderer.render_rewrite(&report);
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rule(old: &str, new: &str) -> RewriteRule {
        RewriteRule {
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    #[test]
    fn test_all_occurrences_count_once() {
        let (text, applied) = apply_rules("foo foo", &[rule("foo", "bar")]);
        assert_eq!(text, "bar bar");
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_later_rule_sees_earlier_output() {
        let rules = [rule("a.md", "b.md"), rule("b.md#x", "c.md#x")];
        let (text, applied) = apply_rules("[Source: a.md#x]", &rules);
        assert_eq!(text, "[Source: c.md#x]");
        assert_eq!(applied, 2);
    }

    #[test]
    fn test_absent_rule_not_counted() {
        let (text, applied) = apply_rules("nothing here", &[rule("foo", "bar")]);
        assert_eq!(text, "nothing here");
        assert_eq!(applied, 0);
    }

    #[test]
    fn test_rewrite_story_writes_changes() {
        let temp = tempdir().unwrap();
        let story = temp.path().join("1.1.story.md");
        fs::write(&story, "[Source: old.md#a] [Source: old.md#b]").unwrap();

        let rewrite = rewrite_story(&story, temp.path(), &[rule("old.md", "new.md")], false)
            .unwrap()
            .unwrap();
        assert_eq!(rewrite.applied, 1);
        assert!(rewrite.changed);
        assert_eq!(rewrite.path, "1.1.story.md");
        assert_eq!(
            fs::read_to_string(&story).unwrap(),
            "[Source: new.md#a] [Source: new.md#b]"
        );
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let temp = tempdir().unwrap();
        let story = temp.path().join("1.1.story.md");
        fs::write(&story, "foo foo foo").unwrap();

        let rewrite = rewrite_story(&story, temp.path(), &[rule("foo", "bar")], true)
            .unwrap()
            .unwrap();
        assert!(rewrite.dry_run);
        assert!(rewrite.changed);
        assert_eq!(fs::read_to_string(&story).unwrap(), "foo foo foo");
    }

    #[test]
    fn test_identity_rule_counted_but_unchanged() {
        let temp = tempdir().unwrap();
        let story = temp.path().join("1.1.story.md");
        fs::write(&story, "same").unwrap();

        let rewrite = rewrite_story(&story, temp.path(), &[rule("same", "same")], false)
            .unwrap()
            .unwrap();
        assert_eq!(rewrite.applied, 1);
        assert!(!rewrite.changed);
    }

    #[test]
    fn test_run_fix_missing_stories_dir_checked_before_rules() {
        let temp = tempdir().unwrap();
        let err = run_fix(
            temp.path(),
            Path::new("docs/stories"),
            &temp.path().join("missing.json"),
            false,
            RenderConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::StoriesDirNotFound(_))
        ));
    }

    #[test]
    fn test_rewrite_stories_totals() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("1.1.story.md"), "alpha beta").unwrap();
        fs::write(temp.path().join("1.2.story.md"), "gamma").unwrap();
        fs::write(temp.path().join("2.1.story.md"), "alpha").unwrap();
        fs::write(temp.path().join("README.md"), "alpha beta").unwrap();

        let rules = [rule("alpha", "a"), rule("beta", "b")];
        let report = rewrite_stories(temp.path(), temp.path(), &rules, false).unwrap();
        let per_file: Vec<_> = report
            .files
            .iter()
            .map(|f| (f.path.as_str(), f.applied))
            .collect();
        assert_eq!(per_file, vec![("1.1.story.md", 2), ("2.1.story.md", 1)]);
        assert_eq!(report.total_applied, 3);
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "alpha beta"
        );
    }
}
