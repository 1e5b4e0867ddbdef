//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::paths::resolve_root;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::rewrite::rules::DEFAULT_REWRITES_FILE;

/// storylinks - validate and rewrite Source links in story documents.
#[derive(Parser, Debug)]
#[command(name = "storylinks")]
#[command(
    author,
    version,
    about,
    long_about = r#"storylinks maintains the [Source: path#anchor] references embedded in
story markdown files (docs/stories/*.story.md by default).

Commands:
- check: verify every referenced file exists and every anchor matches a heading
- fix: apply literal {old,new} rewrite rules from a JSON file

Examples:
    storylinks check
    storylinks check --stories-dir docs/stories --repo-root ../project
    storylinks fix --dry-run
    storylinks fix --rewrites-file utils/story_link_rewrites.json
"#
)]
pub struct Cli {
    /// Repository root for resolving relative paths.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "DIR",
        env = "STORYLINKS_REPO_ROOT",
        long_help = "Repository root (defaults to the current directory).\n\n\
Source link file references and --stories-dir are resolved against it, and\n\
reported story paths are relative to it."
    )]
    pub repo_root: PathBuf,

    /// Directory containing story markdown files.
    #[arg(
        long,
        global = true,
        default_value = "docs/stories",
        value_name = "DIR",
        env = "STORYLINKS_STORIES_DIR",
        long_help = "Directory containing *.story.md files, relative to --repo-root.\n\n\
Only files directly inside it are considered; subdirectories are not searched."
    )]
    pub stories_dir: PathBuf,

    /// Output format (text/jsonl/json).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): human-readable report\n\
- jsonl: one JSON object per issue or rewritten story\n\
- json: a single JSON report object"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr (story enumeration, anchor index\n\
builds, rule loading). STORYLINKS_LOG overrides the filter entirely."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate Source links and heading anchors.
    #[command(
        long_about = "Check every [Source: file#anchor] reference in the story documents.\n\n\
A reference whose file does not exist is reported as missing_file. A reference\n\
whose anchor matches no heading in the target file is reported as\n\
missing_anchor. References under move/ are skipped.\n\n\
Issues are reported but do not change the exit status unless --fail-on-issues\n\
is given.\n\n\
Examples:\n\
  storylinks check\n\
  storylinks check --format jsonl --fail-on-issues\n"
    )]
    Check {
        /// Exit with status 1 when any issue is found.
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// Apply rewrite rules to story documents.
    #[command(
        long_about = "Apply an ordered list of literal {\"old\",\"new\"} substitutions to every\n\
story document. Each rule replaces all occurrences of its old text, and later\n\
rules see the output of earlier ones.\n\n\
Examples:\n\
  storylinks fix --dry-run\n\
  storylinks fix --rewrites-file utils/story_link_rewrites.json\n"
    )]
    Fix {
        /// JSON file describing link rewrites.
        #[arg(
            long,
            default_value = DEFAULT_REWRITES_FILE,
            value_name = "FILE",
            env = "STORYLINKS_REWRITES_FILE",
            long_help = "JSON file holding a list of {\"old\": ..., \"new\": ...} objects.\n\n\
Relative paths are resolved against the current directory."
        )]
        rewrites_file: PathBuf,

        /// Show matches without modifying files.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    crate::logging::init(cli.verbose, cli.quiet, !cli.no_color);

    let format: OutputFormat = cli.format.parse().map_err(anyhow::Error::msg)?;
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let root = resolve_root(&cli.repo_root);

    match cli.command {
        Commands::Check { fail_on_issues } => crate::links::validate::run_check(
            &root,
            &cli.stories_dir,
            fail_on_issues,
            render_config,
        ),

        Commands::Fix {
            rewrites_file,
            dry_run,
        } => crate::rewrite::apply::run_fix(
            &root,
            &cli.stories_dir,
            &rewrites_file,
            dry_run,
            render_config,
        ),
    }
}
