//! Heading slug generation
//!
//! Mirrors the anchor ids GitHub-style renderers assign to markdown headings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dash variants that separate words
const DASHES: [char; 3] = ['\u{2014}', '\u{2013}', '\u{2212}'];

/// Curly quotes are dropped without leaving a gap
const CURLY_QUOTES: [char; 4] = ['\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

const BRACKETS: [char; 6] = ['(', ')', '[', ']', '{', '}'];

/// Anything other than letters, digits, underscore, whitespace or '-'.
/// Combining marks count as separators.
static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s-]").expect("Invalid PUNCT_RE regex"));

static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Invalid SPACE_RE regex"));

static HYPHENS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{2,}").expect("Invalid HYPHENS_RE regex"));

/// Convert a heading title into its base anchor slug.
///
/// Never fails; titles made only of punctuation produce an empty slug.
pub fn slugify(title: &str) -> String {
    let text: String = title
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !CURLY_QUOTES.contains(c) && !BRACKETS.contains(c))
        .map(|c| if DASHES.contains(&c) { ' ' } else { c })
        .collect();

    let text = PUNCT_RE.replace_all(&text, " ");
    let text = SPACE_RE.replace_all(&text, "-");
    let text = HYPHENS_RE.replace_all(&text, "-");

    text.trim_matches('-').to_string()
}
