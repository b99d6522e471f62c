//! Whitespace canonicalization for extracted Markdown.
//!
//! Each pass is a function `&str -> String` applied in sequence. The
//! pipeline is idempotent: running it on its own output is a no-op.

use std::sync::LazyLock;

use regex::Regex;

/// Canonicalize whitespace in a Markdown string.
///
/// Guarantees on the output:
/// - no line carries trailing whitespace (leading indentation is semantic
///   in Markdown and preserved)
/// - at most one fully blank line between paragraphs
/// - ends with exactly one newline and no trailing blank lines
pub fn normalize(md: &str) -> String {
    let trimmed = trim_line_ends(md);
    let collapsed = collapse_blank_lines(&trimmed);
    ensure_single_trailing_newline(&collapsed)
}

/// Remove trailing whitespace from every line.
///
/// Runs before the blank-line collapse so that blank lines carrying stray
/// spaces or tabs collapse in the same pass; this is what makes the whole
/// pipeline idempotent.
fn trim_line_ends(md: &str) -> String {
    md.lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse any run of 3 or more newlines to exactly 2.
fn collapse_blank_lines(md: &str) -> String {
    static MULTI_BLANK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

    MULTI_BLANK_RE.replace_all(md, "\n\n").to_string()
}

/// Trim trailing blank lines and terminate with exactly one newline.
fn ensure_single_trailing_newline(md: &str) -> String {
    format!("{}\n", md.trim_end())
}
