//! Advisory quality checks over normalized Markdown.
//!
//! The checks are deliberately coarse and non-authoritative: they can
//! over-flag (legitimate `<` and `>` in prose) and under-flag (fences
//! using single or triple backticks). A failing check never blocks output;
//! callers log the issues and persist anyway. Keep the behavior stable
//! rather than strengthening it silently.

use serde::{Deserialize, Serialize};

/// Verdict and ordered issue list for one Markdown document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` iff no checks flagged an issue.
    pub valid: bool,
    /// Human-readable issues, in the order the checks ran.
    pub issues: Vec<String>,
}

/// Run the heuristic quality checks. Never fails, never modifies input.
pub fn validate(markdown: &str) -> ValidationReport {
    let mut issues = Vec::new();

    // HTML remnants the extractor failed to strip.
    if markdown.contains('<') && markdown.contains('>') {
        issues.push("HTML tags detected".to_string());
    }

    // Markdown links with an empty target.
    if markdown.contains('[') && markdown.contains("]()") {
        issues.push("Empty link detected".to_string());
    }

    // Parity check on double-backtick occurrences.
    if markdown.matches("``").count() % 2 != 0 {
        issues.push("Unclosed code block".to_string());
    }

    ValidationReport {
        valid: issues.is_empty(),
        issues,
    }
}
