//! Placeholder extraction

use std::sync::LazyLock;

use regex::Regex;

/// Wire-level placeholder pattern: `${ NAME }` with optional inner
/// whitespace, NAME limited to letters, digits, underscore and hyphen.
/// Other tooling depends on this exact shape.
const VARIABLE_PATTERN: &str = r"\$\{\s*([A-Za-z0-9_-]+)\s*\}";

static VARIABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VARIABLE_PATTERN).expect("placeholder pattern compiles"));

/// One placeholder found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Occurrence {
    /// Identifier between the delimiters, inner whitespace trimmed.
    pub name: String,

    /// Exact matched span, delimiters and whitespace included, so the
    /// substituter can replace it as literal text. Always present verbatim
    /// in the source line at extraction time.
    pub matched_text: String,
}

/// Find every placeholder on a line, left to right. Never fails.
pub(crate) fn extract_occurrences(line: &str) -> Vec<Occurrence> {
    VARIABLE_REGEX
        .captures_iter(line)
        .map(|caps| Occurrence {
            name: caps[1].to_string(),
            matched_text: caps[0].to_string(),
        })
        .collect()
}
