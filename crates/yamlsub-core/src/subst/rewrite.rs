//! Line substitution and whole-buffer rewriting

use std::collections::HashMap;

use crate::error::YamlsubError;
use crate::subst::extract::{extract_occurrences, Occurrence};

/// Apply the occurrences found on `line` against the variable table.
///
/// Resolvable occurrences replace the first remaining instance of their
/// matched text, so repeated identical placeholders each consume one match
/// in left-to-right order. Unresolved occurrences stay verbatim in the line
/// and are reported; every occurrence is attempted.
pub(crate) fn substitute_line(
    line: &str,
    variables: &HashMap<String, String>,
    occurrences: &[Occurrence],
) -> (String, Vec<YamlsubError>) {
    let mut rewritten = line.to_string();
    let mut errors = Vec::new();

    for occurrence in occurrences {
        match variables.get(&occurrence.name) {
            Some(value) => {
                rewritten = rewritten.replacen(&occurrence.matched_text, value, 1);
            }
            None => errors.push(YamlsubError::MissingVariable {
                name: occurrence.name.clone(),
            }),
        }
    }

    (rewritten, errors)
}

/// Rewrite a whole buffer line by line, aggregating every substitution
/// error instead of stopping at the first miss.
///
/// Output lines are always newline-terminated, including a trailing line
/// that had no final newline in the input.
pub(crate) fn rewrite_buffer(
    input: &str,
    variables: &HashMap<String, String>,
) -> (String, Vec<YamlsubError>) {
    let mut output = String::with_capacity(input.len());
    let mut errors = Vec::new();

    for line in input.lines() {
        let occurrences = extract_occurrences(line);
        let (rewritten, line_errors) = substitute_line(line, variables, &occurrences);
        errors.extend(line_errors);
        output.push_str(&rewritten);
        output.push('\n');
    }

    (output, errors)
}
