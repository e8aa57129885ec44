//! Shared test helpers for substitution tests

use std::collections::HashMap;

/// Build a variable table from name/value pairs.
pub(super) fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
