use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::YamlsubError;

/// Selects which YAML engine decodes the rewritten document.
///
/// Substitution semantics are identical for both; only the downstream
/// deserializer changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YamlParser {
    /// serde_yaml, the default.
    #[default]
    Classic,
    /// serde_norway, the maintained fork of the same parser.
    Norway,
}

impl FromStr for YamlParser {
    type Err = YamlsubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "classic" => Ok(YamlParser::Classic),
            "norway" => Ok(YamlParser::Norway),
            other => Err(YamlsubError::InvalidParser(other.to_string())),
        }
    }
}

impl fmt::Display for YamlParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlParser::Classic => write!(f, "classic"),
            YamlParser::Norway => write!(f, "norway"),
        }
    }
}

/// Per-call configuration for substitution and decoding.
///
/// Constructed once per decode or unmarshal call and read-only afterwards.
/// The variable table is owned by the caller and may be empty.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Substitution table, placeholder name to replacement text.
    pub variables: HashMap<String, String>,

    /// Which YAML engine handles the rewritten document.
    pub parser: YamlParser,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole substitution table.
    pub fn with_variables(mut self, variables: HashMap<String, String>) -> Self {
        self.variables = variables;
        self
    }

    /// Add a single substitution.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn with_parser(mut self, parser: YamlParser) -> Self {
        self.parser = parser;
        self
    }
}
