use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YamlsubError {
    // Substitution errors
    #[error("no variable substitution defined for \"{name}\"")]
    MissingVariable { name: String },

    #[error("writing substituted line: channel closed by reader")]
    PipeClosed,

    // Decode errors
    #[error("decoding yaml: {0}")]
    Decode(String),

    // Configuration errors
    #[error("invalid yaml parser \"{0}\" (expected \"classic\" or \"norway\")")]
    InvalidParser(String),

    // IO errors
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid utf-8: {0}")]
    Utf8(#[from] Utf8Error),

    // Aggregate of everything collected over one call
    #[error("{}", join_messages(.0))]
    Multiple(Vec<YamlsubError>),
}

impl YamlsubError {
    /// Collapse an accumulated error list into a single result: `Ok` for an
    /// empty list, the sole error for a singleton, `Multiple` otherwise.
    pub(crate) fn join(mut errors: Vec<YamlsubError>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(YamlsubError::Multiple(errors)),
        }
    }

    /// Iterate the individual errors, flattening one joined level.
    pub fn iter(&self) -> impl Iterator<Item = &YamlsubError> {
        let (single, many) = match self {
            YamlsubError::Multiple(errors) => (None, Some(errors.iter())),
            other => (Some(other), None),
        };
        single.into_iter().chain(many.into_iter().flatten())
    }

    /// Names of all unresolved placeholders carried by this error.
    pub fn missing_variables(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|err| match err {
                YamlsubError::MissingVariable { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl From<serde_yaml::Error> for YamlsubError {
    fn from(err: serde_yaml::Error) -> Self {
        YamlsubError::Decode(err.to_string())
    }
}

impl From<serde_norway::Error> for YamlsubError {
    fn from(err: serde_norway::Error) -> Self {
        YamlsubError::Decode(err.to_string())
    }
}

fn join_messages(errors: &[YamlsubError]) -> String {
    errors
        .iter()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, YamlsubError>;
