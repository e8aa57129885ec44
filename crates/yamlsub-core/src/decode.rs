//! Decode facade over the substitution pipeline
//!
//! Presents the familiar serde-YAML surface (`from_str`, `from_slice`, a
//! `Decoder` over any reader) with `${NAME}` substitution applied to the
//! text before it reaches the YAML engine.

use std::io::{BufReader, Read};

use serde::de::DeserializeOwned;

use crate::error::{Result, YamlsubError};
use crate::options::{Options, YamlParser};
use crate::subst::rewrite::rewrite_buffer;
use crate::subst::stream::with_rewritten_stream;

/// Streaming YAML decoder with variable substitution.
///
/// Rewriting runs on a producer thread while the YAML engine consumes, so
/// decoding starts before the whole input has been rewritten.
pub struct Decoder<R> {
    source: BufReader<R>,
    options: Options,
}

impl<R: Read> Decoder<R> {
    /// Wrap a reader with default options: empty table, classic parser.
    pub fn new(source: R) -> Self {
        Self::with_options(source, Options::default())
    }

    pub fn with_options(source: R, options: Options) -> Self {
        Self {
            source: BufReader::new(source),
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl<R: Read + Send> Decoder<R> {
    /// Decode one document into `target`.
    ///
    /// On success `target` holds the decoded value; when the YAML engine
    /// fails, `target` keeps its previous contents. Substitution misses do
    /// not stop the rewrite: the engine still sees the full document with
    /// unresolved spans left verbatim, and the misses come back in the
    /// returned error joined with any pipe or decode error. The call can
    /// therefore populate `target` and still return `Err` when variables
    /// were incomplete.
    ///
    /// There is no cancellation path: a consumer that never drains the
    /// document blocks the producer forever.
    pub fn decode<T>(self, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
    {
        let Decoder { source, options } = self;
        let (decoded, mut errors) =
            with_rewritten_stream(source, &options.variables, |reader| match options.parser {
                YamlParser::Classic => {
                    serde_yaml::from_reader::<_, T>(reader).map_err(YamlsubError::from)
                }
                YamlParser::Norway => {
                    serde_norway::from_reader::<_, T>(reader).map_err(YamlsubError::from)
                }
            });

        match decoded {
            Ok(value) => *target = value,
            Err(err) => errors.push(err),
        }

        YamlsubError::join(errors)
    }
}

/// Rewrite the whole input eagerly, then decode it once.
///
/// If any placeholder is unresolved the decode step never runs and the
/// joined substitution errors are returned instead.
pub fn from_str<T>(input: &str, options: &Options) -> Result<T>
where
    T: DeserializeOwned,
{
    let (rewritten, errors) = rewrite_buffer(input, &options.variables);
    YamlsubError::join(errors)?;

    match options.parser {
        YamlParser::Classic => Ok(serde_yaml::from_str(&rewritten)?),
        YamlParser::Norway => Ok(serde_norway::from_str(&rewritten)?),
    }
}

/// [`from_str`] over raw bytes; the input must be UTF-8 text.
pub fn from_slice<T>(input: &[u8], options: &Options) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str(std::str::from_utf8(input)?, options)
}
