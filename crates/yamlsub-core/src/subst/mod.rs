//! Substitution module - `${NAME}` placeholder rewriting
//!
//! Rewrites line-oriented text by replacing `${NAME}` placeholders with
//! values from a caller-supplied table before the text reaches the YAML
//! engine.
//!
//! ## Philosophy
//!
//! - **Pure text substitution**: placeholders are found and replaced
//!   independent of the surrounding YAML syntax
//! - **Never fail fast**: every occurrence on every line is attempted and
//!   misses accumulate until the whole input has been processed
//! - **Exact line framing**: output is byte-faithful except for substituted
//!   spans, and every line leaves newline-terminated
//!
//! ## Syntax
//!
//! - `${NAME}` or `${ NAME }` (inner spaces optional)
//! - Names match `[A-Za-z0-9_-]+` and are case-sensitive
//! - `$NAME` and `{NAME}` are plain text, not placeholders

pub(crate) mod extract;
pub(crate) mod rewrite;
pub(crate) mod stream;

#[cfg(test)]
mod tests;
