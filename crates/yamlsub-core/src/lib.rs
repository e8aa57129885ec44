// Core modules
pub mod decode;
pub mod error;
pub mod options;

mod subst;

// Re-export commonly used types
pub use decode::{from_slice, from_str, Decoder};
pub use error::{Result, YamlsubError};
pub use options::{Options, YamlParser};
