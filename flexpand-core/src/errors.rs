//! errors.rs - Custom error types for the flexpand-core library.
//!
//! Only fatal configuration problems are errors. Per-item problems (a missing
//! path, a directory under the files-only policy, a path removed by the regex
//! filter) are logged and skipped, never returned through this type.
//!
//! License: MIT

use std::path::PathBuf;
use thiserror::Error;

/// All fatal error conditions raised by `flexpand-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FlexpandError {
    #[error("Failed to read list-file '{}': {source}", path.display())]
    ListFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Inconsistent input and output filenames: {inputs} input(s) but {outputs} output(s)")]
    LengthMismatch { inputs: usize, outputs: usize },

    #[error("Configured unknown output specification '{0}'. Please check and reconfigure")]
    UnrecognizedOutput(String),

    #[error("Failed to compile regular expression '{0}': {1}")]
    InvalidPattern(String, regex::Error),

    #[error("Invalid value for option '{key}': {message}")]
    Config { key: String, message: String },

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
