//! Error types for concord.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for concord operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for concord operations.
///
/// Every variant is fatal for a run of the tool; the binary prints the
/// message and exits with a failure status.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid invocation or option value.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A corpus file could not be opened.
    #[error("Cannot open {}: {source}", .path.display())]
    FileOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// A line does not match `<id>,<label>`.
    #[error("Parse error at {source_name}:{line}: expected `<id>,<label>`, got {content:?}")]
    Parse {
        /// Corpus source (usually the file path)
        source_name: String,
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// An id of the reference corpus is absent from the comparison corpus.
    #[error("Lookup error: id {id} not found in {source_name}")]
    MissingId {
        /// Tweet id that was looked up
        id: String,
        /// Corpus the id was looked up in
        source_name: String,
    },

    /// A label token is not one of `pos`, `neu`, `neg`, `irr`.
    #[error("Lookup error: unknown label {label:?} for id {id}")]
    UnknownLabel {
        /// Tweet id carrying the label
        id: String,
        /// The unrecognized token
        label: String,
    },

    /// Division by zero while deriving a metric.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Reading an already opened corpus failed.
    #[error("Read error at {source_name}:{line}: {source}")]
    Read {
        /// Corpus source (usually the file path)
        source_name: String,
        /// 1-based number of the line being read
        line: usize,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid argument error.
    pub fn argument(msg: impl Into<String>) -> Self {
        Error::Argument(msg.into())
    }

    /// Create an arithmetic error.
    pub fn arithmetic(msg: impl Into<String>) -> Self {
        Error::Arithmetic(msg.into())
    }

    /// Create a config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True for both kinds of failed matrix lookup.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Error::MissingId { .. } | Error::UnknownLabel { .. })
    }
}
