//! Error handling for yaml-readme.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting records and rendering the document.
///
/// The loader treats the per-file variants (`IoError`, `YamlError`, `JsonError`,
/// `InvalidDocument`) as recoverable: it logs them and skips the file. A
/// `PatternError` is logged and the run continues with no files. Template
/// errors abort the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A data file could not be parsed as YAML
    #[error("failed to parse file [{}] as a YAML, error: {source}", path.display())]
    YamlError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A data file could not be parsed as JSON
    #[error("failed to parse file [{}] as a JSON, error: {source}", path.display())]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A data file parsed, but its root is not a mapping
    #[error("file [{}] does not contain a mapping, found {kind}", path.display())]
    InvalidDocument { path: PathBuf, kind: &'static str },

    /// The input glob pattern is malformed
    #[error("Invalid pattern '{pattern}': {source}.")]
    PatternError {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Directory traversal failed while resolving the input pattern
    #[error("Failed to walk input directory: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// The template text is not valid template syntax
    #[error("Template parse error: {0}.")]
    TemplateParseError(#[source] minijinja::Error),

    /// The template failed while being executed against the data
    #[error("Template render error: {0}.")]
    TemplateRenderError(#[source] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
