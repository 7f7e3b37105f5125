//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading the movie dataset.
///
/// All variants are fatal to loading; the binary maps them to a nonzero
/// exit code.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Dataset file does not exist
    #[error("dataset file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contains no header row
    #[error("dataset file is empty: {path}")]
    EmptyFile { path: String },

    /// Header lacks a required column
    #[error("header has no {column} column")]
    MissingColumn { column: &'static str },

    /// A data row couldn't be parsed
    #[error("bad row at line {line}: {reason}")]
    Format { line: usize, reason: String },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, LoadError>;
