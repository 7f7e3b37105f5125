//! Error types for the reports crate.

use thiserror::Error;

/// A report filter matched no records.
///
/// Not fatal: the caller prints the message and the process still exits 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("No movies found for year {0}")]
    NoMoviesForYear(u16),

    #[error("No movies found for genre '{0}'")]
    NoMoviesForGenre(String),
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, ReportError>;
