//! Corpus generation error types.

use thiserror::Error;

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Errors produced while generating a benchmark corpus. These are fatal:
/// a corpus that cannot be generated aborts the run before any scenario.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    /// The requested route count was zero.
    #[error("route count must be at least 1")]
    InvalidRouteCount,
}
