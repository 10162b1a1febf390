//! Scenario execution error types.

use crate::adapters::AdapterError;
use thiserror::Error;

/// Result type for scenario setup and timed phases.
pub type ScenarioResult = Result<(), ScenarioError>;

/// Errors surfaced by a scenario's setup or timed phase. None of these abort
/// the run; the runner records them in the scenario's measurement and moves
/// on.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The router under test is not available at all.
    #[error("adapter unavailable: {0}")]
    Unavailable(String),

    /// The adapter failed while building or matching.
    #[error("adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// The lookup produced a different outcome than the probe requires.
    #[error("unexpected outcome for '{path}': {detail}")]
    Expectation {
        /// The probe path that was looked up.
        path: String,
        /// What went wrong.
        detail: String,
    },

    /// The timed phase panicked.
    #[error("scenario panicked: {0}")]
    Panicked(String),
}

impl ScenarioError {
    /// True when the underlying router could not be loaded at all, in which
    /// case the scenario is skipped rather than failed.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable(_) | Self::Adapter(AdapterError::Unavailable(_))
        )
    }
}
