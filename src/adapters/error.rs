//! Adapter boundary error types.

use thiserror::Error;

/// Errors crossing the router-adapter boundary.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The underlying router library cannot be loaded. Scenarios over this
    /// adapter are skipped, not failed.
    #[error("router unavailable: {0}")]
    Unavailable(String),

    /// Building the lookup structure failed.
    #[error("build failed: {0}")]
    Build(String),

    /// A lookup failed outright. A clean miss is not an error; adapters
    /// report it as a not-found outcome.
    #[error("lookup failed: {0}")]
    Lookup(String),
}
