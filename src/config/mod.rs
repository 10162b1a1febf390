//! Harness configuration: types, TOML loading, and validation.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::{validate, ConfigLoader};
pub use types::{HarnessConfig, LoggingConfig, ReportConfig, ReportFormat, WorkloadConfig};
