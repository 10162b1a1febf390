//! Configuration type definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Workload sizing.
    pub workload: WorkloadConfig,

    /// Report output selection.
    pub report: ReportConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Workload sizing. Defaults mirror the standard run: 1000 iterations over
/// 1000 routes with 9 arguments each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Timed iterations per scenario.
    pub iterations: u64,

    /// Number of generated routes.
    pub routes: usize,

    /// Parameter segments per route.
    pub args: usize,

    /// Optional fixed RNG seed for a reproducible corpus.
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            routes: 1000,
            args: 9,
            seed: None,
        }
    }
}

/// Report output selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format.
    pub format: ReportFormat,

    /// Write the report here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Supported report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Markdown pipe table.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
