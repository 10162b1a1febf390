//! Command-line interface.

use crate::config::{validate, ConfigLoader, ConfigResult, HarnessConfig, ReportFormat};
use clap::Parser;
use std::path::PathBuf;

/// Synthetic route-matching benchmark harness.
#[derive(Debug, Parser)]
#[command(name = "route-bench", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Timed iterations per scenario.
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Number of generated routes.
    #[arg(long)]
    pub routes: Option<usize>,

    /// Parameter segments per route.
    #[arg(long)]
    pub args: Option<usize>,

    /// Fixed RNG seed for a reproducible corpus.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report output format.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration: the file (or defaults) overlaid
    /// with command-line flags, then validated.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file cannot be loaded or the
    /// resolved values fail validation.
    pub fn resolve_config(&self) -> ConfigResult<HarnessConfig> {
        let loader = ConfigLoader::new();
        let mut config = match &self.config {
            Some(path) => loader.load(path)?,
            None => HarnessConfig::default(),
        };

        if let Some(iterations) = self.iterations {
            config.workload.iterations = iterations;
        }
        if let Some(routes) = self.routes {
            config.workload.routes = routes;
        }
        if let Some(args) = self.args {
            config.workload.args = args;
        }
        if let Some(seed) = self.seed {
            config.workload.seed = Some(seed);
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(output) = &self.output {
            config.report.output = Some(output.clone());
        }

        validate(&config)?;
        Ok(config)
    }
}
