//! Benchmark measurements and reports.

use super::scenario::TimingMode;
use serde::Serialize;
use std::time::Duration;

/// Terminal state of a scenario after execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// All iterations ran to completion.
    Completed,
    /// The setup or timed phase failed; `iteration` is how many iterations
    /// completed before the failure.
    Failed {
        /// Completed iterations before the failure.
        iteration: u64,
        /// The recorded error.
        error: String,
    },
    /// The router under test was unavailable; nothing was timed.
    Skipped {
        /// Why the scenario was skipped.
        reason: String,
    },
}

impl Outcome {
    /// True when every iteration completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// A single scenario measurement. Immutable once recorded.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    /// Scenario label as registered.
    pub label: String,
    /// Timing mode of the scenario.
    pub mode: TimingMode,
    /// Timed iterations that completed.
    pub iterations: u64,
    /// Accumulated timed-phase duration in nanoseconds.
    pub total_time_ns: u64,
    /// Mean timed-phase duration per iteration in nanoseconds.
    pub mean_ns: f64,
    /// Derived throughput in operations per second.
    pub throughput_ops_sec: f64,
    /// Terminal outcome.
    pub outcome: Outcome,
}

impl Measurement {
    /// Record a fully completed scenario.
    #[must_use]
    pub fn completed(label: &str, mode: TimingMode, iterations: u64, total: Duration) -> Self {
        Self::record(label, mode, iterations, total, Outcome::Completed)
    }

    /// Record a scenario that failed after `iteration` completed iterations.
    #[must_use]
    pub fn failed(
        label: &str,
        mode: TimingMode,
        iteration: u64,
        total: Duration,
        error: String,
    ) -> Self {
        Self::record(label, mode, iteration, total, Outcome::Failed { iteration, error })
    }

    /// Record a scenario that was skipped before any timing.
    #[must_use]
    pub fn skipped(label: &str, mode: TimingMode, reason: String) -> Self {
        Self::record(label, mode, 0, Duration::ZERO, Outcome::Skipped { reason })
    }

    fn record(
        label: &str,
        mode: TimingMode,
        iterations: u64,
        total: Duration,
        outcome: Outcome,
    ) -> Self {
        let total_ns = total.as_nanos() as u64;
        let mean_ns = if iterations == 0 {
            0.0
        } else {
            total_ns as f64 / iterations as f64
        };
        let throughput = if total.as_secs_f64() > 0.0 {
            iterations as f64 / total.as_secs_f64()
        } else {
            0.0
        };
        Self {
            label: label.to_string(),
            mode,
            iterations,
            total_time_ns: total_ns,
            mean_ns,
            throughput_ops_sec: throughput,
            outcome,
        }
    }
}

/// Ordered collection of measurements from one harness run.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    /// Suite name.
    pub suite_name: String,
    /// Optional human-readable description of the workload.
    pub description: Option<String>,
    /// RFC 3339 timestamp taken when the run started.
    pub timestamp: String,
    /// Configured iterations per scenario.
    pub iterations: u64,
    /// One measurement per registered scenario, in registration order.
    pub measurements: Vec<Measurement>,
}

impl BenchReport {
    /// Create an empty report.
    #[must_use]
    pub fn new(suite_name: &str, iterations: u64) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            description: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            iterations,
            measurements: Vec::new(),
        }
    }

    /// Append a measurement.
    pub fn add(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Serialize the report to JSON for CI integration.
    ///
    /// Serialization of these derive-only types (strings, integers, floats,
    /// and enums of the same) has no failure path, so the fallback to an
    /// empty string is unreachable in practice.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
