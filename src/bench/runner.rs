//! Sequential scenario execution.

use super::error::ScenarioError;
use super::result::{BenchReport, Measurement};
use super::scenario::{Scenario, TimingMode};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Registers named scenarios and executes them strictly in registration
/// order, timing only each scenario's timed phase with a monotonic clock.
///
/// Duplicate labels are allowed and produce distinct measurements in
/// registration order. One scenario's failure never aborts the run.
pub struct BenchmarkRunner {
    suite_name: String,
    description: Option<String>,
    iterations: u64,
    scenarios: Vec<Scenario>,
}

impl BenchmarkRunner {
    /// Create a runner with the given default per-scenario iteration count.
    /// Individual scenarios may override it with
    /// [`Scenario::with_iterations`].
    #[must_use]
    pub fn new(suite_name: impl Into<String>, iterations: u64) -> Self {
        Self {
            suite_name: suite_name.into(),
            description: None,
            iterations,
            scenarios: Vec::new(),
        }
    }

    /// Attach a workload description carried into the report.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a scenario. Registration order is execution and reporting
    /// order.
    pub fn register(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    /// Number of registered scenarios.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Default iterations per scenario.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Execute all scenarios sequentially, producing exactly one measurement
    /// per registered scenario, in registration order. Consumes the runner;
    /// scenarios are dropped as their measurements are recorded.
    #[must_use]
    pub fn execute(mut self) -> BenchReport {
        let mut report = BenchReport::new(&self.suite_name, self.iterations);
        report.description = self.description.take();

        for mut scenario in self.scenarios {
            let label = scenario.label().to_string();
            let mode = scenario.mode();
            let iterations = scenario.iterations().unwrap_or(self.iterations);
            info!(scenario = %label, %mode, iterations, "running scenario");

            if let Err(e) = scenario.run_setup() {
                let measurement = if e.is_unavailable() {
                    warn!(scenario = %label, error = %e, "scenario skipped");
                    Measurement::skipped(&label, mode, e.to_string())
                } else {
                    error!(scenario = %label, error = %e, "setup failed");
                    Measurement::failed(&label, mode, 0, Duration::ZERO, e.to_string())
                };
                report.add(measurement);
                continue;
            }

            report.add(run_iterations(&mut scenario, iterations, &label, mode));
        }

        report
    }
}

/// Run the timed phase for the configured iteration count, stopping early on
/// the first error or panic.
fn run_iterations(
    scenario: &mut Scenario,
    iterations: u64,
    label: &str,
    mode: TimingMode,
) -> Measurement {
    let mut total = Duration::ZERO;
    for i in 0..iterations {
        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| scenario.run_timed()));
        let elapsed = start.elapsed();

        match outcome {
            Ok(Ok(())) => total += elapsed,
            Ok(Err(e)) if e.is_unavailable() => {
                warn!(scenario = %label, error = %e, "scenario skipped");
                return Measurement::skipped(label, mode, e.to_string());
            }
            Ok(Err(e)) => {
                error!(scenario = %label, iteration = i, error = %e, "timed phase failed");
                return Measurement::failed(label, mode, i, total, e.to_string());
            }
            Err(payload) => {
                let e = ScenarioError::Panicked(panic_message(payload.as_ref()));
                error!(scenario = %label, iteration = i, error = %e, "timed phase panicked");
                return Measurement::failed(label, mode, i, total, e.to_string());
            }
        }
    }

    info!(
        scenario = %label,
        iterations,
        total_ns = total.as_nanos() as u64,
        "scenario complete"
    );
    Measurement::completed(label, mode, iterations, total)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
