//! Benchmark scenario registration, execution, and reporting.
//!
//! Scenarios run strictly sequentially in registration order on a single
//! thread; only each scenario's timed phase counts toward its measurement.
//! A failing or unavailable scenario is recorded in its measurement and
//! never aborts the run.

pub mod error;
pub mod printer;
pub mod result;
pub mod runner;
pub mod scenario;

pub use error::{ScenarioError, ScenarioResult};
pub use printer::{JsonPrinter, MarkdownPrinter, ResultPrinter, TablePrinter};
pub use result::{BenchReport, Measurement, Outcome};
pub use runner::BenchmarkRunner;
pub use scenario::{Scenario, TimingMode};
