//! Named, timed units of benchmark work.

use super::error::ScenarioResult;
use serde::Serialize;
use std::fmt;

/// Whether structure-build cost sits inside or outside the timed phase.
///
/// Warm scenarios build the lookup structure once in an untimed setup phase
/// and time only the lookup; cold scenarios rebuild inside the timed closure
/// on every iteration to capture cold-start cost. The mode is an explicit
/// part of every scenario, never implicit in how the closure happens to be
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// One untimed setup; the timed phase performs a single lookup.
    WarmLookup,
    /// The timed phase includes structure build on every iteration.
    ColdStart,
}

impl fmt::Display for TimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f.pad so table printers can align the mode column.
        match self {
            Self::WarmLookup => f.pad("warm"),
            Self::ColdStart => f.pad("cold"),
        }
    }
}

type Phase = Box<dyn FnMut() -> ScenarioResult>;

/// A registered unit of benchmark work: a label, a timing mode, an optional
/// untimed setup phase, the timed phase, and an optional iteration override
/// replacing the runner-wide count. Owned by the runner for its lifetime and
/// dropped once its measurement is recorded.
pub struct Scenario {
    label: String,
    mode: TimingMode,
    setup: Option<Phase>,
    timed: Phase,
    iterations: Option<u64>,
}

impl Scenario {
    /// Warm-lookup scenario: `setup` runs once, untimed; `timed` runs once
    /// per iteration against the structure `setup` built.
    pub fn warm<S, T>(label: impl Into<String>, setup: S, timed: T) -> Self
    where
        S: FnMut() -> ScenarioResult + 'static,
        T: FnMut() -> ScenarioResult + 'static,
    {
        Self {
            label: label.into(),
            mode: TimingMode::WarmLookup,
            setup: Some(Box::new(setup)),
            timed: Box::new(timed),
            iterations: None,
        }
    }

    /// Cold-start scenario: the timed closure carries the full
    /// build-and-match cost on every iteration.
    pub fn cold<T>(label: impl Into<String>, timed: T) -> Self
    where
        T: FnMut() -> ScenarioResult + 'static,
    {
        Self {
            label: label.into(),
            mode: TimingMode::ColdStart,
            setup: None,
            timed: Box::new(timed),
            iterations: None,
        }
    }

    /// Override the runner-wide iteration count for this scenario alone.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Per-scenario iteration override, if any.
    #[must_use]
    pub fn iterations(&self) -> Option<u64> {
        self.iterations
    }

    /// Scenario label. Labels need not be unique.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Timing mode of this scenario.
    #[must_use]
    pub fn mode(&self) -> TimingMode {
        self.mode
    }

    pub(crate) fn run_setup(&mut self) -> ScenarioResult {
        match self.setup.as_mut() {
            Some(setup) => setup(),
            None => Ok(()),
        }
    }

    pub(crate) fn run_timed(&mut self) -> ScenarioResult {
        (self.timed)()
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("label", &self.label)
            .field("mode", &self.mode)
            .field("has_setup", &self.setup.is_some())
            .field("iterations", &self.iterations)
            .finish()
    }
}
