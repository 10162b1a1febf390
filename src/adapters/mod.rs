//! Router-under-test adapter boundary.
//!
//! The harness never implements routing itself; each router is integrated
//! through [`RouterAdapter`] and consumed only via its build and lookup
//! capabilities. [`register_route_scenarios`] registers the standard
//! workload (first/last/unknown probes, warm and cold) for any adapter.

pub mod error;
pub mod reference;

pub use error::AdapterError;
pub use reference::LinearScanAdapter;

use crate::bench::{BenchmarkRunner, Scenario, ScenarioError, ScenarioResult};
use crate::corpus::{Corpus, PlaceholderStyle};
use std::cell::RefCell;
use std::rc::Rc;

/// Result of one lookup against a router under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The path matched the route registered at this index.
    Matched {
        /// Index of the matched route in corpus order.
        handler: usize,
    },
    /// No route matched.
    NotFound,
}

/// Capability surface of a router under test.
///
/// The harness supplies the corpus and probe paths and times `lookup` (and,
/// for cold-start scenarios, `build`); everything behind this trait is a
/// black box.
pub trait RouterAdapter {
    /// The built lookup structure.
    type Router;

    /// Display name used in scenario labels.
    fn name(&self) -> &str;

    /// Placeholder syntax this router expects, used when rendering corpus
    /// patterns for it.
    fn style(&self) -> &dyn PlaceholderStyle;

    /// Build the lookup structure from the corpus.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Unavailable`] when the library cannot be
    /// loaded, or [`AdapterError::Build`] on any other construction failure.
    fn build(&self, corpus: &Corpus) -> Result<Self::Router, AdapterError>;

    /// Match a single concrete path against the built structure.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Lookup`] when the router itself fails; a
    /// clean miss is `Ok(MatchOutcome::NotFound)`.
    fn lookup(&self, router: &Self::Router, path: &str) -> Result<MatchOutcome, AdapterError>;
}

/// What a probe lookup is required to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    Match,
    NoMatch,
}

fn check(outcome: MatchOutcome, expected: Expectation, path: &str) -> ScenarioResult {
    match (outcome, expected) {
        (MatchOutcome::Matched { .. }, Expectation::Match)
        | (MatchOutcome::NotFound, Expectation::NoMatch) => Ok(()),
        (MatchOutcome::NotFound, Expectation::Match) => Err(ScenarioError::Expectation {
            path: path.to_string(),
            detail: "expected a match, router returned not-found".to_string(),
        }),
        (MatchOutcome::Matched { handler }, Expectation::NoMatch) => {
            Err(ScenarioError::Expectation {
                path: path.to_string(),
                detail: format!("expected not-found, router matched handler {handler}"),
            })
        }
    }
}

/// Register the standard route-matching workload for one adapter: warm
/// first/last/unknown lookups plus cold last/unknown variants that rebuild
/// the structure on every timed iteration.
pub fn register_route_scenarios<A>(runner: &mut BenchmarkRunner, adapter: A, corpus: Rc<Corpus>)
where
    A: RouterAdapter + 'static,
{
    let adapter = Rc::new(adapter);
    let n = corpus.route_count();
    let name = adapter.name().to_string();

    runner.register(warm_probe(
        format!("{name} - first route ({n} routes)"),
        Rc::clone(&adapter),
        Rc::clone(&corpus),
        corpus.first_probe().to_string(),
        Expectation::Match,
    ));
    runner.register(warm_probe(
        format!("{name} - last route ({n} routes)"),
        Rc::clone(&adapter),
        Rc::clone(&corpus),
        corpus.last_probe().to_string(),
        Expectation::Match,
    ));
    runner.register(warm_probe(
        format!("{name} - unknown route ({n} routes)"),
        Rc::clone(&adapter),
        Rc::clone(&corpus),
        corpus.unknown_probe().to_string(),
        Expectation::NoMatch,
    ));
    runner.register(cold_probe(
        format!("{name} - last route, cold ({n} routes)"),
        Rc::clone(&adapter),
        Rc::clone(&corpus),
        corpus.last_probe().to_string(),
        Expectation::Match,
    ));
    runner.register(cold_probe(
        format!("{name} - unknown route, cold ({n} routes)"),
        adapter,
        Rc::clone(&corpus),
        corpus.unknown_probe().to_string(),
        Expectation::NoMatch,
    ));
}

/// Warm scenario: build once in untimed setup, time one lookup per
/// iteration. Each scenario gets its own structure so scenarios stay
/// independent.
fn warm_probe<A>(
    label: String,
    adapter: Rc<A>,
    corpus: Rc<Corpus>,
    path: String,
    expected: Expectation,
) -> Scenario
where
    A: RouterAdapter + 'static,
{
    let slot: Rc<RefCell<Option<A::Router>>> = Rc::new(RefCell::new(None));

    let setup = {
        let slot = Rc::clone(&slot);
        let adapter = Rc::clone(&adapter);
        move || {
            *slot.borrow_mut() = Some(adapter.build(&corpus)?);
            Ok(())
        }
    };

    let timed = move || {
        let built = slot.borrow();
        let router = built.as_ref().ok_or_else(|| {
            ScenarioError::Unavailable("lookup structure was never built".to_string())
        })?;
        check(adapter.lookup(router, &path)?, expected, &path)
    };

    Scenario::warm(label, setup, timed)
}

/// Cold scenario: the timed closure rebuilds the structure and performs one
/// lookup on every iteration.
fn cold_probe<A>(
    label: String,
    adapter: Rc<A>,
    corpus: Rc<Corpus>,
    path: String,
    expected: Expectation,
) -> Scenario
where
    A: RouterAdapter + 'static,
{
    let timed = move || {
        let router = adapter.build(&corpus)?;
        check(adapter.lookup(&router, &path)?, expected, &path)
    };
    Scenario::cold(label, timed)
}
