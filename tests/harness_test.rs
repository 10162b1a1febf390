//! End-to-end tests for the benchmark harness.

use route_bench::adapters::{
    self, AdapterError, LinearScanAdapter, MatchOutcome, RouterAdapter,
};
use route_bench::bench::{
    BenchmarkRunner, JsonPrinter, MarkdownPrinter, Outcome, ResultPrinter, TablePrinter,
};
use route_bench::corpus::{Braced, Corpus, CorpusGenerator, PlaceholderStyle};
use std::rc::Rc;

/// Adapter whose lookups always fail.
struct FailingAdapter;

impl RouterAdapter for FailingAdapter {
    type Router = ();

    fn name(&self) -> &str {
        "failing"
    }

    fn style(&self) -> &dyn PlaceholderStyle {
        &Braced
    }

    fn build(&self, _corpus: &Corpus) -> Result<(), AdapterError> {
        Ok(())
    }

    fn lookup(&self, _router: &(), _path: &str) -> Result<MatchOutcome, AdapterError> {
        Err(AdapterError::Lookup("simulated failure".to_string()))
    }
}

/// Adapter that cannot be loaded at all.
struct MissingAdapter;

impl RouterAdapter for MissingAdapter {
    type Router = ();

    fn name(&self) -> &str {
        "missing"
    }

    fn style(&self) -> &dyn PlaceholderStyle {
        &Braced
    }

    fn build(&self, _corpus: &Corpus) -> Result<(), AdapterError> {
        Err(AdapterError::Unavailable("library not linked".to_string()))
    }

    fn lookup(&self, _router: &(), _path: &str) -> Result<MatchOutcome, AdapterError> {
        Ok(MatchOutcome::NotFound)
    }
}

fn corpus(routes: usize, args: usize) -> Rc<Corpus> {
    Rc::new(CorpusGenerator::with_seed(7).generate(routes, args).unwrap())
}

#[test]
fn test_reference_adapter_completes_all_scenarios() {
    let corpus = corpus(50, 3);
    let mut runner = BenchmarkRunner::new("e2e", 10);
    adapters::register_route_scenarios(&mut runner, LinearScanAdapter, Rc::clone(&corpus));
    assert_eq!(runner.scenario_count(), 5);

    let report = runner.execute();
    assert_eq!(report.measurements.len(), 5);
    for m in &report.measurements {
        assert_eq!(m.outcome, Outcome::Completed, "{} did not complete", m.label);
        assert_eq!(m.iterations, 10);
        assert!(m.total_time_ns > 0);
        assert!(m.throughput_ops_sec > 0.0);
    }
}

#[test]
fn test_failing_adapter_is_recorded_and_run_continues() {
    let corpus = corpus(10, 2);
    let mut runner = BenchmarkRunner::new("e2e", 5);
    adapters::register_route_scenarios(&mut runner, FailingAdapter, Rc::clone(&corpus));
    adapters::register_route_scenarios(&mut runner, LinearScanAdapter, Rc::clone(&corpus));

    let report = runner.execute();
    assert_eq!(report.measurements.len(), 10);
    for m in &report.measurements[..5] {
        assert!(
            matches!(m.outcome, Outcome::Failed { iteration: 0, .. }),
            "{} should fail on its first iteration",
            m.label
        );
    }
    for m in &report.measurements[5..] {
        assert_eq!(m.outcome, Outcome::Completed, "{} did not complete", m.label);
    }
}

#[test]
fn test_unavailable_adapter_scenarios_are_skipped() {
    let corpus = corpus(10, 2);
    let mut runner = BenchmarkRunner::new("e2e", 5);
    adapters::register_route_scenarios(&mut runner, MissingAdapter, Rc::clone(&corpus));
    adapters::register_route_scenarios(&mut runner, LinearScanAdapter, Rc::clone(&corpus));

    let report = runner.execute();
    assert_eq!(report.measurements.len(), 10);
    for m in &report.measurements[..5] {
        assert!(
            matches!(m.outcome, Outcome::Skipped { .. }),
            "{} should be skipped",
            m.label
        );
        assert_eq!(m.iterations, 0);
    }
    for m in &report.measurements[5..] {
        assert_eq!(m.outcome, Outcome::Completed);
    }
}

#[test]
fn test_every_outcome_kind_appears_in_rendered_reports() {
    let corpus = corpus(5, 1);
    let mut runner = BenchmarkRunner::new("e2e", 2);
    adapters::register_route_scenarios(&mut runner, LinearScanAdapter, Rc::clone(&corpus));
    adapters::register_route_scenarios(&mut runner, FailingAdapter, Rc::clone(&corpus));
    adapters::register_route_scenarios(&mut runner, MissingAdapter, Rc::clone(&corpus));

    let report = runner.execute();

    let table = TablePrinter.render(&report);
    assert!(table.contains("linear-scan - first route (5 routes)"));
    assert!(table.contains("failed at iteration 0"));
    assert!(table.contains("skipped:"));

    let markdown = MarkdownPrinter.render(&report);
    assert_eq!(
        markdown.lines().filter(|l| l.starts_with('|')).count(),
        2 + report.measurements.len()
    );

    let json = JsonPrinter.render(&report);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let kinds: Vec<&str> = value["measurements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["outcome"]["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"completed"));
    assert!(kinds.contains(&"failed"));
    assert!(kinds.contains(&"skipped"));
}

#[test]
fn test_corpus_is_shared_read_only_across_adapters() {
    let corpus = corpus(20, 4);
    let first = corpus.first_probe().to_string();
    let last = corpus.last_probe().to_string();

    let mut runner = BenchmarkRunner::new("e2e", 3);
    adapters::register_route_scenarios(&mut runner, LinearScanAdapter, Rc::clone(&corpus));
    adapters::register_route_scenarios(&mut runner, LinearScanAdapter, Rc::clone(&corpus));
    let _ = runner.execute();

    // The corpus is untouched by execution.
    assert_eq!(corpus.first_probe(), first);
    assert_eq!(corpus.last_probe(), last);
    assert_eq!(corpus.route_count(), 20);
}
