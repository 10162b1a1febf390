//! route-bench binary entry point.

use clap::Parser;
use route_bench::adapters::{self, LinearScanAdapter};
use route_bench::bench::{
    BenchmarkRunner, JsonPrinter, MarkdownPrinter, ResultPrinter, TablePrinter,
};
use route_bench::cli::Cli;
use route_bench::config::{HarnessConfig, ReportFormat};
use route_bench::corpus::CorpusGenerator;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("route-bench: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("route-bench: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &HarnessConfig) -> Result<(), Box<dyn std::error::Error>> {
    let workload = &config.workload;

    let mut generator = match workload.seed {
        Some(seed) => CorpusGenerator::with_seed(seed),
        None => CorpusGenerator::new(),
    };
    let corpus = Rc::new(generator.generate(workload.routes, workload.args)?);
    info!(
        routes = workload.routes,
        args = workload.args,
        iterations = workload.iterations,
        "corpus generated"
    );

    let mut runner = BenchmarkRunner::new("Route matching", workload.iterations)
        .with_description(format!(
            "Route-matching latency across {} routes with {} arguments each.",
            workload.routes, workload.args
        ));
    adapters::register_route_scenarios(&mut runner, LinearScanAdapter, Rc::clone(&corpus));

    let report = runner.execute();

    let printer: Box<dyn ResultPrinter> = match config.report.format {
        ReportFormat::Table => Box::new(TablePrinter),
        ReportFormat::Markdown => Box::new(MarkdownPrinter),
        ReportFormat::Json => Box::new(JsonPrinter),
    };
    let rendered = printer.render(&report);

    match &config.report.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}
