//! Result rendering.
//!
//! The runner never formats its own results; a [`ResultPrinter`] turns a
//! finished [`BenchReport`] into text for the terminal, a markdown document,
//! or JSON for CI consumption.

use super::result::{BenchReport, Outcome};

/// Renders a finished report into text.
pub trait ResultPrinter {
    /// Render the full report.
    fn render(&self, report: &BenchReport) -> String;
}

/// Aligned plain-text table for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TablePrinter;

impl ResultPrinter for TablePrinter {
    fn render(&self, report: &BenchReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n=== {} ===\n", report.suite_name));
        if let Some(description) = &report.description {
            out.push_str(&format!("{description}\n"));
        }
        out.push_str(&format!(
            "Timestamp: {} | {} iterations per scenario\n\n",
            report.timestamp, report.iterations
        ));

        out.push_str(&format!(
            "  {:<48} {:>5} {:>10} {:>12} {:>12} {:>14}  {}\n",
            "Scenario", "Mode", "Iters", "Total (ms)", "Mean (ns)", "Throughput", "Outcome"
        ));
        out.push_str(&format!("  {}\n", "-".repeat(110)));

        for m in &report.measurements {
            out.push_str(&format!(
                "  {:<48} {:>5} {:>10} {:>12.3} {:>12.1} {:>14}  {}\n",
                m.label,
                m.mode,
                m.iterations,
                m.total_time_ns as f64 / 1_000_000.0,
                m.mean_ns,
                format_throughput(m.throughput_ops_sec),
                outcome_cell(&m.outcome),
            ));
        }
        out.push('\n');
        out
    }
}

/// Pipe-table markdown report.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownPrinter;

impl ResultPrinter for MarkdownPrinter {
    fn render(&self, report: &BenchReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", report.suite_name));
        if let Some(description) = &report.description {
            out.push_str(&format!("{description}\n\n"));
        }
        out.push_str(&format!(
            "_Generated {} with {} iterations per scenario._\n\n",
            report.timestamp, report.iterations
        ));

        out.push_str(
            "| Scenario | Mode | Iterations | Total (ms) | Mean (ns) | Throughput | Outcome |\n",
        );
        out.push_str("| --- | --- | ---: | ---: | ---: | ---: | --- |\n");
        for m in &report.measurements {
            out.push_str(&format!(
                "| {} | {} | {} | {:.3} | {:.1} | {} | {} |\n",
                m.label,
                m.mode,
                m.iterations,
                m.total_time_ns as f64 / 1_000_000.0,
                m.mean_ns,
                format_throughput(m.throughput_ops_sec),
                outcome_cell(&m.outcome),
            ));
        }
        out
    }
}

/// Pretty-printed JSON for CI integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPrinter;

impl ResultPrinter for JsonPrinter {
    fn render(&self, report: &BenchReport) -> String {
        let mut out = report.to_json();
        out.push('\n');
        out
    }
}

fn format_throughput(ops_per_sec: f64) -> String {
    if ops_per_sec > 1_000_000.0 {
        format!("{:.2}M ops/s", ops_per_sec / 1_000_000.0)
    } else if ops_per_sec > 1_000.0 {
        format!("{:.2}K ops/s", ops_per_sec / 1_000.0)
    } else {
        format!("{ops_per_sec:.2} ops/s")
    }
}

fn outcome_cell(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Completed => "ok".to_string(),
        Outcome::Failed { iteration, error } => {
            format!("failed at iteration {iteration}: {error}")
        }
        Outcome::Skipped { reason } => format!("skipped: {reason}"),
    }
}
