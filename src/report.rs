use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use owo_colors::{OwoColorize, Stream};

use crate::types::{BenchmarkReport, BenchmarkTarget, RunSummary, TargetReport};

/// Build the serializable record of one harness run.
pub fn build_report(
    targets: &[BenchmarkTarget],
    labels: &[String],
    summary: &RunSummary,
    number_of_runs: u32,
    bound_number: u64,
) -> BenchmarkReport {
    let results = targets
        .iter()
        .zip(labels)
        .zip(summary.averages.iter().zip(&summary.minimums))
        .map(|((target, label), (&average_ms, &min_ms))| TargetReport {
            name: target.name.clone(),
            label: label.clone(),
            average_ms,
            min_ms,
        })
        .collect();

    BenchmarkReport {
        generated_at: Utc::now(),
        number_of_runs,
        bound_number,
        results,
    }
}

/// Write the report as pretty-printed JSON next to the charts, overwriting
/// any previous one.
pub fn write_json_report(plot_dir: &Path, report: &BenchmarkReport) -> Result<()> {
    std::fs::create_dir_all(plot_dir)?;
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(plot_dir.join("results.json"), json)?;
    Ok(())
}

/// Aligned per-target summary for the console.
pub fn format_summary(labels: &[String], summary: &RunSummary) -> String {
    let mut out = String::new();

    let header = "Benchmark timings (milliseconds):";
    out.push_str(
        &header
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string(),
    );
    out.push('\n');

    if summary.is_empty() {
        out.push_str("  (no targets)\n");
        return out;
    }

    let label_width = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max("target".len());

    out.push_str(&format!(
        "  {:<label_width$}  {:>10}  {:>10}\n",
        "target", "avg", "min"
    ));

    for ((label, &average), &minimum) in labels
        .iter()
        .zip(&summary.averages)
        .zip(&summary.minimums)
    {
        let styled_label = format!("{:<label_width$}", label)
            .if_supports_color(Stream::Stdout, |s| s.bold())
            .to_string();
        out.push_str(&format!(
            "  {}  {:>10.2}  {:>10}\n",
            styled_label, average, minimum
        ));
    }

    out
}
