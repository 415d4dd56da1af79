use std::process::{Command, Stdio};

use anyhow::Result;

use crate::errors::BenchplotError;
use crate::parse;
use crate::types::{BenchmarkTarget, RunSummary};

/// Run every target `number_of_runs` times and aggregate the timings.
///
/// Invocations are strictly sequential — each child runs alone so the
/// measurements do not compete for CPU or cache. Any launch or parse
/// failure aborts the whole aggregation; there are no partial results.
pub fn run_targets(
    targets: &[BenchmarkTarget],
    number_of_runs: u32,
    bound_number: u64,
) -> Result<RunSummary> {
    let mut averages = Vec::with_capacity(targets.len());
    let mut minimums = Vec::with_capacity(targets.len());

    for target in targets {
        let mut sum: i64 = 0;
        let mut min_time = i64::MAX;

        for _ in 0..number_of_runs {
            let duration = run_once(target, bound_number)?;
            sum += duration;
            min_time = min_time.min(duration);
        }

        averages.push(sum as f64 / f64::from(number_of_runs));
        minimums.push(min_time);
    }

    Ok(RunSummary { averages, minimums })
}

/// Spawn one invocation, block until it exits, and parse the duration out of
/// its captured stdout. Stderr stays attached to the console.
fn run_once(target: &BenchmarkTarget, bound_number: u64) -> Result<i64> {
    let child = Command::new(&target.path)
        .arg(bound_number.to_string())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|source| BenchplotError::SpawnFailed {
            path: target.path.clone(),
            source,
        })?;

    let output = child
        .wait_with_output()
        .map_err(|source| BenchplotError::SpawnFailed {
            path: target.path.clone(),
            source,
        })?;

    parse::parse_duration(&output.stdout).map_err(|err| {
        BenchplotError::MalformedOutput {
            target: target.name.clone(),
            detail: err.to_string(),
        }
        .into()
    })
}
