use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One executable discovered in the benchmark directory.
#[derive(Debug, Clone)]
pub struct BenchmarkTarget {
    pub path: PathBuf,
    pub name: String,
}

/// Aggregated timings, one entry per target in discovery order.
///
/// `averages` and `minimums` are parallel: index i in both refers to the
/// same target.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub averages: Vec<f64>,
    pub minimums: Vec<i64>,
}

impl RunSummary {
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.averages.len(), self.minimums.len());
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Machine-readable record of one harness run, written next to the charts.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub number_of_runs: u32,
    pub bound_number: u64,
    pub results: Vec<TargetReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetReport {
    pub name: String,
    pub label: String,
    pub average_ms: f64,
    pub min_ms: i64,
}
