use std::path::PathBuf;

use crate::errors::BenchplotError;
use crate::types::BenchmarkTarget;

/// Paths and display names for one harness run, passed explicitly into the
/// components instead of living as process-wide constants.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the benchmark executables.
    pub bin_dir: PathBuf,
    /// Directory the charts and the JSON report are written to.
    pub plot_dir: PathBuf,
    /// Explicit chart labels. `None` derives them from target filenames.
    pub labels: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bin_dir: PathBuf::from("./bin"),
            plot_dir: PathBuf::from("./plots"),
            labels: None,
        }
    }
}

impl Config {
    /// Resolve the display name for each discovered target.
    ///
    /// An explicit label list must match the target count exactly — a
    /// mismatch would silently mislabel the bars, so it fails before
    /// anything is rendered. Without one, labels derive from filenames.
    pub fn resolve_labels(
        &self,
        targets: &[BenchmarkTarget],
    ) -> Result<Vec<String>, BenchplotError> {
        match &self.labels {
            Some(labels) => {
                if labels.len() != targets.len() {
                    return Err(BenchplotError::LabelCountMismatch {
                        labels: labels.len(),
                        targets: targets.len(),
                    });
                }
                Ok(labels.clone())
            }
            None => Ok(targets.iter().map(|t| display_label(&t.name)).collect()),
        }
    }
}

/// Turn a target filename into a chart label: drop the extension, space out
/// `_` and `-` separators.
fn display_label(name: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };
    stem.chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect()
}
