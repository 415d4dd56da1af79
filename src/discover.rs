use std::path::Path;

use anyhow::Result;

use crate::errors::BenchplotError;
use crate::types::BenchmarkTarget;

/// Discover benchmark executables in `bin_dir`.
///
/// Every directory entry is treated as a target — there is no filtering, so
/// a stray non-executable file surfaces later as a fatal launch error rather
/// than being silently skipped. Targets are sorted by filename; directory
/// enumeration order is not stable across filesystems and the chart ordering
/// must be reproducible.
pub fn discover_targets(bin_dir: &Path) -> Result<Vec<BenchmarkTarget>> {
    if !bin_dir.is_dir() {
        return Err(BenchplotError::BinDirNotFound {
            path: bin_dir.to_path_buf(),
        }
        .into());
    }

    let mut targets = Vec::new();

    for entry in std::fs::read_dir(bin_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        targets.push(BenchmarkTarget {
            path: entry.path(),
            name,
        });
    }

    targets.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(targets)
}
