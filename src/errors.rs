use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BenchplotError {
    #[error("No benchmark directory found at {path}. Put the executables to compare there.")]
    BinDirNotFound { path: PathBuf },

    #[error("Failed to launch benchmark {path}: {source}")]
    SpawnFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unusable output from benchmark '{target}': {detail}")]
    MalformedOutput { target: String, detail: String },

    #[error("{labels} display names configured for {targets} discovered targets")]
    LabelCountMismatch { labels: usize, targets: usize },
}
