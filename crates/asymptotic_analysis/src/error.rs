use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no problem sizes to measure")]
    EmptySizes,

    #[error("problem size must be at least 1, got 0")]
    ZeroSize,

    #[error("unable to render chart to {}: {message}", path.display())]
    Chart { path: PathBuf, message: String },
}
