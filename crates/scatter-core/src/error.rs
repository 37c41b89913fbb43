// File: crates/scatter-core/src/error.rs
// Summary: Error type shared by the dataset loader and the chart controller.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to open dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode CSV")]
    Csv(#[from] csv::Error),
    #[error("dataset has no header row")]
    MissingHeader,
    #[error("dataset is empty; scale domains need at least one record")]
    EmptyDataset,
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("unknown platform `{0}`")]
    UnknownPlatform(String),
    #[error("unknown control `{0}`")]
    UnknownControl(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
