use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid game tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is outside the supported range {min}..={max}")]
    GridSize { size: u16, min: u16, max: u16 },

    #[error("minimum tick interval must be positive")]
    ZeroTickFloor,

    #[error("initial tick interval {initial_ms}ms is below the {floor_ms}ms floor")]
    TickIntervalBelowFloor { initial_ms: u64, floor_ms: u64 },
}

/// Failures of the terminal front end and its collaborators.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("score file {path} is unreadable: {source}")]
    ScoreFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
