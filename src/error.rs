use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures detected while building a session configuration.
///
/// All of these are fatal and reported before the simulation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidGridSize { width: u16, height: u16 },

    #[error("start cell ({x}, {y}) lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    #[error("tick interval must be at least 1 ms")]
    InvalidTickInterval,

    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ConfigError> for io::Error {
    fn from(error: ConfigError) -> Self {
        let kind = match &error {
            ConfigError::Io { source, .. } => source.kind(),
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, error)
    }
}
