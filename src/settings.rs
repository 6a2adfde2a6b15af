use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS, GridSize};
use crate::error::ConfigError;
use crate::input::ControlMode;

const APP_DIR_NAME: &str = "greedy-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_FILE_NAME: &str = "greedy-snake.log";

/// Optional values read from the JSON settings file.
///
/// Every field may be omitted; omitted fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub grid_size: Option<u16>,
    pub tick_interval_ms: Option<u64>,
    pub seed: Option<u64>,
    pub autopilot: Option<bool>,
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub grid_size: Option<u16>,
    pub tick_interval_ms: Option<u64>,
    pub seed: Option<u64>,
    pub autopilot: bool,
}

/// Validated configuration for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionConfig {
    pub grid: GridSize,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub start_mode: ControlMode,
}

impl Settings {
    /// Loads settings from an explicit path; a missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads settings from the default location.
    ///
    /// Returns defaults when the file does not exist yet.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = settings_path();
        match Self::load(&path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Merges `overrides` on top of these settings and validates the result.
    pub fn resolve(&self, overrides: &Overrides) -> Result<SessionConfig, ConfigError> {
        let side = overrides
            .grid_size
            .or(self.grid_size)
            .unwrap_or(DEFAULT_GRID_SIZE);
        let grid = GridSize::try_new(side, side)?;

        let tick_ms = overrides
            .tick_interval_ms
            .or(self.tick_interval_ms)
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        if tick_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }

        let start_mode = if overrides.autopilot || self.autopilot.unwrap_or(false) {
            ControlMode::AutoPilot
        } else {
            ControlMode::Manual
        };

        Ok(SessionConfig {
            grid,
            tick_interval: Duration::from_millis(tick_ms),
            seed: overrides.seed.or(self.seed),
            start_mode,
        })
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Opens the log file for appending, creating it and its parent directory
/// when missing. Earlier sessions' lines are kept.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
