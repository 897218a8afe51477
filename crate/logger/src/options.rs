use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::LoggerError;

/// Directory holding the default log file unless overridden.
pub const DEFAULT_LOG_DIR: &str = "/var/log";

/// Options of the default logger.
///
/// Every field is optional in a configuration file:
///
/// ```toml
/// verbosity = 2
/// colorful = true
/// log_dir = "/tmp/logs"
/// timestamp = true
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogOptions {
    /// Calls logged at a verbosity greater than this one are dropped.
    pub verbosity: i32,

    /// Color the lines mirrored to stderr.
    pub colorful: bool,

    /// Directory of the default log file. Defaults to [`DEFAULT_LOG_DIR`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prepend a timestamp to every line.
    pub timestamp: bool,
}

impl LogOptions {
    pub fn from_toml(conf_path: impl AsRef<Path>) -> Result<Self, LoggerError> {
        let content = read(conf_path.as_ref())?;
        toml::from_str(&content).map_err(|e| {
            LoggerError::Parsing(format!(
                "error while parsing log options {:?}: {e}",
                conf_path.as_ref()
            ))
        })
    }

    pub fn from_json(conf_path: impl AsRef<Path>) -> Result<Self, LoggerError> {
        let content = read(conf_path.as_ref())?;
        serde_json::from_str(&content).map_err(|e| {
            LoggerError::Parsing(format!(
                "error while parsing log options {:?}: {e}",
                conf_path.as_ref()
            ))
        })
    }

    #[must_use]
    pub fn log_dir(&self) -> &Path {
        self.log_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_LOG_DIR))
    }

    /// Path of the default log file:
    /// `<log_dir>/<unix seconds>-<executable name>-<pid>.log`.
    #[must_use]
    pub fn log_file_path(&self, unix_seconds: i64, executable: &str, pid: u32) -> PathBuf {
        self.log_dir()
            .join(format!("{unix_seconds}-{executable}-{pid}.log"))
    }
}

fn read(conf_path: &Path) -> Result<String, LoggerError> {
    trace!("Reading log options from {conf_path:?}");
    fs::read_to_string(conf_path).map_err(|e| {
        LoggerError::IOError(format!("unable to read log options {conf_path:?}: {e}"))
    })
}
