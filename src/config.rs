//! Runtime configuration, read from the environment (and a `.env` file if present).

use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable that overrides the traffic history location.
pub const DATA_FILE_ENV: &str = "TRAFFIC_HISTORY_FILE";

/// Default traffic history file name, looked up next to the executable.
pub const DEFAULT_DATA_FILE: &str = "history_traffic.dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the traffic history file to display.
    pub data_file: PathBuf,
}

impl Config {
    /// Builds the configuration from environment variables, loading `.env` first.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let data_file = env::var(DATA_FILE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);

        debug!("Using traffic history file {}", data_file.display());
        Self { data_file }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

/// `history_traffic.dat` in the directory holding the running executable.
///
/// Falls back to the bare file name if the executable path is unavailable.
fn default_data_file() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(DEFAULT_DATA_FILE),
            None => PathBuf::from(DEFAULT_DATA_FILE),
        },
        Err(e) => {
            debug!("Cannot resolve executable path: {}", e);
            PathBuf::from(DEFAULT_DATA_FILE)
        },
    }
}
