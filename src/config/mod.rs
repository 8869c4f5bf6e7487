use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".trip_core";
const LEDGER_FILE: &str = "trip.json";

/// Explicit configuration handed to components at construction. No global
/// settings singleton exists; tests and embedders supply their own paths.
#[derive(Debug, Clone)]
pub struct Config {
    pub ledger_path: PathBuf,
}

impl Config {
    pub fn new(ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            ledger_path: ledger_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_path: app_data_dir().join(LEDGER_FILE),
        }
    }
}

/// Returns the application data directory, defaulting to `~/.trip_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TRIP_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
