//! Centralized path configuration.
//!
//! Daemon and CLI resolve data paths through this module so both agree on
//! where the database and config live.

use std::path::PathBuf;

/// Get the pulse data directory.
///
/// Resolution order:
/// 1. `PULSE_DATA_DIR` environment variable
/// 2. `~/.pulse` for user installs
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PULSE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    dirs::home_dir().map(|h| h.join(".pulse")).unwrap_or_else(|| PathBuf::from("/var/lib/pulse"))
}

/// Get the configuration directory.
pub fn config_dir() -> PathBuf {
    data_dir()
}

/// Get the database path.
pub fn db_path() -> PathBuf {
    data_dir().join("pulse.db")
}
