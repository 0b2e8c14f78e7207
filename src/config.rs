use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Check-related constants
// =============================================================================

/// Built-in version metadata endpoint, in effect until reconfigured
pub const DEFAULT_CHECK_URL: &str = "https://updates.frtc.app/stable/latest.json";

/// Timeout for the metadata fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent with every metadata request
pub const USER_AGENT: &str = concat!("update-check/", env!("CARGO_PKG_VERSION"));

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateConfig {
    /// Version metadata endpoint to query instead of the built-in one
    pub check_url: Option<String>,
    /// Override for the version reported as currently running
    pub current_version: Option<String>,
}

/// Returns the path to the data directory for update-check.
/// Uses $XDG_DATA_HOME/update-check if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/update-check,
/// or ./update-check if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("update-check.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("update-check")
}
