//! Data directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the data directory.
pub const DATA_ENV_VAR: &str = "GRIMOIRE_DATA_DIR";

/// Get the data directory override, if one is configured.
///
/// Returns the `GRIMOIRE_DATA_DIR` environment variable when set and
/// non-empty. `None` means the embedded tables are used as-is.
pub fn default_data_root() -> Option<PathBuf> {
    match std::env::var(DATA_ENV_VAR) {
        Ok(root) if !root.trim().is_empty() => Some(PathBuf::from(root)),
        _ => None,
    }
}

/// The `standards/` directory shipped with the workspace sources.
pub fn workspace_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}
