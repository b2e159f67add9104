//! Profile store location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fallback when the platform has no data directory.
const LOCAL_PROFILES_PATH: &str = ".rota/profiles.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON profile store. Empty selects the platform default.
    #[serde(default)]
    pub profiles_path: String,
}

impl StorageConfig {
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.profiles_path.trim().is_empty()
    }

    /// The configured path, or `<data_dir>/rota/profiles.json`, or
    /// `.rota/profiles.json` when there is no data directory.
    #[must_use]
    pub fn resolved_profiles_path(&self) -> PathBuf {
        if !self.is_default() {
            return PathBuf::from(self.profiles_path.trim());
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(LOCAL_PROFILES_PATH),
            |dir| dir.join("rota").join("profiles.json"),
        )
    }
}
