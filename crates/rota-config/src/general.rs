//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_placeholder_label() -> String {
    "Unassigned".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Text shown for a slot with nobody (or nobody known) assigned.
    #[serde(default = "default_placeholder_label")]
    pub placeholder_label: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            placeholder_label: default_placeholder_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.placeholder_label, "Unassigned");
    }
}
