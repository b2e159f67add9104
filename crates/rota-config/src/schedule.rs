//! Default-generation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// Fixed seed for default generation. Unset means a fresh roll every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ScheduleConfig {
    #[must_use]
    pub const fn is_reproducible(&self) -> bool {
        self.seed.is_some()
    }
}
