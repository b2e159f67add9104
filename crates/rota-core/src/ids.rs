//! Profile identifiers.
//!
//! IDs are millisecond timestamps, bumped past the largest ID already in the
//! roster. They are only guaranteed unique among the currently loaded profiles.

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::Profile;
use crate::errors::CoreError;

/// Opaque identity of a profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ProfileId(pub u64);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| CoreError::Validation(format!("invalid profile id '{s}': {e}")))
    }
}

/// Next free ID given the existing roster and the current time in milliseconds.
///
/// Never returns an ID already present in `existing`, even when the clock has
/// gone backwards or two profiles are added within the same millisecond.
#[must_use]
pub fn next_profile_id(existing: &[Profile], now_millis: u64) -> ProfileId {
    let floor = existing
        .iter()
        .map(|p| p.id.0)
        .max()
        .map_or(0, |max| max.saturating_add(1));
    ProfileId(now_millis.max(floor))
}

/// [`next_profile_id`] using the wall clock.
#[must_use]
pub fn generate_profile_id(existing: &[Profile]) -> ProfileId {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    next_profile_id(existing, now)
}
