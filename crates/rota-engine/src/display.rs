//! Slot labels for presentation.

use std::fmt;

use chrono::NaiveDate;
use rota_core::entities::Profile;
use rota_core::enums::Role;
use rota_core::ids::ProfileId;
use serde::Serialize;

use crate::assignment::AssignmentMap;
use crate::eligibility::resolve;

/// Shown for empty and dangling slots unless configured otherwise.
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// What a single (date, role) slot shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotLabel {
    Assigned { id: ProfileId, name: String, age: u32 },
    Unassigned,
    /// The slot holds an id that is no longer in the roster.
    Dangling { id: ProfileId },
}

impl SlotLabel {
    fn from_profile(profile: &Profile) -> Self {
        Self::Assigned {
            id: profile.id,
            name: profile.name.clone(),
            age: profile.age,
        }
    }

    /// `"Name (age)"`, or `placeholder` for empty and dangling slots.
    #[must_use]
    pub fn render(&self, placeholder: &str) -> String {
        match self {
            Self::Assigned { name, age, .. } => format!("{name} ({age})"),
            Self::Unassigned | Self::Dangling { .. } => placeholder.to_string(),
        }
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned { .. })
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(UNASSIGNED_LABEL))
    }
}

/// Label for one slot. Never fails: a dangling id renders as the placeholder.
#[must_use]
pub fn resolve_label(
    profiles: &[Profile],
    assignments: &AssignmentMap,
    date: NaiveDate,
    role: Role,
) -> SlotLabel {
    match assignments.get(date, role) {
        None => SlotLabel::Unassigned,
        Some(id) => resolve(profiles, id).map_or(SlotLabel::Dangling { id }, SlotLabel::from_profile),
    }
}
