//! Who may fill a slot, and which current assignments break the rules.
//!
//! A profile is eligible for (date, role) when all of these hold:
//! 1. it is qualified for the role;
//! 2. it holds no role on that date yet;
//! 3. for Audio/Video, it is not a minor paired with a minor in the other
//!    of the two roles.
//!
//! A paired assignee that cannot be resolved in the roster imposes no
//! age restriction, but still counts as booked for rule 2.

use std::fmt;

use chrono::NaiveDate;
use rota_core::entities::Profile;
use rota_core::enums::Role;
use rota_core::ids::ProfileId;
use serde::Serialize;

use crate::assignment::AssignmentMap;

/// First profile in `profiles` with the given id.
#[must_use]
pub fn resolve(profiles: &[Profile], id: ProfileId) -> Option<&Profile> {
    profiles.iter().find(|p| p.id == id)
}

/// Profiles that may be assigned `role` on `date`, in roster order.
///
/// Pure: the result depends only on the arguments.
#[must_use]
pub fn eligible_candidates<'a>(
    profiles: &'a [Profile],
    assignments: &AssignmentMap,
    date: NaiveDate,
    role: Role,
) -> Vec<&'a Profile> {
    profiles
        .iter()
        .filter(|candidate| is_eligible(candidate, profiles, assignments, date, role))
        .collect()
}

#[must_use]
pub fn is_eligible(
    candidate: &Profile,
    profiles: &[Profile],
    assignments: &AssignmentMap,
    date: NaiveDate,
    role: Role,
) -> bool {
    candidate.is_qualified_for(role)
        && !assignments.is_booked(date, candidate.id)
        && passes_age_pairing(candidate, profiles, assignments, date, role)
}

fn passes_age_pairing(
    candidate: &Profile,
    profiles: &[Profile],
    assignments: &AssignmentMap,
    date: NaiveDate,
    role: Role,
) -> bool {
    let Some(paired_role) = role.paired() else {
        return true;
    };
    let Some(partner) = assignments
        .get(date, paired_role)
        .and_then(|id| resolve(profiles, id))
    else {
        return true;
    };
    !(candidate.is_minor() && partner.is_minor())
}

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// Why a current assignment would not have been offered as a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The id does not resolve in the roster.
    UnknownProfile,
    /// The profile is not qualified for the role.
    NotQualified,
    /// The same profile already holds `also` on this date.
    DoubleBooked { also: Role },
    /// Audio and Video are both held by minors.
    MinorPair { with: ProfileId },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProfile => f.write_str("assigned profile no longer exists"),
            Self::NotQualified => f.write_str("profile is not qualified for this role"),
            Self::DoubleBooked { also } => write!(f, "profile is also assigned to {also}"),
            Self::MinorPair { with } => {
                write!(f, "minor paired with another minor (profile {with})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub date: NaiveDate,
    pub role: Role,
    pub profile: ProfileId,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

/// Audit the map against the roster. Read-only; overrides are never rejected.
///
/// Double-booking is reported on the later role of the two, and a minor pair
/// on the Video slot, so each problem appears once.
#[must_use]
pub fn find_violations(profiles: &[Profile], assignments: &AssignmentMap) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (date, role, id) in assignments.iter() {
        let mut push = |kind| {
            violations.push(Violation {
                date,
                role,
                profile: id,
                kind,
            });
        };

        if let Some(also) = assignments
            .on(date)
            .find(|(other, assigned)| *other < role && *assigned == id)
            .map(|(other, _)| other)
        {
            push(ViolationKind::DoubleBooked { also });
        }

        let Some(profile) = resolve(profiles, id) else {
            push(ViolationKind::UnknownProfile);
            continue;
        };

        if !profile.is_qualified_for(role) {
            push(ViolationKind::NotQualified);
        }

        if role == Role::Video && profile.is_minor() {
            let partner = assignments
                .get(date, Role::Audio)
                .and_then(|audio| resolve(profiles, audio));
            if let Some(partner) = partner.filter(|p| p.is_minor()) {
                push(ViolationKind::MinorPair { with: partner.id });
            }
        }
    }

    violations
}
