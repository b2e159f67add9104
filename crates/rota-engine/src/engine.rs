//! [`AssignmentEngine`]: the stateful facade a front end drives.
//!
//! The engine owns the profile snapshot, the selected month with its meeting
//! dates, and the assignment map. Month or roster changes rebuild the map from
//! scratch; overrides write straight into it.

use chrono::NaiveDate;
use rota_core::entities::Profile;
use rota_core::enums::Role;
use rota_core::ids::ProfileId;
use rota_core::month::YearMonth;
use rota_store::{ProfileRepository, StoreError};
use serde::Serialize;

use crate::assignment::AssignmentMap;
use crate::calendar::{is_meeting_day, meeting_dates};
use crate::display::{SlotLabel, resolve_label};
use crate::eligibility::{Violation, eligible_candidates, find_violations, is_eligible, resolve};
use crate::generator::generate_default;
use crate::random::{RandomSource, RngSource};

// ---------------------------------------------------------------------------
// Schedule view
// ---------------------------------------------------------------------------

/// One role on one meeting date, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    pub role: Role,
    #[serde(flatten)]
    pub label: SlotLabel,
}

/// Every role for one meeting date, in role order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub date: NaiveDate,
    pub slots: Vec<ScheduleSlot>,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

pub struct AssignmentEngine<R, S = RngSource> {
    repo: R,
    random: S,
    profiles: Vec<Profile>,
    month: Option<YearMonth>,
    meetings: Vec<NaiveDate>,
    assignments: AssignmentMap,
    version: u64,
}

impl<R: ProfileRepository> AssignmentEngine<R> {
    /// Engine with an entropy-seeded random source and no month selected.
    pub fn new(repo: R) -> Self {
        Self::with_random(repo, RngSource::from_entropy())
    }
}

impl<R: ProfileRepository, S: RandomSource> AssignmentEngine<R, S> {
    /// Engine with the given random source. Loads the roster snapshot once.
    pub fn with_random(repo: R, random: S) -> Self {
        let profiles = repo.load();
        tracing::debug!(profiles = profiles.len(), "engine created");
        Self {
            repo,
            random,
            profiles,
            month: None,
            meetings: Vec::new(),
            assignments: AssignmentMap::new(),
            version: 0,
        }
    }

    /// Switch to `month`: derive its meetings and generate a fresh map.
    ///
    /// Overrides made for the previous month are discarded.
    pub fn select_month(&mut self, month: YearMonth) {
        self.month = Some(month);
        self.meetings = meeting_dates(month);
        tracing::debug!(%month, meetings = self.meetings.len(), "month selected");
        self.regenerate();
    }

    /// Re-roll the default assignment for the current month.
    ///
    /// The new map is built aside and swapped in whole. Without a selected
    /// month the map is simply emptied.
    pub fn regenerate(&mut self) {
        let fresh = generate_default(&self.meetings, &self.profiles, &mut self.random);
        tracing::debug!(
            month = ?self.month.map(|m| m.to_string()),
            assigned = fresh.len(),
            "assignments regenerated"
        );
        self.assignments = fresh;
        self.version += 1;
    }

    /// Reload the roster from the repository and regenerate.
    pub fn refresh_profiles(&mut self) {
        self.profiles = self.repo.load();
        tracing::debug!(profiles = self.profiles.len(), "profile snapshot refreshed");
        self.regenerate();
    }

    /// Write `profiles` through the repository, then refresh.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the write fails. The snapshot and the
    /// map are left untouched in that case.
    pub fn replace_profiles(&mut self, profiles: Vec<Profile>) -> Result<(), StoreError> {
        self.repo.replace(profiles)?;
        self.refresh_profiles();
        Ok(())
    }

    /// Profiles that may fill (date, role) given the current map, in roster order.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn available_candidates(&self, date: NaiveDate, role: Role) -> Vec<&Profile> {
        eligible_candidates(&self.profiles, &self.assignments, date, role)
    }

    /// Put `id` into (date, role), replacing whatever was there.
    ///
    /// Never rejects: the id need not be eligible, qualified, or even known.
    /// Rule breaks are logged and show up in [`Self::violations`].
    pub fn override_assignment(
        &mut self,
        date: NaiveDate,
        role: Role,
        id: ProfileId,
    ) -> Option<ProfileId> {
        // Judge the newcomer against the map without the slot's old holder.
        let previous = self.assignments.clear(date, role);
        match resolve(&self.profiles, id) {
            None => tracing::warn!(%date, %role, %id, "override with unknown profile id"),
            Some(profile) if !is_eligible(profile, &self.profiles, &self.assignments, date, role) => {
                tracing::warn!(%date, %role, %id, "override assigns an ineligible profile");
            }
            Some(_) => {}
        }
        if !is_meeting_day(date) {
            tracing::debug!(%date, "override on a non-meeting day");
        }

        self.assignments.assign(date, role, id);
        self.version += 1;
        tracing::debug!(%date, %role, %id, ?previous, "assignment overridden");
        previous
    }

    /// Empty (date, role), returning the previous assignee.
    pub fn clear_assignment(&mut self, date: NaiveDate, role: Role) -> Option<ProfileId> {
        let previous = self.assignments.clear(date, role);
        if previous.is_some() {
            self.version += 1;
        }
        previous
    }

    #[must_use]
    pub fn assigned(&self, date: NaiveDate, role: Role) -> Option<ProfileId> {
        self.assignments.get(date, role)
    }

    #[must_use]
    pub fn label(&self, date: NaiveDate, role: Role) -> SlotLabel {
        resolve_label(&self.profiles, &self.assignments, date, role)
    }

    /// One row per meeting of the selected month.
    #[must_use]
    pub fn schedule(&self) -> Vec<ScheduleRow> {
        self.meetings
            .iter()
            .map(|&date| ScheduleRow {
                date,
                slots: Role::ALL
                    .into_iter()
                    .map(|role| ScheduleSlot {
                        role,
                        label: self.label(date, role),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Slots whose current assignee would not be offered as a candidate.
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        find_violations(&self.profiles, &self.assignments)
    }

    #[must_use]
    pub const fn month(&self) -> Option<YearMonth> {
        self.month
    }

    #[must_use]
    pub fn meetings(&self) -> &[NaiveDate] {
        &self.meetings
    }

    #[must_use]
    pub const fn assignments(&self) -> &AssignmentMap {
        &self.assignments
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Bumped on every change to the assignment map.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repo
    }
}
