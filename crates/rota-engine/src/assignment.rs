//! The assignment map: (meeting date, role) → profile id.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rota_core::enums::Role;
use rota_core::ids::ProfileId;
use serde::{Deserialize, Serialize};

/// Which profile, if any, holds each role on each date.
///
/// An absent entry means "unassigned". An entry whose id no longer resolves
/// in the roster is a dangling reference and is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentMap {
    slots: BTreeMap<NaiveDate, BTreeMap<Role, ProfileId>>,
}

impl AssignmentMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate, role: Role) -> Option<ProfileId> {
        self.slots.get(&date).and_then(|day| day.get(&role)).copied()
    }

    /// Set the slot, returning the previous assignee.
    pub fn assign(&mut self, date: NaiveDate, role: Role, id: ProfileId) -> Option<ProfileId> {
        self.slots.entry(date).or_default().insert(role, id)
    }

    /// Empty the slot, returning the previous assignee.
    pub fn clear(&mut self, date: NaiveDate, role: Role) -> Option<ProfileId> {
        let day = self.slots.get_mut(&date)?;
        let previous = day.remove(&role);
        if day.is_empty() {
            self.slots.remove(&date);
        }
        previous
    }

    /// Assignments on `date`, in role order.
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = (Role, ProfileId)> + '_ {
        self.slots
            .get(&date)
            .into_iter()
            .flat_map(|day| day.iter().map(|(role, id)| (*role, *id)))
    }

    /// Whether `id` holds any role on `date`.
    #[must_use]
    pub fn is_booked(&self, date: NaiveDate, id: ProfileId) -> bool {
        self.on(date).any(|(_, assigned)| assigned == id)
    }

    /// Every assigned slot, ordered by date then role.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Role, ProfileId)> + '_ {
        self.slots
            .iter()
            .flat_map(|(date, day)| day.iter().map(|(role, id)| (*date, *role, *id)))
    }

    /// Number of assigned slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn assign_replaces_and_reports_previous() {
        let mut map = AssignmentMap::new();
        assert_eq!(map.assign(d(4), Role::Audio, ProfileId(1)), None);
        assert_eq!(map.assign(d(4), Role::Audio, ProfileId(2)), Some(ProfileId(1)));
        assert_eq!(map.get(d(4), Role::Audio), Some(ProfileId(2)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn clear_removes_empty_days() {
        let mut map = AssignmentMap::new();
        map.assign(d(4), Role::Usher, ProfileId(1));
        assert_eq!(map.clear(d(4), Role::Usher), Some(ProfileId(1)));
        assert!(map.is_empty());
        assert_eq!(map.clear(d(4), Role::Usher), None);
    }

    #[test]
    fn booking_is_per_date() {
        let mut map = AssignmentMap::new();
        map.assign(d(4), Role::Video, ProfileId(7));
        assert!(map.is_booked(d(4), ProfileId(7)));
        assert!(!map.is_booked(d(6), ProfileId(7)));
        assert!(!map.is_booked(d(4), ProfileId(8)));
    }

    #[test]
    fn iter_is_date_then_role_ordered() {
        let mut map = AssignmentMap::new();
        map.assign(d(6), Role::Microphone, ProfileId(3));
        map.assign(d(4), Role::Usher, ProfileId(2));
        map.assign(d(4), Role::Audio, ProfileId(1));
        let slots: Vec<_> = map.iter().collect();
        assert_eq!(
            slots,
            vec![
                (d(4), Role::Audio, ProfileId(1)),
                (d(4), Role::Usher, ProfileId(2)),
                (d(6), Role::Microphone, ProfileId(3)),
            ]
        );
    }

    #[test]
    fn serializes_as_nested_object() {
        let mut map = AssignmentMap::new();
        map.assign(d(4), Role::Audio, ProfileId(1));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "2024-01-04": { "audio": 1 } }));
    }
}
