//! Default assignment generation.
//!
//! Dates are filled in order, and within a date roles are filled in
//! [`Role::ALL`] order against the map built so far. Video therefore sees
//! Audio's pick when applying the age-pairing rule, but Audio never sees
//! Video's. Slots with no eligible candidate stay unassigned.

use chrono::NaiveDate;
use rota_core::entities::Profile;
use rota_core::enums::Role;

use crate::assignment::AssignmentMap;
use crate::eligibility::eligible_candidates;
use crate::random::RandomSource;

/// Fill every (date, role) slot with a uniformly random eligible profile.
pub fn generate_default<S: RandomSource + ?Sized>(
    dates: &[NaiveDate],
    profiles: &[Profile],
    random: &mut S,
) -> AssignmentMap {
    let mut map = AssignmentMap::new();
    let mut unfilled = 0usize;

    for &date in dates {
        for role in Role::ALL {
            let candidates = eligible_candidates(profiles, &map, date, role);
            if candidates.is_empty() {
                tracing::debug!(%date, %role, "no eligible candidate; slot left unassigned");
                unfilled += 1;
                continue;
            }

            let index = random.pick(candidates.len()).min(candidates.len() - 1);
            let chosen = candidates[index].id;
            tracing::trace!(%date, %role, id = %chosen, of = candidates.len(), "slot filled");
            map.assign(date, role, chosen);
        }
    }

    if unfilled > 0 {
        tracing::warn!(
            unfilled,
            meetings = dates.len(),
            "some slots have no eligible profile"
        );
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, ScriptedSource};
    use pretty_assertions::assert_eq;
    use rota_core::ids::ProfileId;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn empty_roster_leaves_everything_unassigned() {
        let map = generate_default(&[d(4), d(6)], &[], &mut ScriptedSource::first());
        assert!(map.is_empty());
    }

    #[test]
    fn first_pick_script_fills_in_roster_order() {
        let profiles = vec![
            Profile::new(ProfileId(1), "Ana", 30, Role::ALL),
            Profile::new(ProfileId(2), "Beto", 30, Role::ALL),
            Profile::new(ProfileId(3), "Carla", 30, Role::ALL),
        ];
        let map = generate_default(&[d(4)], &profiles, &mut ScriptedSource::first());

        assert_eq!(map.get(d(4), Role::Microphone), Some(ProfileId(1)));
        assert_eq!(map.get(d(4), Role::Audio), Some(ProfileId(2)));
        assert_eq!(map.get(d(4), Role::Video), Some(ProfileId(3)));
        assert_eq!(map.get(d(4), Role::Platform), None);
        assert_eq!(map.get(d(4), Role::Usher), None);
    }

    #[test]
    fn video_sees_audio_pick_for_age_pairing() {
        // Two minors and one adult, all audio/video only. Audio takes the
        // first minor; Video may then only take the adult.
        let profiles = vec![
            Profile::new(ProfileId(1), "Kid A", 14, [Role::Audio, Role::Video]),
            Profile::new(ProfileId(2), "Kid B", 15, [Role::Audio, Role::Video]),
            Profile::new(ProfileId(3), "Adult", 40, [Role::Audio, Role::Video]),
        ];
        let map = generate_default(&[d(4)], &profiles, &mut ScriptedSource::first());
        assert_eq!(map.get(d(4), Role::Audio), Some(ProfileId(1)));
        assert_eq!(map.get(d(4), Role::Video), Some(ProfileId(3)));
    }

    #[test]
    fn two_minors_only_fill_one_of_audio_and_video() {
        let profiles = vec![
            Profile::new(ProfileId(1), "Kid A", 14, [Role::Audio, Role::Video]),
            Profile::new(ProfileId(2), "Kid B", 15, [Role::Audio, Role::Video]),
        ];
        let map = generate_default(&[d(4)], &profiles, &mut RngSource::seeded(3));
        assert!(map.get(d(4), Role::Audio).is_some());
        assert_eq!(map.get(d(4), Role::Video), None);
    }

    #[test]
    fn each_date_is_independent() {
        let profiles = vec![Profile::new(ProfileId(1), "Solo", 30, [Role::Usher])];
        let map = generate_default(&[d(4), d(6), d(11)], &profiles, &mut ScriptedSource::first());
        for day in [4, 6, 11] {
            assert_eq!(map.get(d(day), Role::Usher), Some(ProfileId(1)));
        }
    }

    #[test]
    fn scripted_picks_select_by_index() {
        let profiles = vec![
            Profile::new(ProfileId(1), "A", 30, [Role::Usher]),
            Profile::new(ProfileId(2), "B", 30, [Role::Usher]),
            Profile::new(ProfileId(3), "C", 30, [Role::Usher]),
        ];
        let mut source = ScriptedSource::new(vec![2]);
        let map = generate_default(&[d(4)], &profiles, &mut source);
        assert_eq!(map.get(d(4), Role::Usher), Some(ProfileId(3)));
        // Only the usher slot had candidates.
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn same_seed_same_schedule() {
        let profiles: Vec<Profile> = (1..=8)
            .map(|i| {
                let age = 10 + u32::try_from(i).unwrap() * 4;
                Profile::new(ProfileId(i), format!("P{i}"), age, Role::ALL)
            })
            .collect();
        let dates = [d(4), d(6), d(11), d(13)];
        let a = generate_default(&dates, &profiles, &mut RngSource::seeded(2024));
        let b = generate_default(&dates, &profiles, &mut RngSource::seeded(2024));
        assert_eq!(a, b);
    }
}
