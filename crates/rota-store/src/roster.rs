//! Roster edits: add, update, and remove profiles.
//!
//! Every edit is load → modify → `replace`. There are no partial writes.

use rota_core::entities::{Profile, ProfileDraft};
use rota_core::errors::CoreError;
use rota_core::ids::{ProfileId, generate_profile_id};

use crate::error::StoreError;
use crate::repos::ProfileRepository;

fn not_found(id: ProfileId) -> StoreError {
    StoreError::Core(CoreError::NotFound {
        entity_type: "profile".to_string(),
        id: id.to_string(),
    })
}

/// Validate `draft`, give it a fresh id, and append it to the roster.
///
/// # Errors
///
/// Returns `StoreError::Core` if the draft is invalid, or a storage error if
/// the roster cannot be written.
pub fn add_profile<R: ProfileRepository + ?Sized>(
    repo: &mut R,
    draft: ProfileDraft,
) -> Result<Profile, StoreError> {
    let draft = draft.validated()?;
    let mut profiles = repo.load();
    let profile = draft.into_profile(generate_profile_id(&profiles));
    profiles.push(profile.clone());
    repo.replace(profiles)?;
    tracing::info!(id = %profile.id, name = %profile.name, "profile added");
    Ok(profile)
}

/// Replace the editable fields of profile `id`, keeping its position.
///
/// # Errors
///
/// Returns `CoreError::NotFound` (wrapped) for an unknown id, `CoreError::Validation`
/// for an invalid draft, or a storage error.
pub fn update_profile<R: ProfileRepository + ?Sized>(
    repo: &mut R,
    id: ProfileId,
    draft: ProfileDraft,
) -> Result<Profile, StoreError> {
    let draft = draft.validated()?;
    let mut profiles = repo.load();
    let slot = profiles
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found(id))?;
    *slot = draft.into_profile(id);
    let updated = slot.clone();
    repo.replace(profiles)?;
    tracing::info!(%id, "profile updated");
    Ok(updated)
}

/// Remove profile `id` and return it.
///
/// Assignments already pointing at the id are left alone; they become
/// dangling and resolve to the placeholder label.
///
/// # Errors
///
/// Returns `CoreError::NotFound` (wrapped) for an unknown id, or a storage error.
pub fn remove_profile<R: ProfileRepository + ?Sized>(
    repo: &mut R,
    id: ProfileId,
) -> Result<Profile, StoreError> {
    let mut profiles = repo.load();
    let index = profiles
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| not_found(id))?;
    let removed = profiles.remove(index);
    repo.replace(profiles)?;
    tracing::info!(%id, "profile removed");
    Ok(removed)
}

/// Look up a profile by id in the current snapshot.
pub fn find_profile<R: ProfileRepository + ?Sized>(repo: &R, id: ProfileId) -> Option<Profile> {
    repo.load().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::memory::MemoryProfileRepository;
    use pretty_assertions::assert_eq;
    use rota_core::enums::Role;

    fn seeded() -> MemoryProfileRepository {
        MemoryProfileRepository::new(vec![
            Profile::new(ProfileId(1), "Ana", 20, [Role::Audio, Role::Video]),
            Profile::new(ProfileId(2), "Beto", 15, [Role::Audio, Role::Video]),
        ])
    }

    #[test]
    fn add_appends_with_fresh_id() {
        let mut repo = seeded();
        let added = add_profile(&mut repo, ProfileDraft::new(" Carla ", 33, [Role::Usher])).unwrap();
        assert_eq!(added.name, "Carla");
        assert!(added.id > ProfileId(2));

        let names: Vec<String> = repo.load().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Ana", "Beto", "Carla"]);
    }

    #[test]
    fn add_rejects_invalid_draft_without_writing() {
        let mut repo = seeded();
        let err = add_profile(&mut repo, ProfileDraft::new("", 33, [Role::Usher])).unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::Validation(_))));
        assert_eq!(repo.writes(), 0);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut repo = seeded();
        let updated = update_profile(
            &mut repo,
            ProfileId(1),
            ProfileDraft::new("Ana María", 21, [Role::Platform]),
        )
        .unwrap();
        assert_eq!(updated.id, ProfileId(1));

        let profiles = repo.load();
        assert_eq!(profiles[0].name, "Ana María");
        assert_eq!(profiles[0].age, 21);
        assert!(profiles[0].is_qualified_for(Role::Platform));
        assert!(!profiles[0].is_qualified_for(Role::Audio));
        assert_eq!(profiles[1].id, ProfileId(2));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut repo = seeded();
        let err = update_profile(&mut repo, ProfileId(99), ProfileDraft::new("X", 1, [Role::Usher]))
            .unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::NotFound { .. })));
    }

    #[test]
    fn remove_drops_profile() {
        let mut repo = seeded();
        let removed = remove_profile(&mut repo, ProfileId(2)).unwrap();
        assert_eq!(removed.name, "Beto");
        assert_eq!(repo.load().len(), 1);
        assert!(find_profile(&repo, ProfileId(2)).is_none());
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut repo = seeded();
        assert!(remove_profile(&mut repo, ProfileId(42)).is_err());
        assert_eq!(repo.writes(), 0);
    }
}
