use rota_core::entities::Profile;

use super::ProfileRepository;
use crate::error::StoreError;

/// Roster held in memory. Used by tests and by callers that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileRepository {
    profiles: Vec<Profile>,
    writes: usize,
}

impl MemoryProfileRepository {
    #[must_use]
    pub const fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            writes: 0,
        }
    }

    /// Number of `replace` calls so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl ProfileRepository for MemoryProfileRepository {
    fn load(&self) -> Vec<Profile> {
        self.profiles.clone()
    }

    fn replace(&mut self, profiles: Vec<Profile>) -> Result<(), StoreError> {
        self.profiles = profiles;
        self.writes += 1;
        Ok(())
    }
}
