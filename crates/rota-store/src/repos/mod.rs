//! Profile repositories.
//!
//! A repository owns the roster. It only knows how to hand out a full snapshot
//! and how to overwrite everything at once; it does not check ids for
//! uniqueness or validate profiles.

pub mod json_file;
pub mod memory;

use rota_core::entities::Profile;

use crate::error::StoreError;

/// Whole-list access to the stored roster.
pub trait ProfileRepository {
    /// Current snapshot, in insertion order. Empty when nothing is stored or
    /// the stored data cannot be read.
    fn load(&self) -> Vec<Profile>;

    /// Overwrite the stored collection with `profiles`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written. In-memory
    /// repositories never fail.
    fn replace(&mut self, profiles: Vec<Profile>) -> Result<(), StoreError>;
}

impl<R: ProfileRepository + ?Sized> ProfileRepository for &mut R {
    fn load(&self) -> Vec<Profile> {
        (**self).load()
    }

    fn replace(&mut self, profiles: Vec<Profile>) -> Result<(), StoreError> {
        (**self).replace(profiles)
    }
}

impl<R: ProfileRepository + ?Sized> ProfileRepository for Box<R> {
    fn load(&self) -> Vec<Profile> {
        (**self).load()
    }

    fn replace(&mut self, profiles: Vec<Profile>) -> Result<(), StoreError> {
        (**self).replace(profiles)
    }
}
