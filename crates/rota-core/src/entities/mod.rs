//! Entity structs for Rota domain objects.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` so the profile
//! store can be validated against a generated schema.

mod profile;

pub use profile::{Profile, ProfileDraft};
