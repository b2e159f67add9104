//! # rota-store
//!
//! Persistence for the Rota roster.
//!
//! The engine never touches storage directly: it is handed a
//! [`ProfileRepository`] exposing a whole-list `load`/`replace` pair.
//! Two implementations ship here:
//! - [`MemoryProfileRepository`] for tests and embedding
//! - [`JsonFileProfileRepository`], a single JSON array on disk, replaced atomically
//!
//! [`roster`] layers add/update/remove on top of `replace`.

pub mod error;
pub mod repos;
pub mod roster;

pub use error::StoreError;
pub use repos::ProfileRepository;
pub use repos::json_file::JsonFileProfileRepository;
pub use repos::memory::MemoryProfileRepository;
