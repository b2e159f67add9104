//! # rota-core
//!
//! Core types, profile ID generation, and error types for Rota.
//!
//! This crate provides the foundational types shared across all Rota crates:
//! - The closed `Role` enumeration and its legacy tag aliases
//! - `Profile` records and the `ProfileDraft` used by roster edits
//! - `ProfileId` and timestamp-based ID generation
//! - `YearMonth` month selection
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod month;

/// Age (in years) at which a person stops counting as a minor.
pub const AGE_OF_MAJORITY: u32 = 18;
