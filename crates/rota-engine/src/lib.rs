//! # rota-engine
//!
//! The assignment engine: given a roster and a month, decide who serves in
//! which role at each meeting.
//!
//! - [`calendar`] derives the meeting dates (Thursdays and Saturdays)
//! - [`eligibility`] filters the roster down to who may fill a slot right now
//! - [`generator`] fills a whole month with random eligible picks
//! - [`assignment`] holds the per-date, per-role map that overrides write into
//! - [`display`] turns a slot into a label, never failing on dangling ids
//! - [`engine`] ties these together behind [`AssignmentEngine`]
//!
//! All of it is synchronous and single-owner. The only state lives in
//! [`AssignmentEngine`]; everything else is a pure function of its inputs.

pub mod assignment;
pub mod calendar;
pub mod display;
pub mod eligibility;
pub mod engine;
pub mod generator;
pub mod random;

pub use assignment::AssignmentMap;
pub use display::SlotLabel;
pub use engine::{AssignmentEngine, ScheduleRow, ScheduleSlot};
pub use random::{RandomSource, RngSource, ScriptedSource, fresh_seed};
