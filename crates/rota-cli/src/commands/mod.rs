pub mod candidates;
pub mod dispatch;
pub mod meetings;
pub mod profile;
pub mod schedule;
pub mod schema;
pub mod shared;
