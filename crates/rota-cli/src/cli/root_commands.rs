use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::ProfileCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Manage the roster of profiles.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// List the meeting dates of a month.
    Meetings(MeetingsArgs),
    /// Generate a month's assignments, apply overrides, and print them.
    Schedule(ScheduleArgs),
    /// Show who may fill one slot.
    Candidates(CandidatesArgs),
    /// Print a JSON Schema for stored data.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct MeetingsArgs {
    /// Month as YYYY-MM (defaults to the current month).
    #[arg(long)]
    pub month: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ScheduleArgs {
    /// Month as YYYY-MM (defaults to the current month).
    #[arg(long)]
    pub month: Option<String>,

    /// Override a slot: YYYY-MM-DD:role=profile-id. Repeatable.
    #[arg(long)]
    pub set: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CandidatesArgs {
    /// Meeting date as YYYY-MM-DD.
    #[arg(long)]
    pub date: String,

    /// Role to fill.
    #[arg(long)]
    pub role: String,

    /// Month to generate (defaults to the month containing --date).
    #[arg(long)]
    pub month: Option<String>,

    /// Overrides applied before the query: YYYY-MM-DD:role=profile-id.
    #[arg(long)]
    pub set: Vec<String>,

    /// Free the queried slot first, so its current holder is listed too.
    #[arg(long)]
    pub include_current: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    /// The stored profile list.
    Profiles,
    /// A single profile draft as accepted by `profile add`.
    ProfileDraft,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "profiles")]
    pub kind: SchemaKind,
}
