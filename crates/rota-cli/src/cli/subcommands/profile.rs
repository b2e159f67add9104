use clap::Subcommand;

/// Roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// List profiles in roster order.
    List,
    /// Add a profile.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        /// Qualified role. Repeatable.
        #[arg(long = "role", required = true)]
        roles: Vec<String>,
    },
    /// Update a profile. Omitted fields keep their current value.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        /// Replaces the whole role set. Repeatable.
        #[arg(long = "role")]
        roles: Vec<String>,
    },
    /// Remove a profile.
    Remove { id: String },
}
