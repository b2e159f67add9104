use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags),
        Commands::Meetings(args) => commands::meetings::handle(&args, flags),
        Commands::Schedule(args) => commands::schedule::handle(&args, ctx, flags),
        Commands::Candidates(args) => commands::candidates::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
