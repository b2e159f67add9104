mod add;
mod list;
mod remove;
mod update;

use rota_core::entities::Profile;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::context::AppContext;
use crate::output::Table;

/// Handle `rota profile`.
pub fn handle(action: &ProfileCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProfileCommands::List => list::run(ctx, flags),
        ProfileCommands::Add { name, age, roles } => add::run(name, *age, roles, ctx, flags),
        ProfileCommands::Update {
            id,
            name,
            age,
            roles,
        } => update::run(id, name.as_deref(), *age, roles, ctx, flags),
        ProfileCommands::Remove { id } => remove::run(id, ctx, flags),
    }
}

pub fn profile_table(profiles: &[Profile]) -> Table {
    let mut table = Table::new(["id", "name", "age", "roles"]);
    for profile in profiles {
        let roles = profile
            .roles
            .iter()
            .map(|role| role.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.push_row(vec![
            profile.id.to_string(),
            profile.name.clone(),
            profile.age.to_string(),
            roles,
        ]);
    }
    table
}
