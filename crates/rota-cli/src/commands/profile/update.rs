use anyhow::Context;
use rota_core::entities::ProfileDraft;
use rota_store::roster::{find_profile, update_profile};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_profile_id, parse_roles};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    id: &str,
    name: Option<&str>,
    age: Option<u32>,
    roles: &[String],
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let id = parse_profile_id(id)?;
    let current = find_profile(&ctx.repo, id).with_context(|| format!("profile {id} not found"))?;

    let draft = ProfileDraft {
        name: name.map_or(current.name, str::to_string),
        age: age.unwrap_or(current.age),
        roles: if roles.is_empty() {
            current.roles
        } else {
            parse_roles(roles)?
        },
    };

    let profile = update_profile(&mut ctx.repo, id, draft)
        .with_context(|| format!("failed to update profile {id}"))?;
    output(&profile, flags.format, || {
        super::profile_table(std::slice::from_ref(&profile))
    })
}
