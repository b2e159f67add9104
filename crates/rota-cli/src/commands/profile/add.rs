use anyhow::Context;
use rota_core::entities::ProfileDraft;
use rota_store::roster::add_profile;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_roles;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    name: &str,
    age: u32,
    roles: &[String],
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = ProfileDraft::new(name, age, parse_roles(roles)?);
    let profile = add_profile(&mut ctx.repo, draft).context("failed to add profile")?;
    output(&profile, flags.format, || {
        super::profile_table(std::slice::from_ref(&profile))
    })
}
