use anyhow::Context;
use rota_store::roster::remove_profile;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_profile_id;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_profile_id(id)?;
    let removed = remove_profile(&mut ctx.repo, id)
        .with_context(|| format!("failed to remove profile {id}"))?;
    output(&removed, flags.format, || {
        super::profile_table(std::slice::from_ref(&removed))
    })
}
