use rota_store::ProfileRepository;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profiles = ctx.repo.load();
    output(&profiles, flags.format, || super::profile_table(&profiles))
}
