use chrono::NaiveDate;
use rota_core::entities::Profile;
use rota_core::enums::Role;
use rota_core::month::YearMonth;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CandidatesArgs;
use crate::commands::shared::overrides::apply_overrides;
use crate::commands::shared::parse::{parse_date, parse_month, parse_role};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CandidatesView {
    date: NaiveDate,
    role: Role,
    seed: u64,
    include_current: bool,
    candidates: Vec<Profile>,
}

/// Handle `rota candidates`.
pub fn handle(args: &CandidatesArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = parse_date(&args.date)?;
    let role = parse_role(&args.role)?;
    let month = match args.month.as_deref() {
        Some(raw) => parse_month(Some(raw))?,
        None => YearMonth::containing(date),
    };
    anyhow::ensure!(
        month.contains(date),
        "date {date} is outside the selected month {month}"
    );

    let (mut engine, seed) = ctx.engine_for(month);
    apply_overrides(&mut engine, &args.set)?;

    if args.include_current {
        // The slot's own holder is not a conflict for the slot itself.
        engine.clear_assignment(date, role);
    }
    let candidates: Vec<Profile> = engine
        .available_candidates(date, role)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(%date, %role, seed, count = candidates.len(), "candidates computed");
    let view = CandidatesView {
        date,
        role,
        seed,
        include_current: args.include_current,
        candidates,
    };
    output(&view, flags.format, || {
        super::profile::profile_table(&view.candidates).footer(format!("seed: {seed}"))
    })
}
