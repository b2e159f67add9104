use rota_core::enums::Role;
use rota_engine::eligibility::Violation;
use rota_engine::ScheduleRow;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScheduleArgs;
use crate::commands::shared::overrides::apply_overrides;
use crate::commands::shared::parse::parse_month;
use crate::context::AppContext;
use crate::output::{Table, output};

#[derive(Debug, Serialize)]
struct ScheduleView<'a> {
    month: String,
    seed: u64,
    placeholder: &'a str,
    rows: Vec<ScheduleRow>,
    violations: Vec<Violation>,
}

/// Handle `rota schedule`.
pub fn handle(args: &ScheduleArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let month = parse_month(args.month.as_deref())?;
    let (mut engine, seed) = ctx.engine_for(month);
    apply_overrides(&mut engine, &args.set)?;

    let violations = engine.violations();
    for violation in &violations {
        tracing::warn!(
            date = %violation.date,
            role = %violation.role,
            profile = %violation.profile,
            "{}",
            violation.kind
        );
    }

    let view = ScheduleView {
        month: month.to_string(),
        seed,
        placeholder: ctx.placeholder(),
        rows: engine.schedule(),
        violations,
    };
    output(&view, flags.format, || schedule_table(&view.rows, view.placeholder, view.seed))
}

fn schedule_table(rows: &[ScheduleRow], placeholder: &str, seed: u64) -> Table {
    let headers = ["date", "day"]
        .into_iter()
        .chain(Role::ALL.iter().map(|role| role.as_str()));
    let mut table = Table::new(headers)
        .highlight(placeholder)
        .footer(format!("seed: {seed} (pass --seed {seed} to reproduce)"));
    for row in rows {
        let mut cells = vec![row.date.to_string(), row.date.format("%a").to_string()];
        cells.extend(row.slots.iter().map(|slot| slot.label.render(placeholder)));
        table.push_row(cells);
    }
    table
}
