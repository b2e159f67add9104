use chrono::NaiveDate;
use rota_engine::calendar::meeting_dates;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MeetingsArgs;
use crate::commands::shared::parse::parse_month;
use crate::output::{Table, output};

#[derive(Debug, Serialize)]
struct Meeting {
    date: NaiveDate,
    weekday: String,
}

/// Handle `rota meetings`.
pub fn handle(args: &MeetingsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let month = parse_month(args.month.as_deref())?;
    let meetings = meeting_dates(month)
        .into_iter()
        .map(|date| Meeting {
            date,
            weekday: date.format("%A").to_string(),
        })
        .collect::<Vec<_>>();

    output(&meetings, flags.format, || {
        let mut table = Table::new(["date", "weekday"]);
        for meeting in &meetings {
            table.push_row(vec![meeting.date.to_string(), meeting.weekday.clone()]);
        }
        table
    })
}
