use anyhow::Context;
use chrono::NaiveDate;
use rota_core::enums::Role;
use rota_core::ids::ProfileId;
use rota_engine::{AssignmentEngine, RandomSource};
use rota_store::ProfileRepository;

use super::parse::{parse_date, parse_profile_id, parse_role};

/// One `--set DATE:role=id` argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotOverride {
    pub date: NaiveDate,
    pub role: Role,
    pub id: ProfileId,
}

pub fn parse_override(raw: &str) -> anyhow::Result<SlotOverride> {
    let (date, assignment) = raw
        .split_once(':')
        .with_context(|| format!("invalid override '{raw}' (expected YYYY-MM-DD:role=id)"))?;
    let (role, id) = assignment
        .split_once('=')
        .with_context(|| format!("invalid override '{raw}' (expected YYYY-MM-DD:role=id)"))?;

    Ok(SlotOverride {
        date: parse_date(date)?,
        role: parse_role(role)?,
        id: parse_profile_id(id)?,
    })
}

/// Parse every override first, then write them in order.
pub fn apply_overrides<R, S>(engine: &mut AssignmentEngine<R, S>, raw: &[String]) -> anyhow::Result<()>
where
    R: ProfileRepository,
    S: RandomSource,
{
    let overrides = raw
        .iter()
        .map(|value| parse_override(value))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for slot in overrides {
        if !engine.meetings().contains(&slot.date) {
            tracing::warn!(date = %slot.date, "override is not on a meeting of the selected month");
        }
        engine.override_assignment(slot.date, slot.role, slot.id);
    }
    Ok(())
}
