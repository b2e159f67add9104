use std::collections::BTreeSet;

use anyhow::Context;
use chrono::NaiveDate;
use rota_core::enums::Role;
use rota_core::ids::ProfileId;
use rota_core::month::YearMonth;

/// `YYYY-MM`, or the current month when absent.
pub fn parse_month(raw: Option<&str>) -> anyhow::Result<YearMonth> {
    match raw {
        Some(raw) => Ok(raw.parse::<YearMonth>()?),
        None => Ok(YearMonth::current()),
    }
}

pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{raw}' (expected YYYY-MM-DD)"))
}

pub fn parse_role(raw: &str) -> anyhow::Result<Role> {
    Ok(raw.parse::<Role>()?)
}

pub fn parse_roles(raw: &[String]) -> anyhow::Result<BTreeSet<Role>> {
    raw.iter().map(|role| parse_role(role)).collect()
}

pub fn parse_profile_id(raw: &str) -> anyhow::Result<ProfileId> {
    Ok(raw.parse::<ProfileId>()?)
}
