//! Meeting dates.

use chrono::{Datelike, NaiveDate, Weekday};
use rota_core::errors::CoreError;
use rota_core::month::YearMonth;

/// Weekdays on which meetings are held.
pub const MEETING_WEEKDAYS: [Weekday; 2] = [Weekday::Thu, Weekday::Sat];

#[must_use]
pub fn is_meeting_day(date: NaiveDate) -> bool {
    MEETING_WEEKDAYS.contains(&date.weekday())
}

/// Every meeting day in `month`, ascending.
#[must_use]
pub fn meeting_dates(month: YearMonth) -> Vec<NaiveDate> {
    month.days().filter(|day| is_meeting_day(*day)).collect()
}

/// [`meeting_dates`] from a raw year and 1-based month.
///
/// # Errors
///
/// Returns `CoreError::InvalidMonth` if the pair is not a calendar month.
pub fn meeting_dates_for(year: i32, month: u32) -> Result<Vec<NaiveDate>, CoreError> {
    Ok(meeting_dates(YearMonth::new(year, month)?))
}
