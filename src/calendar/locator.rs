use chrono::NaiveDate;

use super::CalendarCell;
use crate::models::Event;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD`, the form the backend uses for dates.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Reads the leading `YYYY-MM-DD` of a backend date string; a trailing
/// time component (`2024-03-10T09:00:00`) is ignored.
pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, DATE_KEY_FORMAT).ok()
}

/// Events overlapping `date`, in the order they were fetched.
pub fn events_on_date(date: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|event| event.occurs_on(date)).collect()
}

pub fn events_by_day<'a>(
    cells: &[CalendarCell],
    events: &'a [Event],
) -> Vec<(CalendarCell, Vec<&'a Event>)> {
    cells
        .iter()
        .map(|cell| (*cell, events_on_date(cell.date, events)))
        .collect()
}
