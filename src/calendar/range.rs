use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::grid::{first_of_month, last_of_month, start_of_week};
use super::{date_key, ViewMode};

/// Month fetches reach one week into each neighbouring month. That does not
/// always cover the 42-cell grid: a 28-day month starting on Sunday leaves
/// the grid's last week outside the range.
pub const MONTH_RANGE_PADDING_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VisibleRange {
    pub fn start_key(&self) -> String {
        date_key(self.start)
    }

    pub fn end_key(&self) -> String {
        date_key(self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn visible_range(reference: NaiveDate, mode: ViewMode) -> VisibleRange {
    match mode {
        ViewMode::Month => VisibleRange {
            start: first_of_month(reference) - Duration::days(MONTH_RANGE_PADDING_DAYS),
            end: last_of_month(reference) + Duration::days(MONTH_RANGE_PADDING_DAYS),
        },
        ViewMode::Week => {
            let start = start_of_week(reference);
            VisibleRange {
                start,
                end: start + Duration::days(6),
            }
        }
    }
}

/// Which system-derived entries and which department to ask the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilters {
    pub include_leaves: bool,
    pub include_birthdays: bool,
    pub include_anniversaries: bool,
    pub department_id: Option<String>,
}

impl Default for EventFilters {
    fn default() -> Self {
        Self {
            include_leaves: true,
            include_birthdays: true,
            include_anniversaries: true,
            department_id: None,
        }
    }
}

/// Query string of `GET /calendar/events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventQuery {
    pub start_date: String,
    pub end_date: String,
    pub include_leaves: bool,
    pub include_birthdays: bool,
    pub include_anniversaries: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
}

impl EventQuery {
    pub fn new(range: VisibleRange, filters: &EventFilters) -> Self {
        Self {
            start_date: range.start_key(),
            end_date: range.end_key(),
            include_leaves: filters.include_leaves,
            include_birthdays: filters.include_birthdays,
            include_anniversaries: filters.include_anniversaries,
            department_id: filters.department_id.clone(),
        }
    }
}
