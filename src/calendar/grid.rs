use chrono::{Datelike, Duration, NaiveDate};

use super::ViewMode;

/// Six full weeks, whatever the month.
pub const MONTH_GRID_CELLS: usize = 42;
pub const DAYS_IN_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_period: bool,
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    // 31 days past the 1st always lands inside the following month
    let next_month = first_of_month(first_of_month(date) + Duration::days(31));
    next_month - Duration::days(1)
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Trailing days of the previous month, the whole month, then leading days
/// of the next month until the grid holds 42 cells.
pub fn build_month_grid(reference: NaiveDate) -> Vec<CalendarCell> {
    let first = first_of_month(reference);
    let grid_start = start_of_week(first);

    (0..MONTH_GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            CalendarCell {
                date,
                is_current_period: date.year() == first.year() && date.month() == first.month(),
            }
        })
        .collect()
}

pub fn build_week_grid(reference: NaiveDate) -> Vec<CalendarCell> {
    let sunday = start_of_week(reference);

    (0..DAYS_IN_WEEK as i64)
        .map(|offset| CalendarCell {
            date: sunday + Duration::days(offset),
            is_current_period: true,
        })
        .collect()
}

pub fn build_grid(reference: NaiveDate, mode: ViewMode) -> Vec<CalendarCell> {
    match mode {
        ViewMode::Month => build_month_grid(reference),
        ViewMode::Week => build_week_grid(reference),
    }
}
