use chrono::{Duration, Months, NaiveDate};

use super::grid::start_of_week;
use super::ViewMode;

/// Moves the reference date by `step` months or weeks. Month steps keep the
/// day of month where possible and clamp to the target month's last day.
pub fn shift_period(reference: NaiveDate, mode: ViewMode, step: i32) -> NaiveDate {
    match mode {
        ViewMode::Month => {
            let months = Months::new(step.unsigned_abs());
            let shifted = if step >= 0 {
                reference.checked_add_months(months)
            } else {
                reference.checked_sub_months(months)
            };
            shifted.unwrap_or(reference)
        }
        ViewMode::Week => reference
            .checked_add_signed(Duration::weeks(i64::from(step)))
            .unwrap_or(reference),
    }
}

pub fn period_title(reference: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Month => reference.format("%B %Y").to_string(),
        ViewMode::Week => {
            let start = start_of_week(reference);
            let end = start + Duration::days(6);
            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
        }
    }
}
