// Calendar date logic
// Grid construction, visible-range queries and per-day event lookup.
// Everything here is pure: a reference date plus a flat event list in, values out.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod grid;
pub mod locator;
pub mod navigation;
pub mod range;

pub use grid::{build_grid, build_month_grid, build_week_grid, CalendarCell};
pub use locator::{date_key, events_by_day, events_on_date, parse_date_key};
pub use navigation::{period_title, shift_period};
pub use range::{visible_range, EventFilters, EventQuery, VisibleRange};

/// Shape of the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Month => f.write_str("Month"),
            ViewMode::Week => f.write_str("Week"),
        }
    }
}
