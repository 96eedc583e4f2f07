use chrono::{Datelike, Duration, NaiveDate, Weekday};
use teamcal::calendar::{
    build_grid, build_month_grid, build_week_grid, date_key, events_on_date, visible_range,
    EventFilters, EventQuery, ViewMode,
};
use teamcal::models::Event;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn event(id: &str, start: &str, end: Option<&str>) -> Event {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Event {}", id),
        "start_date": start,
        "end_date": end,
    }))
    .unwrap()
}

#[test]
fn test_every_month_grid_is_six_sunday_aligned_weeks() {
    let mut reference = date(2023, 1, 1);
    while reference < date(2026, 1, 1) {
        let grid = build_month_grid(reference);
        assert_eq!(grid.len(), 42, "grid for {}", reference);
        assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        assert!(grid[0].date <= reference.with_day(1).unwrap());

        for pair in grid.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }

        let in_month: Vec<_> = grid.iter().filter(|cell| cell.is_current_period).collect();
        assert!(in_month.iter().all(|cell| cell.date.month() == reference.month()));
        assert_eq!(in_month[0].date.day(), 1);

        reference = reference.checked_add_months(chrono::Months::new(1)).unwrap();
    }
}

#[test]
fn test_march_2024_month_view() {
    let grid = build_grid(date(2024, 3, 15), ViewMode::Month);
    assert_eq!(grid.first().unwrap().date, date(2024, 2, 25));
    assert_eq!(grid.last().unwrap().date, date(2024, 4, 6));
    assert!(!grid[0].is_current_period);
    assert!(grid[5].is_current_period);

    let range = visible_range(date(2024, 3, 15), ViewMode::Month);
    assert_eq!(date_key(range.start), "2024-02-23");
    assert_eq!(date_key(range.end), "2024-04-07");
}

#[test]
fn test_week_view_around_reference() {
    let grid = build_week_grid(date(2024, 3, 15));
    let days: Vec<_> = grid.iter().map(|cell| cell.date).collect();
    assert_eq!(days.first(), Some(&date(2024, 3, 10)));
    assert_eq!(days.last(), Some(&date(2024, 3, 16)));
    assert!(grid.iter().all(|cell| cell.is_current_period));

    let range = visible_range(date(2024, 3, 15), ViewMode::Week);
    assert_eq!(range.start, date(2024, 3, 10));
    assert_eq!(range.end, date(2024, 3, 16));
}

#[test]
fn test_week_view_crossing_year_boundary() {
    let grid = build_week_grid(date(2025, 1, 1));
    assert_eq!(grid[0].date, date(2024, 12, 29));
    assert_eq!(grid[6].date, date(2025, 1, 4));
}

#[test]
fn test_query_reflects_filters() {
    let filters = EventFilters {
        include_birthdays: false,
        department_id: Some("3".to_string()),
        ..EventFilters::default()
    };
    let query = EventQuery::new(visible_range(date(2024, 3, 15), ViewMode::Week), &filters);
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value["start_date"], "2024-03-10");
    assert_eq!(value["end_date"], "2024-03-16");
    assert_eq!(value["include_birthdays"], false);
    assert_eq!(value["include_leaves"], true);
    assert_eq!(value["department_id"], "3");
}

#[test]
fn test_multi_day_leave_shows_on_each_day() {
    let events = vec![
        event("leave-1", "2024-03-11", Some("2024-03-13")),
        event("2", "2024-03-12", None),
        event("3", "2024-03-14", None),
    ];

    assert!(events_on_date(date(2024, 3, 10), &events).is_empty());
    assert_eq!(events_on_date(date(2024, 3, 11), &events).len(), 1);

    let on_12th: Vec<_> = events_on_date(date(2024, 3, 12), &events)
        .into_iter()
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(on_12th, vec!["leave-1", "2"]);

    assert_eq!(events_on_date(date(2024, 3, 13), &events).len(), 1);
    assert_eq!(events_on_date(date(2024, 3, 14), &events)[0].id, "3");
}

#[test]
fn test_timestamp_dates_are_reduced_to_days() {
    let events = vec![event("9", "2024-03-12T09:00:00", Some("2024-03-12T17:00:00"))];
    assert_eq!(events_on_date(date(2024, 3, 12), &events).len(), 1);
    assert!(events_on_date(date(2024, 3, 13), &events).is_empty());
}
