// src/ui/calendar.rs

use chrono::{Datelike, NaiveDate};
use iced::widget::{button, checkbox, column, container, pick_list, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::calendar::grid::DAYS_IN_WEEK;
use crate::calendar::{events_by_day, period_title, ViewMode};
use crate::messages::Message;
use crate::models::DepartmentOption;
use crate::ui::styles::{
    CardStyle, DayCellStyle, GhostButtonStyle, PrimaryButtonStyle, ToggleStyle, ZEN_SUBTEXT,
    ZEN_TEXT,
};
use crate::ui::{event_chip, palette, rsvp_badge, section_header};
use crate::ui_state::UiState;

/// Chips shown per month cell before collapsing into "+N more".
pub const MAX_CHIPS_PER_DAY: usize = 3;
const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn view_toolbar(state: &UiState) -> Element<'_, Message> {
    let nav_button = |label: &'static str, msg: Message| {
        button(text(label).size(18))
            .on_press(msg)
            .padding([5, 15])
            .style(iced::theme::Button::Custom(Box::new(GhostButtonStyle)))
    };

    let mode_button = |label: &'static str, mode: ViewMode| {
        button(text(label).size(14))
            .on_press(Message::SetViewMode(mode))
            .padding([6, 14])
            .style(iced::theme::Button::Custom(Box::new(ToggleStyle {
                active: state.view_mode == mode,
            })))
    };

    let status = if state.loading { "Loading…" } else { "" };

    row![
        nav_button("‹", Message::PreviousPeriod),
        button(text("Today").size(14))
            .on_press(Message::Today)
            .padding([6, 12])
            .style(iced::theme::Button::Custom(Box::new(GhostButtonStyle))),
        nav_button("›", Message::NextPeriod),
        text(period_title(state.reference_date, state.view_mode))
            .size(24)
            .style(iced::theme::Text::Color(ZEN_TEXT)),
        text(status).size(12).style(iced::theme::Text::Color(ZEN_SUBTEXT)),
        iced::widget::horizontal_space(),
        container(row![mode_button("Month", ViewMode::Month), mode_button("Week", ViewMode::Week)].spacing(2))
            .padding(2)
            .style(iced::theme::Container::Custom(Box::new(CardStyle))),
        button(text("New event").size(14))
            .on_press(Message::OpenCreate(state.selected_date.unwrap_or(state.reference_date)))
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(PrimaryButtonStyle))),
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .into()
}

pub fn view_filters(state: &UiState) -> Element<'_, Message> {
    let options = DepartmentOption::options(&state.departments);
    let selected = options
        .iter()
        .find(|option| option.id == state.filters.department_id)
        .cloned();

    row![
        checkbox("Leaves", state.filters.include_leaves).on_toggle(Message::ToggleLeaves),
        checkbox("Birthdays", state.filters.include_birthdays).on_toggle(Message::ToggleBirthdays),
        checkbox("Anniversaries", state.filters.include_anniversaries)
            .on_toggle(Message::ToggleAnniversaries),
        iced::widget::horizontal_space(),
        pick_list(options, selected, Message::DepartmentSelected)
            .placeholder("All departments")
            .width(220),
    ]
    .spacing(20)
    .align_items(Alignment::Center)
    .into()
}

pub fn view_grid(state: &UiState, today: NaiveDate) -> Element<'_, Message> {
    let cells = state.grid();
    let days = events_by_day(&cells, &state.events);
    let compact = state.view_mode == ViewMode::Month;

    let header = Row::with_children(WEEKDAY_LABELS.iter().map(|label| {
        container(text(*label).size(12).style(iced::theme::Text::Color(ZEN_SUBTEXT)))
            .width(Length::Fill)
            .center_x()
            .into()
    }))
    .spacing(4);

    let mut weeks = Column::new().spacing(4).push(header);
    for week in days.chunks(DAYS_IN_WEEK) {
        let week_row = Row::with_children(week.iter().map(|(cell, events)| {
            let shown = if compact {
                events.len().min(MAX_CHIPS_PER_DAY)
            } else {
                events.len()
            };

            let mut content = Column::new().spacing(3).push(
                text(cell.date.day().to_string())
                    .size(13)
                    .style(iced::theme::Text::Color(if cell.is_current_period {
                        palette::TEXT_MAIN
                    } else {
                        palette::TEXT_MUTED
                    })),
            );
            for &event in events.iter().take(shown) {
                content = content.push(event_chip(event, compact));
            }
            if events.len() > shown {
                content = content.push(
                    text(format!("+{} more", events.len() - shown))
                        .size(11)
                        .style(iced::theme::Text::Color(ZEN_SUBTEXT)),
                );
            }

            let height = if compact { Length::Fixed(110.0) } else { Length::Fixed(360.0) };
            button(content)
                .width(Length::Fill)
                .height(height)
                .padding(6)
                .style(iced::theme::Button::Custom(Box::new(DayCellStyle {
                    in_period: cell.is_current_period,
                    selected: state.selected_date == Some(cell.date),
                    today: cell.date == today,
                })))
                .on_press(Message::DaySelected(cell.date))
                .into()
        }))
        .spacing(4);
        weeks = weeks.push(week_row);
    }

    scrollable(weeks).height(Length::Fill).into()
}

/// Everything happening on the selected day, in backend order.
pub fn view_day_agenda(state: &UiState) -> Element<'_, Message> {
    let Some(date) = state.selected_date else {
        return column![text("Select a day").style(iced::theme::Text::Color(ZEN_SUBTEXT))].into();
    };

    let events = state.events_on(date);
    let mut list = Column::new().spacing(8).push(section_header(&date.format("%A, %B %-d").to_string()));

    if events.is_empty() {
        list = list.push(
            text("No events scheduled")
                .size(14)
                .style(iced::theme::Text::Color(ZEN_SUBTEXT)),
        );
    }

    for event in events {
        let mut line = row![
            event_chip(event, true),
            text(event.time_label()).size(12).style(iced::theme::Text::Color(ZEN_SUBTEXT)),
        ]
        .spacing(8)
        .align_items(Alignment::Center);
        if let Some(status) = state.viewer_response(event) {
            line = line.push(rsvp_badge(status));
        }
        list = list.push(line);
    }

    list.push(
        button(text("Add event on this day").size(13))
            .on_press(Message::OpenCreate(date))
            .style(iced::theme::Button::Custom(Box::new(GhostButtonStyle))),
    )
    .into()
}
