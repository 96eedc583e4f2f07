// src/ui/mod.rs

use iced::widget::{button, column, container, text};
use iced::{Color, Element, Length};

use crate::messages::Message;
use crate::models::{Event, RsvpStatus};
use crate::utils::parse_hex_color;

pub mod calendar;
pub mod dialogs;
pub mod styles;

use styles::{ChipStyle, ZEN_ACCENT, ZEN_SUBTEXT, ZEN_TEXT};

// --- ZEN THEME PALETTE ---
pub mod palette {
    use iced::Color;

    pub const TEXT_MAIN: Color = Color::from_rgb(0.2, 0.2, 0.2); // Soft Charcoal
    pub const TEXT_MUTED: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const ACCENT: Color = Color::from_rgb(0.45, 0.55, 0.50); // Sage Green
    pub const DANGER: Color = Color::from_rgb(0.8, 0.4, 0.4); // Muted Red
}

/// The event's color as an iced color; unparseable values fall back to the
/// type's default.
pub fn event_color(event: &Event) -> Color {
    parse_hex_color(event.display_color())
        .or_else(|| parse_hex_color(event.event_type.default_color()))
        .map(|(r, g, b)| Color::from_rgb8(r, g, b))
        .unwrap_or(ZEN_ACCENT)
}

// --- COMPONENT VIEWS ---

/// Compact colored chip used inside day cells.
pub fn event_chip(event: &Event, compact: bool) -> Element<'_, Message> {
    let label = if compact || event.all_day {
        event.title.clone()
    } else {
        format!("{} {}", event.time_label(), event.title)
    };

    button(text(label).size(11))
        .width(Length::Fill)
        .padding([2, 6])
        .style(iced::theme::Button::Custom(Box::new(ChipStyle(event_color(event)))))
        .on_press(Message::EventSelected(event.id.clone()))
        .into()
}

pub fn rsvp_badge(status: RsvpStatus) -> Element<'static, Message> {
    let color = match status {
        RsvpStatus::Accepted => palette::ACCENT,
        RsvpStatus::Declined => palette::DANGER,
        RsvpStatus::Pending => palette::TEXT_MUTED,
    };
    status_badge(status.label(), color)
}

pub fn status_badge(label: &str, color: Color) -> Element<'static, Message> {
    container(
        text(label.to_string())
            .size(10)
            .style(iced::theme::Text::Color(color)),
    )
    .padding([4, 8])
    .into()
}

// Helper for section headers
pub fn section_header(label: &str) -> Element<'static, Message> {
    text(label.to_string())
        .size(20)
        .style(iced::theme::Text::Color(ZEN_ACCENT))
        .into()
}

/// Label over value, as in the details panel.
pub fn detail_row(label: &str, value: String) -> Element<'static, Message> {
    column![
        text(label.to_string())
            .size(11)
            .style(iced::theme::Text::Color(ZEN_SUBTEXT)),
        text(value).size(14).style(iced::theme::Text::Color(ZEN_TEXT)),
    ]
    .spacing(2)
    .into()
}
