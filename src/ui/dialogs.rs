// src/ui/dialogs.rs
//
// Details, editor and delete confirmation, shown in the side panel.

use iced::widget::{button, checkbox, column, pick_list, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::form::{EventForm, FormField};
use crate::messages::Message;
use crate::models::{Event, EventType, RsvpStatus};
use crate::policy::Editability;
use crate::ui::styles::{
    DestructiveButtonStyle, GhostButtonStyle, InputStyle, PrimaryButtonStyle, ZEN_SUBTEXT,
    ZEN_TEXT,
};
use crate::ui::{detail_row, rsvp_badge, section_header};
use crate::ui_state::{Dialog, EditorState, EditorTarget, UiState};

/// Answers a viewer can give; `Pending` is only ever the starting state.
pub(crate) const RSVP_CHOICES: [RsvpStatus; 2] = [RsvpStatus::Accepted, RsvpStatus::Declined];

/// The open dialog, if any.
pub fn view_dialog(state: &UiState) -> Option<Element<'_, Message>> {
    let content = match &state.dialog {
        Dialog::Closed => return None,
        Dialog::Details(event) => view_details(state, event),
        Dialog::Editor(editor) => view_editor(editor),
        Dialog::ConfirmDelete(event) => view_confirm_delete(state, event),
    };
    Some(scrollable(content).height(Length::Fill).into())
}

fn close_button() -> Element<'static, Message> {
    button(text("Close").size(13))
        .on_press(Message::CloseDialog)
        .style(iced::theme::Button::Custom(Box::new(GhostButtonStyle)))
        .into()
}

fn view_details<'a>(state: &'a UiState, event: &'a Event) -> Element<'a, Message> {
    let editability = state.editability(event);

    let dates = match (event.effective_start(), event.effective_end()) {
        (Some(start), Some(end)) if start != end => {
            format!("{} to {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
        }
        (Some(start), _) => start.format("%A, %b %-d, %Y").to_string(),
        _ => event.start_date.clone(),
    };

    let mut body = Column::new()
        .spacing(12)
        .push(section_header(&event.title))
        .push(detail_row("Type", event.event_type.label().to_string()))
        .push(detail_row("When", format!("{} · {}", dates, event.time_label())));

    if let Some(location) = event.location.as_deref().filter(|l| !l.is_empty()) {
        body = body.push(detail_row("Location", location.to_string()));
    }
    if event.is_virtual {
        let link = event
            .meeting_link
            .clone()
            .unwrap_or_else(|| "Virtual meeting".to_string());
        body = body.push(detail_row("Online", link));
    }
    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        body = body.push(detail_row("Description", description.to_string()));
    }
    if let Some(organizer) = event.organizer_name.as_deref().filter(|n| !n.is_empty()) {
        body = body.push(detail_row("Organizer", organizer.to_string()));
    }
    if event.is_company_wide {
        body = body.push(text("Company-wide").size(12).style(iced::theme::Text::Color(ZEN_SUBTEXT)));
    }

    if !event.attendees.is_empty() {
        let mut attendees = Column::new().spacing(4).push(
            text("Attendees")
                .size(11)
                .style(iced::theme::Text::Color(ZEN_SUBTEXT)),
        );
        for attendee in &event.attendees {
            attendees = attendees.push(
                row![
                    text(&attendee.name).size(13).style(iced::theme::Text::Color(ZEN_TEXT)),
                    rsvp_badge(attendee.status),
                ]
                .spacing(8)
                .align_items(Alignment::Center),
            );
        }
        body = body.push(attendees);
    }

    if let Editability::SystemDerived(source) = editability {
        body = body.push(
            text(format!("Generated from {} records and cannot be changed here", source.label()))
                .size(12)
                .style(iced::theme::Text::Color(ZEN_SUBTEXT)),
        );
    }

    if editability.can_respond() {
        let current = state.viewer_response(event);
        let mut choices = row![].spacing(8);
        for status in RSVP_CHOICES {
            let style: Box<dyn button::StyleSheet<Style = iced::Theme>> = if current == Some(status) {
                Box::new(PrimaryButtonStyle)
            } else {
                Box::new(GhostButtonStyle)
            };
            let mut choice = button(text(status.label()).size(13))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(style));
            if !state.busy {
                choice = choice.on_press(Message::Respond(status));
            }
            choices = choices.push(choice);
        }
        body = body.push(
            column![
                text("Your response")
                    .size(11)
                    .style(iced::theme::Text::Color(ZEN_SUBTEXT)),
                choices,
            ]
            .spacing(4),
        );
    }

    let mut actions = row![].spacing(10).align_items(Alignment::Center);
    if editability.can_edit() {
        actions = actions.push(
            button(text("Edit").size(13))
                .on_press(Message::EditEvent)
                .padding([6, 14])
                .style(iced::theme::Button::Custom(Box::new(PrimaryButtonStyle))),
        );
    }
    if editability.can_delete() {
        actions = actions.push(
            button(text("Delete").size(13))
                .on_press(Message::RequestDelete)
                .padding([6, 14])
                .style(iced::theme::Button::Custom(Box::new(DestructiveButtonStyle))),
        );
    }
    actions = actions.push(iced::widget::horizontal_space()).push(close_button());

    body.push(actions).into()
}

fn labeled<'a>(label: &'static str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![
        text(label).size(11).style(iced::theme::Text::Color(ZEN_SUBTEXT)),
        input.into(),
    ]
    .spacing(4)
    .into()
}

fn input<'a>(
    placeholder: &str,
    value: &'a str,
    on_input: impl Fn(String) -> FormField + 'a,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |value| Message::Form(on_input(value)))
        .padding(8)
        .style(iced::theme::TextInput::Custom(Box::new(InputStyle)))
        .into()
}

fn view_editor(editor: &EditorState) -> Element<'_, Message> {
    let form: &EventForm = &editor.form;
    let heading = match editor.target {
        EditorTarget::Create => "New event",
        EditorTarget::Edit(_) => "Edit event",
    };

    let mut body = Column::new()
        .spacing(12)
        .push(section_header(heading))
        .push(labeled("Title", input("Event title", &form.title, FormField::Title)))
        .push(labeled(
            "Type",
            pick_list(&EventType::ALL[..], Some(form.event_type), |kind| {
                Message::Form(FormField::EventType(kind))
            })
            .width(Length::Fill),
        ))
        .push(labeled(
            "Description",
            input("Optional", &form.description, FormField::Description),
        ))
        .push(row![
            labeled("Start date", input("YYYY-MM-DD", &form.start_date, FormField::StartDate)),
            labeled("End date", input("YYYY-MM-DD", &form.end_date, FormField::EndDate)),
        ]
        .spacing(10))
        .push(
            checkbox("All day", form.all_day)
                .on_toggle(|value| Message::Form(FormField::AllDay(value))),
        );

    if !form.all_day {
        body = body.push(
            row![
                labeled("Start time", input("HH:MM", &form.start_time, FormField::StartTime)),
                labeled("End time", input("HH:MM", &form.end_time, FormField::EndTime)),
            ]
            .spacing(10),
        );
    }

    body = body
        .push(labeled("Location", input("Optional", &form.location, FormField::Location)))
        .push(
            checkbox("Virtual meeting", form.is_virtual)
                .on_toggle(|value| Message::Form(FormField::IsVirtual(value))),
        );
    if form.is_virtual {
        body = body.push(labeled(
            "Meeting link",
            input("https://", &form.meeting_link, FormField::MeetingLink),
        ));
    }

    body = body
        .push(
            checkbox("Visible to everyone", form.is_public)
                .on_toggle(|value| Message::Form(FormField::IsPublic(value))),
        )
        .push(
            checkbox("Company-wide", form.is_company_wide)
                .on_toggle(|value| Message::Form(FormField::IsCompanyWide(value))),
        )
        .push(labeled("Color", input("#3B82F6", &form.color, FormField::Color)));

    let mut save = button(text(if editor.saving { "Saving…" } else { "Save" }).size(13))
        .padding([8, 16])
        .style(iced::theme::Button::Custom(Box::new(PrimaryButtonStyle)));
    if !editor.saving {
        save = save.on_press(Message::SaveEvent);
    }

    body.push(
        row![save, iced::widget::horizontal_space(), close_button()]
            .spacing(10)
            .align_items(Alignment::Center),
    )
    .into()
}

fn view_confirm_delete<'a>(state: &'a UiState, event: &'a Event) -> Element<'a, Message> {
    let mut delete = button(text(if state.busy { "Deleting…" } else { "Delete" }).size(13))
        .padding([8, 16])
        .style(iced::theme::Button::Custom(Box::new(DestructiveButtonStyle)));
    if !state.busy {
        delete = delete.on_press(Message::ConfirmDelete);
    }

    column![
        section_header("Delete event"),
        text(format!("Delete \"{}\"? This cannot be undone.", event.title))
            .size(14)
            .style(iced::theme::Text::Color(ZEN_TEXT)),
        row![delete, iced::widget::horizontal_space(), close_button()]
            .spacing(10)
            .align_items(Alignment::Center),
    ]
    .spacing(16)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsvp_choices_are_answers_only() {
        assert_eq!(RSVP_CHOICES, [RsvpStatus::Accepted, RsvpStatus::Declined]);
        assert!(!RSVP_CHOICES.contains(&RsvpStatus::Pending));
    }
}
