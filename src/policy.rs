//! Who may do what with an event.
//!
//! System-derived entries are synthesized by the backend from HR records and
//! are recognisable only by their id prefix. They are read-only for everyone.
//! User-created events are editable by administrators and by their organizer;
//! anybody who can see a user-created event may RSVP to it.

use crate::models::{Event, RsvpStatus, Viewer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemSource {
    Leave,
    Birthday,
    Anniversary,
    Holiday,
}

impl SystemSource {
    pub fn label(&self) -> &'static str {
        match self {
            SystemSource::Leave => "leave",
            SystemSource::Birthday => "birthday",
            SystemSource::Anniversary => "work anniversary",
            SystemSource::Holiday => "holiday",
        }
    }
}

const SYSTEM_ID_PREFIXES: [(&str, SystemSource); 4] = [
    ("leave-", SystemSource::Leave),
    ("birthday-", SystemSource::Birthday),
    ("anniversary-", SystemSource::Anniversary),
    ("holiday-", SystemSource::Holiday),
];

pub fn system_source(id: &str) -> Option<SystemSource> {
    SYSTEM_ID_PREFIXES
        .iter()
        .find(|(prefix, _)| id.starts_with(prefix))
        .map(|(_, source)| *source)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editability {
    SystemDerived(SystemSource),
    Editable,
    ReadOnly,
}

impl Editability {
    pub fn can_edit(&self) -> bool {
        matches!(self, Editability::Editable)
    }

    pub fn can_delete(&self) -> bool {
        matches!(self, Editability::Editable)
    }

    pub fn can_respond(&self) -> bool {
        !matches!(self, Editability::SystemDerived(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Edit,
    Delete,
    Respond,
}

pub fn editability(event: &Event, viewer: &Viewer) -> Editability {
    if let Some(source) = event.system_source() {
        return Editability::SystemDerived(source);
    }

    let is_organizer = event
        .organizer_id
        .as_deref()
        .is_some_and(|organizer| !viewer.id.is_empty() && organizer == viewer.id);

    if viewer.is_admin() || is_organizer {
        Editability::Editable
    } else {
        Editability::ReadOnly
    }
}

pub fn available_actions(event: &Event, viewer: &Viewer) -> Vec<EventAction> {
    let state = editability(event, viewer);
    let mut actions = Vec::new();
    if state.can_edit() {
        actions.push(EventAction::Edit);
    }
    if state.can_delete() {
        actions.push(EventAction::Delete);
    }
    if state.can_respond() {
        actions.push(EventAction::Respond);
    }
    actions
}

/// The viewer's current answer, matched by attendee name.
pub fn viewer_response(event: &Event, viewer: &Viewer) -> Option<RsvpStatus> {
    if viewer.name.is_empty() {
        return None;
    }
    event.attendee_status(&viewer.name)
}
