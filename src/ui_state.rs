//! UI state management module
//!
//! Every piece of state the calendar page shows lives in [`UiState`]:
//! navigation, filters, the fetched data, the open dialog and the
//! notification banner. The UI only changes it through the transition
//! methods below; network calls happen elsewhere and report back through
//! the `finish_*` methods.

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::calendar::{
    self, build_grid, events_on_date, shift_period, CalendarCell, EventFilters, EventQuery,
    ViewMode, VisibleRange,
};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::form::{EventDraft, EventForm, FormField};
use crate::models::{Department, Event, RsvpStatus, Viewer};
use crate::policy::{self, Editability};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorTarget {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub target: EditorTarget,
    pub form: EventForm,
    pub saving: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Details(Event),
    Editor(EditorState),
    ConfirmDelete(Event),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Respond,
}

impl MutationKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            MutationKind::Create | MutationKind::Update => "Failed to save event",
            MutationKind::Delete => "Failed to delete event",
            MutationKind::Respond => "Failed to record response",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            MutationKind::Create => "Event created",
            MutationKind::Update => "Event updated",
            MutationKind::Delete => "Event deleted",
            MutationKind::Respond => "Response recorded",
        }
    }
}

pub const EVENTS_FETCH_FAILED: &str = "Failed to load events";

/// What started an events fetch. Only fetches the user triggered report
/// failure on screen; the startup load just logs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Startup,
    UserAction,
}

/// A fetch the UI asked for; `seq` orders it against other fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub origin: FetchOrigin,
    pub query: EventQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(EventDraft),
    Update { id: String, draft: EventDraft },
}

impl SaveRequest {
    pub fn kind(&self) -> MutationKind {
        match self {
            SaveRequest::Create(_) => MutationKind::Create,
            SaveRequest::Update { .. } => MutationKind::Update,
        }
    }
}

/// Application UI state
#[derive(Debug, Clone)]
pub struct UiState {
    pub reference_date: NaiveDate,
    pub view_mode: ViewMode,
    pub filters: EventFilters,
    pub selected_date: Option<NaiveDate>,
    pub departments: Vec<Department>,
    pub events: Vec<Event>,
    pub dialog: Dialog,
    pub notification: Option<Notification>,
    /// A fetch is in flight
    pub loading: bool,
    /// A delete or RSVP is in flight
    pub busy: bool,
    pub viewer: Viewer,
    discard_stale_responses: bool,
    latest_fetch: u64,
}

impl UiState {
    pub fn new(today: NaiveDate, config: &AppConfig) -> Self {
        Self {
            reference_date: today,
            view_mode: config.default_view,
            filters: config.default_filters(),
            selected_date: Some(today),
            departments: Vec::new(),
            events: Vec::new(),
            dialog: Dialog::Closed,
            notification: None,
            loading: false,
            busy: false,
            viewer: config.viewer.clone(),
            discard_stale_responses: config.discard_stale_responses,
            latest_fetch: 0,
        }
    }

    // ===== Derived views =====

    pub fn grid(&self) -> Vec<CalendarCell> {
        build_grid(self.reference_date, self.view_mode)
    }

    pub fn visible_range(&self) -> VisibleRange {
        calendar::visible_range(self.reference_date, self.view_mode)
    }

    pub fn query(&self) -> EventQuery {
        EventQuery::new(self.visible_range(), &self.filters)
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        events_on_date(date, &self.events)
    }

    pub fn editability(&self, event: &Event) -> Editability {
        policy::editability(event, &self.viewer)
    }

    pub fn viewer_response(&self, event: &Event) -> Option<RsvpStatus> {
        policy::viewer_response(event, &self.viewer)
    }

    // ===== Navigation and filters =====
    // Each of these changes what should be on screen; callers follow up
    // with `begin_fetch`.

    pub fn previous_period(&mut self) {
        self.reference_date = shift_period(self.reference_date, self.view_mode, -1);
    }

    pub fn next_period(&mut self) {
        self.reference_date = shift_period(self.reference_date, self.view_mode, 1);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.reference_date = today;
        self.selected_date = Some(today);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if let Some(selected) = self.selected_date {
            if self.visible_range().contains(selected) {
                self.reference_date = selected;
            }
        }
        self.view_mode = mode;
    }

    pub fn set_include_leaves(&mut self, include: bool) {
        self.filters.include_leaves = include;
    }

    pub fn set_include_birthdays(&mut self, include: bool) {
        self.filters.include_birthdays = include;
    }

    pub fn set_include_anniversaries(&mut self, include: bool) {
        self.filters.include_anniversaries = include;
    }

    pub fn set_department(&mut self, department_id: Option<String>) {
        self.filters.department_id = department_id;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    // ===== Data loading =====

    pub fn begin_fetch(&mut self, origin: FetchOrigin) -> FetchTicket {
        self.latest_fetch += 1;
        self.loading = true;
        FetchTicket {
            seq: self.latest_fetch,
            origin,
            query: self.query(),
        }
    }

    /// Applies a finished fetch. Returns whether the event list was replaced.
    pub fn finish_fetch(
        &mut self,
        seq: u64,
        origin: FetchOrigin,
        result: Result<Vec<Event>, String>,
    ) -> bool {
        let is_latest = seq >= self.latest_fetch;
        if is_latest {
            self.loading = false;
        }
        if !is_latest && self.discard_stale_responses {
            debug!("Discarding stale events response #{} (latest #{})", seq, self.latest_fetch);
            return false;
        }

        match result {
            Ok(events) => {
                info!("Showing {} events (fetch #{})", events.len(), seq);
                self.events = events;
                true
            }
            Err(message) => {
                warn!("Events fetch #{} failed: {}", seq, message);
                if origin == FetchOrigin::UserAction {
                    self.notification = Some(Notification::error(message));
                }
                false
            }
        }
    }

    pub fn set_departments(&mut self, result: Result<Vec<Department>, String>) {
        match result {
            Ok(departments) => {
                info!("Loaded {} departments", departments.len());
                self.departments = departments;
            }
            Err(message) => warn!("Failed to load departments: {}", message),
        }
    }

    // ===== Dialogs =====

    pub fn open_details(&mut self, event: Event) {
        self.selected_date = event.effective_start().or(self.selected_date);
        self.dialog = Dialog::Details(event);
    }

    pub fn open_details_by_id(&mut self, id: &str) -> bool {
        match self.events.iter().find(|event| event.id == id).cloned() {
            Some(event) => {
                self.open_details(event);
                true
            }
            None => {
                warn!("Event {} is no longer loaded", id);
                false
            }
        }
    }

    pub fn open_create(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.dialog = Dialog::Editor(EditorState {
            target: EditorTarget::Create,
            form: EventForm::for_date(date),
            saving: false,
        });
    }

    /// Switches the details dialog to the editor, if the viewer may edit.
    pub fn open_edit(&mut self) -> AppResult<()> {
        let event = self.current_event()?.clone();
        if !self.editability(&event).can_edit() {
            return Err(self.deny("You cannot edit this event"));
        }
        self.dialog = Dialog::Editor(EditorState {
            target: EditorTarget::Edit(event.id.clone()),
            form: EventForm::from_event(&event),
            saving: false,
        });
        Ok(())
    }

    pub fn request_delete(&mut self) -> AppResult<()> {
        let event = self.current_event()?.clone();
        if !self.editability(&event).can_delete() {
            return Err(self.deny("You cannot delete this event"));
        }
        self.dialog = Dialog::ConfirmDelete(event);
        Ok(())
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn update_form(&mut self, field: FormField) {
        if let Dialog::Editor(editor) = &mut self.dialog {
            editor.form.apply(field);
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // ===== Mutations =====

    pub fn begin_save(&mut self) -> AppResult<SaveRequest> {
        let Dialog::Editor(editor) = &mut self.dialog else {
            return Err(AppError::invalid_input("No event form is open"));
        };
        if editor.saving {
            return Err(AppError::invalid_input("Event is already being saved"));
        }

        let draft = match editor.form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                self.notification = Some(Notification::error(err.user_message("Invalid event")));
                return Err(err);
            }
        };

        editor.saving = true;
        Ok(match &editor.target {
            EditorTarget::Create => SaveRequest::Create(draft),
            EditorTarget::Edit(id) => SaveRequest::Update {
                id: id.clone(),
                draft,
            },
        })
    }

    /// Id of the event pending deletion, once the user confirmed.
    pub fn begin_delete(&mut self) -> AppResult<String> {
        let Dialog::ConfirmDelete(event) = &self.dialog else {
            return Err(AppError::invalid_input("No deletion to confirm"));
        };
        let id = event.id.clone();
        if !self.editability(event).can_delete() {
            return Err(self.deny("You cannot delete this event"));
        }
        self.busy = true;
        Ok(id)
    }

    /// Re-responding overwrites the viewer's earlier answer; no history is kept.
    pub fn begin_respond(&mut self, status: RsvpStatus) -> AppResult<(String, RsvpStatus)> {
        let Dialog::Details(event) = &self.dialog else {
            return Err(AppError::invalid_input("No event is open"));
        };
        let id = event.id.clone();
        if !self.editability(event).can_respond() {
            return Err(self.deny("You cannot respond to this event"));
        }
        self.busy = true;
        Ok((id, status))
    }

    /// Applies a finished mutation. On success the dialog closes and the
    /// caller should refetch (returns `true`); on failure the dialog stays
    /// open so the user can retry or cancel.
    pub fn finish_mutation(&mut self, kind: MutationKind, result: Result<(), String>) -> bool {
        self.busy = false;
        if let Dialog::Editor(editor) = &mut self.dialog {
            editor.saving = false;
        }

        match result {
            Ok(()) => {
                info!("{}", kind.success_message());
                self.dialog = Dialog::Closed;
                self.notification = Some(Notification::success(kind.success_message()));
                true
            }
            Err(message) => {
                warn!("{:?} failed: {}", kind, message);
                self.notification = Some(Notification::error(message));
                false
            }
        }
    }

    fn current_event(&self) -> AppResult<&Event> {
        match &self.dialog {
            Dialog::Details(event) | Dialog::ConfirmDelete(event) => Ok(event),
            _ => Err(AppError::not_found("No event is open")),
        }
    }

    fn deny(&mut self, message: &str) -> AppError {
        self.notification = Some(Notification::error(message));
        AppError::permission_denied(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attendee, Role};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> UiState {
        let config = AppConfig {
            viewer: Viewer::new("7", "Sam Lee", Role::Employee),
            ..AppConfig::default()
        };
        UiState::new(date(2024, 3, 15), &config)
    }

    fn event(id: &str, organizer: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": "Retro",
            "event_type": "meeting",
            "start_date": "2024-03-14",
            "start_time": "10:00",
            "end_time": "11:00",
            "organizer_id": organizer,
        }))
        .unwrap()
    }

    #[test]
    fn test_initial_query_is_padded_month() {
        let state = state();
        let query = state.query();
        assert_eq!(query.start_date, "2024-02-23");
        assert_eq!(query.end_date, "2024-04-07");
        assert_eq!(state.grid().len(), 42);
    }

    #[test]
    fn test_navigation_moves_reference_date() {
        let mut state = state();
        state.next_period();
        assert_eq!(state.reference_date, date(2024, 4, 15));
        state.set_view_mode(ViewMode::Week);
        state.previous_period();
        assert_eq!(state.reference_date, date(2024, 4, 8));
        state.go_to_today(date(2024, 3, 15));
        assert_eq!(state.query().start_date, "2024-03-10");
    }

    #[test]
    fn test_switching_to_week_keeps_visible_selection() {
        let mut state = state();
        state.select_date(date(2024, 3, 27));
        state.set_view_mode(ViewMode::Week);
        assert_eq!(state.query().start_date, "2024-03-24");
    }

    #[test]
    fn test_fetch_failure_keeps_previous_events() {
        let mut state = state();
        let ticket = state.begin_fetch(FetchOrigin::UserAction);
        assert!(state.finish_fetch(ticket.seq, ticket.origin, Ok(vec![event("1", "7")])));

        let ticket = state.begin_fetch(FetchOrigin::UserAction);
        assert!(!state.finish_fetch(ticket.seq, ticket.origin, Err(EVENTS_FETCH_FAILED.to_string())));
        assert_eq!(state.events.len(), 1);
        assert!(!state.loading);
        assert_eq!(
            state.notification,
            Some(Notification::error(EVENTS_FETCH_FAILED))
        );
    }

    #[test]
    fn test_startup_fetch_failure_is_only_logged() {
        let mut state = state();
        let ticket = state.begin_fetch(FetchOrigin::Startup);
        assert!(!state.finish_fetch(ticket.seq, ticket.origin, Err(EVENTS_FETCH_FAILED.to_string())));
        assert!(!state.loading);
        assert!(state.events.is_empty());
        assert!(state.notification.is_none());

        // A later user-driven failure still surfaces
        let ticket = state.begin_fetch(FetchOrigin::UserAction);
        state.finish_fetch(ticket.seq, ticket.origin, Err(EVENTS_FETCH_FAILED.to_string()));
        assert_eq!(
            state.notification,
            Some(Notification::error(EVENTS_FETCH_FAILED))
        );
    }

    #[test]
    fn test_last_response_wins_by_default() {
        let mut state = state();
        let first = state.begin_fetch(FetchOrigin::UserAction);
        let second = state.begin_fetch(FetchOrigin::UserAction);
        assert!(state.finish_fetch(second.seq, second.origin, Ok(vec![event("new", "7")])));
        assert!(!state.loading);
        assert!(state.finish_fetch(first.seq, first.origin, Ok(vec![event("old", "7")])));
        assert_eq!(state.events[0].id, "old");
    }

    #[test]
    fn test_stale_responses_dropped_when_configured() {
        let config = AppConfig {
            discard_stale_responses: true,
            ..AppConfig::default()
        };
        let mut state = UiState::new(date(2024, 3, 15), &config);
        let first = state.begin_fetch(FetchOrigin::UserAction);
        let second = state.begin_fetch(FetchOrigin::UserAction);
        state.finish_fetch(second.seq, second.origin, Ok(vec![event("new", "7")]));
        assert!(!state.finish_fetch(first.seq, first.origin, Ok(vec![event("old", "7")])));
        assert_eq!(state.events[0].id, "new");
    }

    #[test]
    fn test_departments_failure_is_silent() {
        let mut state = state();
        state.set_departments(Ok(vec![Department {
            id: "1".to_string(),
            name: "Ops".to_string(),
        }]));
        state.set_departments(Err("boom".to_string()));
        assert_eq!(state.departments.len(), 1);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_create_flow() {
        let mut state = state();
        state.open_create(date(2024, 3, 20));
        state.update_form(FormField::Title("Team lunch".to_string()));
        let request = state.begin_save().unwrap();
        assert_eq!(request.kind(), MutationKind::Create);
        assert!(matches!(&state.dialog, Dialog::Editor(editor) if editor.saving));

        assert!(state.finish_mutation(MutationKind::Create, Ok(())));
        assert_eq!(state.dialog, Dialog::Closed);
        assert_eq!(state.notification, Some(Notification::success("Event created")));
    }

    #[test]
    fn test_invalid_form_keeps_dialog_open() {
        let mut state = state();
        state.open_create(date(2024, 3, 20));
        assert!(state.begin_save().is_err());
        assert!(matches!(&state.dialog, Dialog::Editor(editor) if !editor.saving));
        assert_eq!(state.notification, Some(Notification::error("Title is required")));
    }

    #[test]
    fn test_failed_save_keeps_dialog_open() {
        let mut state = state();
        state.open_create(date(2024, 3, 20));
        state.update_form(FormField::Title("Team lunch".to_string()));
        state.begin_save().unwrap();
        assert!(!state.finish_mutation(MutationKind::Create, Err("Room taken".to_string())));
        assert!(matches!(&state.dialog, Dialog::Editor(editor) if !editor.saving));
        assert_eq!(state.notification, Some(Notification::error("Room taken")));
    }

    #[test]
    fn test_organizer_edit_flow() {
        let mut state = state();
        state.open_details(event("15", "7"));
        state.open_edit().unwrap();
        let request = state.begin_save().unwrap();
        assert!(matches!(request, SaveRequest::Update { ref id, .. } if id == "15"));
    }

    #[test]
    fn test_non_organizer_cannot_edit_or_delete() {
        let mut state = state();
        state.open_details(event("15", "99"));
        assert!(state.open_edit().is_err());
        assert!(state.request_delete().is_err());
        assert!(matches!(state.dialog, Dialog::Details(_)));
        assert!(state.begin_respond(RsvpStatus::Accepted).is_ok());
    }

    #[test]
    fn test_second_response_sends_the_new_answer() {
        let mut state = state();
        let mut event = event("15", "99");
        event.attendees = vec![Attendee {
            name: "Sam Lee".to_string(),
            status: RsvpStatus::Accepted,
        }];
        state.open_details(event);
        assert_eq!(
            state.begin_respond(RsvpStatus::Declined).unwrap(),
            ("15".to_string(), RsvpStatus::Declined)
        );
    }

    #[test]
    fn test_system_event_is_locked() {
        let mut state = state();
        state.open_details(event("leave-3", "7"));
        assert!(state.open_edit().is_err());
        assert!(state.request_delete().is_err());
        assert!(state.begin_respond(RsvpStatus::Accepted).is_err());
    }

    #[test]
    fn test_delete_flow() {
        let mut state = state();
        state.open_details(event("15", "7"));
        state.request_delete().unwrap();
        assert_eq!(state.begin_delete().unwrap(), "15");
        assert!(state.busy);
        assert!(state.finish_mutation(MutationKind::Delete, Ok(())));
        assert!(!state.busy);
        assert_eq!(state.dialog, Dialog::Closed);
    }

    #[test]
    fn test_open_details_by_id() {
        let mut state = state();
        let ticket = state.begin_fetch(FetchOrigin::UserAction);
        state.finish_fetch(ticket.seq, ticket.origin, Ok(vec![event("15", "7")]));
        assert!(state.open_details_by_id("15"));
        assert!(!state.open_details_by_id("16"));
        assert_eq!(state.selected_date, Some(date(2024, 3, 14)));
    }
}
