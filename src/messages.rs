use chrono::NaiveDate;

use crate::calendar::ViewMode;
use crate::form::FormField;
use crate::models::{Department, DepartmentOption, Event, RsvpStatus};
use crate::ui_state::{FetchOrigin, MutationKind};

/// Unified application message type
///
/// Messages are organized by domain: what the user did, then what the
/// backend answered.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Navigation Messages =====
    PreviousPeriod,
    NextPeriod,
    Today,
    SetViewMode(ViewMode),

    // ===== Filter Messages =====
    ToggleLeaves(bool),
    ToggleBirthdays(bool),
    ToggleAnniversaries(bool),
    DepartmentSelected(DepartmentOption),

    // ===== Selection and Dialog Messages =====
    /// A day cell was clicked
    DaySelected(NaiveDate),
    /// An event chip was clicked
    EventSelected(String),
    /// Open the create form prefilled with a date
    OpenCreate(NaiveDate),
    /// Switch the open details dialog to the editor
    EditEvent,
    /// Ask for confirmation before deleting the open event
    RequestDelete,
    ConfirmDelete,
    CloseDialog,
    /// Edit one field of the open form
    Form(FormField),
    SaveEvent,
    Respond(RsvpStatus),
    DismissNotification,

    // ===== Async Operation Results =====
    DepartmentsLoaded(Result<Vec<Department>, String>),
    /// Fetch sequence number, what started it, and its outcome
    EventsLoaded(u64, FetchOrigin, Result<Vec<Event>, String>),
    /// Create or update finished
    EventSaved(MutationKind, Result<Event, String>),
    EventDeleted(Result<(), String>),
    ResponseRecorded(Result<(), String>),
}
