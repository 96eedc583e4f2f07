// TeamCal Library
// Exposes core functionality for testing and reuse

pub mod api;
pub mod calendar;
pub mod command_handlers;
pub mod config;
pub mod error;
pub mod form;
pub mod http_config;
pub mod messages;
pub mod models;
pub mod policy;
pub mod ui;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use api::{CalendarApi, HttpCalendarApi};
pub use calendar::{EventFilters, EventQuery, ViewMode, VisibleRange};
pub use command_handlers::CalendarHandlers;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use form::{EventDraft, EventForm, FormField};
pub use models::*;
pub use policy::Editability;
pub use ui_state::UiState;
