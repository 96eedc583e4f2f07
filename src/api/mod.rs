// Backend REST API
// The calendar only ever talks to the HR backend through this trait, which
// keeps the UI and handlers testable against a mock.

use async_trait::async_trait;

use crate::calendar::EventQuery;
use crate::error::AppResult;
use crate::form::EventDraft;
use crate::models::{Department, Event, RsvpStatus};

pub mod client;

pub use client::{extract_detail, HttpCalendarApi};

#[async_trait]
pub trait CalendarApi: Send + Sync {
    /// `GET /departments`
    async fn list_departments(&self) -> AppResult<Vec<Department>>;

    /// `GET /calendar/events`
    async fn list_events(&self, query: &EventQuery) -> AppResult<Vec<Event>>;

    /// `POST /calendar/events`
    async fn create_event(&self, draft: &EventDraft) -> AppResult<Event>;

    /// `PUT /calendar/events/{id}`
    async fn update_event(&self, id: &str, draft: &EventDraft) -> AppResult<Event>;

    /// `DELETE /calendar/events/{id}`
    async fn delete_event(&self, id: &str) -> AppResult<()>;

    /// `POST /calendar/events/{id}/respond`
    async fn respond(&self, id: &str, status: RsvpStatus) -> AppResult<()>;
}
