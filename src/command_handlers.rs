//! Command handlers module
//!
//! Async operations the UI dispatches through `Command::perform`. Each one
//! wraps a single backend call and logs its outcome; the UI turns the result
//! into a message for `UiState`.

use std::sync::Arc;

use log::{error, info};

use crate::api::CalendarApi;
use crate::calendar::EventQuery;
use crate::error::AppError;
use crate::models::{Department, Event, RsvpStatus};
use crate::ui_state::SaveRequest;

/// Calendar backend handlers
#[derive(Clone)]
pub struct CalendarHandlers {
    api: Arc<dyn CalendarApi>,
}

impl CalendarHandlers {
    pub fn new(api: Arc<dyn CalendarApi>) -> Self {
        Self { api }
    }

    /// Load the events visible for `query`
    pub async fn load_events(&self, query: EventQuery) -> Result<Vec<Event>, AppError> {
        info!(
            "Loading events {}..{} (department: {})",
            query.start_date,
            query.end_date,
            query.department_id.as_deref().unwrap_or("all")
        );
        self.api.list_events(&query).await.map_err(|e| {
            error!("Failed to load events: {}", e.to_safe_string());
            e
        })
    }

    /// Load the department filter options
    pub async fn load_departments(&self) -> Result<Vec<Department>, AppError> {
        info!("Loading departments");
        self.api.list_departments().await.map_err(|e| {
            error!("Failed to load departments: {}", e.to_safe_string());
            e
        })
    }

    /// Create or update an event
    pub async fn save_event(&self, request: SaveRequest) -> Result<Event, AppError> {
        let result = match &request {
            SaveRequest::Create(draft) => {
                info!("Creating event '{}' on {}", draft.title, draft.start_date);
                self.api.create_event(draft).await
            }
            SaveRequest::Update { id, draft } => {
                info!("Updating event {}", id);
                self.api.update_event(id, draft).await
            }
        };

        match result {
            Ok(event) => {
                info!("Saved event {}", event.id);
                Ok(event)
            }
            Err(e) => {
                error!("Failed to save event: {}", e.to_safe_string());
                Err(e)
            }
        }
    }

    /// Delete an event
    pub async fn delete_event(&self, id: String) -> Result<(), AppError> {
        info!("Deleting event {}", id);
        self.api.delete_event(&id).await.map_err(|e| {
            error!("Failed to delete event {}: {}", id, e.to_safe_string());
            e
        })?;
        info!("Deleted event {}", id);
        Ok(())
    }

    /// Record the viewer's RSVP
    pub async fn respond(&self, id: String, status: RsvpStatus) -> Result<(), AppError> {
        info!("Responding {} to event {}", status, id);
        self.api.respond(&id, status).await.map_err(|e| {
            error!("Failed to respond to event {}: {}", id, e.to_safe_string());
            e
        })
    }
}
