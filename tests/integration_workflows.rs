use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use reqwest::Client;

use teamcal::api::{CalendarApi, HttpCalendarApi};
use teamcal::calendar::EventQuery;
use teamcal::command_handlers::CalendarHandlers;
use teamcal::config::AppConfig;
use teamcal::error::{AppError, AppResult};
use teamcal::form::{EventDraft, FormField};
use teamcal::models::{Department, Event, Role, RsvpStatus, Viewer};
use teamcal::ui_state::{Dialog, FetchOrigin, MutationKind, Notification, SaveRequest, UiState};

mock! {
    pub Api {}

    #[async_trait]
    impl CalendarApi for Api {
        async fn list_departments(&self) -> AppResult<Vec<Department>>;
        async fn list_events(&self, query: &EventQuery) -> AppResult<Vec<Event>>;
        async fn create_event(&self, draft: &EventDraft) -> AppResult<Event>;
        async fn update_event(&self, id: &str, draft: &EventDraft) -> AppResult<Event>;
        async fn delete_event(&self, id: &str) -> AppResult<()>;
        async fn respond(&self, id: &str, status: RsvpStatus) -> AppResult<()>;
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config() -> AppConfig {
    AppConfig {
        viewer: Viewer::new("7", "Sam Lee", Role::Employee),
        ..AppConfig::default()
    }
}

fn event(id: &str, organizer: &str) -> Event {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": "Quarterly planning",
        "event_type": "meeting",
        "start_date": "2024-03-18",
        "start_time": "14:00",
        "end_time": "15:00",
        "organizer_id": organizer,
        "attendees": [{"name": "Sam Lee", "status": "pending"}],
    }))
    .unwrap()
}

async fn run_fetch(state: &mut UiState, handlers: &CalendarHandlers) -> bool {
    run_fetch_from(state, handlers, FetchOrigin::UserAction).await
}

async fn run_fetch_from(state: &mut UiState, handlers: &CalendarHandlers, origin: FetchOrigin) -> bool {
    let ticket = state.begin_fetch(origin);
    let result = handlers
        .load_events(ticket.query)
        .await
        .map_err(|_| "Failed to load events".to_string());
    state.finish_fetch(ticket.seq, ticket.origin, result)
}

#[tokio::test]
async fn test_navigation_requests_padded_range() {
    let mut api = MockApi::new();
    api.expect_list_events()
        .withf(|query: &EventQuery| {
            query.start_date == "2024-03-25" && query.end_date == "2024-05-07" && query.department_id.is_none()
        })
        .times(1)
        .returning(|_| Ok(vec![event("15", "7")]));
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    state.next_period();
    assert!(run_fetch(&mut state, &handlers).await);
    assert_eq!(state.events.len(), 1);
}

#[tokio::test]
async fn test_department_filter_is_sent() {
    let mut api = MockApi::new();
    api.expect_list_events()
        .withf(|query: &EventQuery| query.department_id.as_deref() == Some("3") && !query.include_leaves)
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    state.set_department(Some("3".to_string()));
    state.set_include_leaves(false);
    assert!(run_fetch(&mut state, &handlers).await);
}

#[tokio::test]
async fn test_failed_fetch_keeps_events_and_notifies() {
    let mut api = MockApi::new();
    let mut calls = 0;
    api.expect_list_events().times(2).returning(move |_| {
        calls += 1;
        if calls == 1 {
            Ok(vec![event("15", "7")])
        } else {
            Err(AppError::Api {
                status: 500,
                detail: None,
            })
        }
    });
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    assert!(run_fetch(&mut state, &handlers).await);
    assert!(!run_fetch(&mut state, &handlers).await);
    assert_eq!(state.events.len(), 1);
    assert_eq!(state.notification, Some(Notification::error("Failed to load events")));
}

#[tokio::test]
async fn test_startup_fetch_failure_shows_no_banner() {
    let mut api = MockApi::new();
    api.expect_list_events().times(1).returning(|_| {
        Err(AppError::Api {
            status: 503,
            detail: None,
        })
    });
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    assert!(!run_fetch_from(&mut state, &handlers, FetchOrigin::Startup).await);
    assert!(state.events.is_empty());
    assert!(!state.loading);
    assert!(state.notification.is_none());
}

#[tokio::test]
async fn test_create_then_refetch() {
    let mut api = MockApi::new();
    api.expect_create_event()
        .withf(|draft: &EventDraft| draft.title == "Team lunch" && draft.start_date == date(2024, 3, 20))
        .times(1)
        .returning(|_| Ok(event("16", "7")));
    api.expect_list_events()
        .times(1)
        .returning(|_| Ok(vec![event("16", "7")]));
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    state.open_create(date(2024, 3, 20));
    state.update_form(FormField::Title("Team lunch".to_string()));

    let request = state.begin_save().unwrap();
    let kind = request.kind();
    let result = handlers
        .save_event(request)
        .await
        .map(|_| ())
        .map_err(|e| e.user_message(kind.fallback_message()));

    assert!(state.finish_mutation(kind, result));
    assert_eq!(state.dialog, Dialog::Closed);
    assert!(run_fetch(&mut state, &handlers).await);
    assert_eq!(state.events[0].id, "16");
}

#[tokio::test]
async fn test_backend_detail_is_shown_and_dialog_stays_open() {
    let mut api = MockApi::new();
    api.expect_update_event()
        .withf(|id: &str, _draft: &EventDraft| id == "15")
        .times(1)
        .returning(|_, _| {
            Err(AppError::Api {
                status: 409,
                detail: Some("Room already booked".to_string()),
            })
        });
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    state.open_details(event("15", "7"));
    state.open_edit().unwrap();
    let request = state.begin_save().unwrap();
    assert!(matches!(request, SaveRequest::Update { .. }));

    let kind = request.kind();
    let result = handlers
        .save_event(request)
        .await
        .map(|_| ())
        .map_err(|e| e.user_message(kind.fallback_message()));

    assert!(!state.finish_mutation(kind, result));
    assert!(matches!(state.dialog, Dialog::Editor(_)));
    assert_eq!(state.notification, Some(Notification::error("Room already booked")));
}

#[tokio::test]
async fn test_delete_failure_uses_fallback_message() {
    let mut api = MockApi::new();
    api.expect_delete_event()
        .withf(|id: &str| id == "15")
        .times(1)
        .returning(|_| Err(AppError::Anyhow(anyhow::anyhow!("connection reset"))));
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    state.open_details(event("15", "7"));
    state.request_delete().unwrap();
    let id = state.begin_delete().unwrap();
    let result = handlers
        .delete_event(id)
        .await
        .map_err(|e| e.user_message(MutationKind::Delete.fallback_message()));

    assert!(!state.finish_mutation(MutationKind::Delete, result));
    assert!(matches!(state.dialog, Dialog::ConfirmDelete(_)));
    assert_eq!(state.notification, Some(Notification::error("Failed to delete event")));
}

#[tokio::test]
async fn test_rsvp_by_non_organizer() {
    let mut api = MockApi::new();
    api.expect_respond()
        .withf(|id: &str, status: &RsvpStatus| id == "15" && *status == RsvpStatus::Declined)
        .times(1)
        .returning(|_, _| Ok(()));
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    state.open_details(event("15", "99"));
    assert!(state.open_edit().is_err());

    let (id, status) = state.begin_respond(RsvpStatus::Declined).unwrap();
    let result = handlers
        .respond(id, status)
        .await
        .map_err(|e| e.user_message(MutationKind::Respond.fallback_message()));
    assert!(state.finish_mutation(MutationKind::Respond, result));
    assert_eq!(state.notification, Some(Notification::success("Response recorded")));
}

#[test]
fn test_departments_failure_is_logged_only() {
    let mut api = MockApi::new();
    api.expect_list_departments()
        .times(1)
        .returning(|| Err(AppError::Api { status: 503, detail: None }));
    let handlers = CalendarHandlers::new(Arc::new(api));

    let mut state = UiState::new(date(2024, 3, 15), &config());
    let result = tokio_test::block_on(handlers.load_departments()).map_err(|e| e.to_string());
    state.set_departments(result);
    assert!(state.departments.is_empty());
    assert!(state.notification.is_none());
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let api = HttpCalendarApi::with_client(Client::new(), "http://127.0.0.1:9/api", None).unwrap();
    let err = api.list_departments().await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.user_message("Failed to load departments"), "Failed to load departments");
}
