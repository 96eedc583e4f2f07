use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use url::Url;

use super::CalendarApi;
use crate::calendar::EventQuery;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::form::EventDraft;
use crate::models::{Department, Event, RsvpStatus};
use crate::utils::logging;

#[derive(Debug, Serialize)]
struct RespondBody {
    status: RsvpStatus,
}

/// `reqwest`-backed implementation of the backend API.
#[derive(Debug, Clone)]
pub struct HttpCalendarApi {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl HttpCalendarApi {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = config.http_config().build_client()?;
        Self::with_client(client, &config.api_base_url, config.auth_token.clone())
    }

    pub fn with_client(client: Client, base_url: &str, auth_token: Option<String>) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("Invalid API base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config(format!("API base URL '{}' cannot hold paths", base_url)));
        }
        Ok(Self {
            client,
            base_url,
            auth_token,
        })
    }

    /// Appends path segments to the base URL, escaping each one.
    pub fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config("API base URL cannot hold paths"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn dispatch(&self, builder: RequestBuilder) -> AppResult<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let started = Instant::now();

        let response = self.client.execute(request).await.map_err(|e| {
            logging::log_network_error(&format!("{} {}", method, path), &e);
            AppError::from(e)
        })?;

        let status = response.status();
        logging::log_api_call(
            method.as_str(),
            &path,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        );

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::Api {
            status: status.as_u16(),
            detail: extract_detail(&body),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pulls the user-facing message out of an error body. `detail` is either a
/// plain string or a list of validation errors each carrying a `msg`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl CalendarApi for HttpCalendarApi {
    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        let url = self.endpoint(&["departments"])?;
        let response = self.dispatch(self.request(Method::GET, url)).await?;
        Self::decode(response).await
    }

    async fn list_events(&self, query: &EventQuery) -> AppResult<Vec<Event>> {
        let url = self.endpoint(&["calendar", "events"])?;
        let response = self
            .dispatch(self.request(Method::GET, url).query(query))
            .await?;
        let events: Vec<Event> = Self::decode(response).await?;
        logging::log_events_loaded(&query.start_date, &query.end_date, events.len());
        Ok(events)
    }

    async fn create_event(&self, draft: &EventDraft) -> AppResult<Event> {
        let url = self.endpoint(&["calendar", "events"])?;
        let response = self
            .dispatch(self.request(Method::POST, url).json(draft))
            .await?;
        Self::decode(response).await
    }

    async fn update_event(&self, id: &str, draft: &EventDraft) -> AppResult<Event> {
        let url = self.endpoint(&["calendar", "events", id])?;
        let response = self
            .dispatch(self.request(Method::PUT, url).json(draft))
            .await?;
        Self::decode(response).await
    }

    async fn delete_event(&self, id: &str) -> AppResult<()> {
        let url = self.endpoint(&["calendar", "events", id])?;
        self.dispatch(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn respond(&self, id: &str, status: RsvpStatus) -> AppResult<()> {
        let url = self.endpoint(&["calendar", "events", id, "respond"])?;
        self.dispatch(self.request(Method::POST, url).json(&RespondBody { status }))
            .await?;
        Ok(())
    }
}
