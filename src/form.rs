//! Create/edit form state and its validation into a request payload.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use url::Url;

use crate::calendar::{date_key, parse_date_key};
use crate::error::{AppError, AppResult};
use crate::models::{Event, EventType};
use crate::utils::{self, is_hex_color, non_empty};

const TIME_FORMAT: &str = "%H:%M";

/// Body of `POST /calendar/events` and `PUT /calendar/events/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub all_day: bool,
    pub location: Option<String>,
    pub is_virtual: bool,
    pub meeting_link: Option<String>,
    pub is_public: bool,
    pub is_company_wide: bool,
    pub color: String,
}

/// One edit to one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Title(String),
    Description(String),
    EventType(EventType),
    StartDate(String),
    EndDate(String),
    StartTime(String),
    EndTime(String),
    AllDay(bool),
    Location(String),
    IsVirtual(bool),
    MeetingLink(String),
    IsPublic(bool),
    IsCompanyWide(bool),
    Color(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub all_day: bool,
    pub location: String,
    pub is_virtual: bool,
    pub meeting_link: String,
    pub is_public: bool,
    pub is_company_wide: bool,
    pub color: String,
}

impl EventForm {
    /// Blank form for a new event on `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let event_type = EventType::Meeting;
        Self {
            title: String::new(),
            description: String::new(),
            event_type,
            start_date: date_key(date),
            end_date: date_key(date),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            all_day: false,
            location: String::new(),
            is_virtual: false,
            meeting_link: String::new(),
            is_public: true,
            is_company_wide: false,
            color: event_type.default_color().to_string(),
        }
    }

    pub fn from_event(event: &Event) -> Self {
        let start_date = event
            .effective_start()
            .map(date_key)
            .unwrap_or_else(|| event.start_date.clone());
        let end_date = event.effective_end().map(date_key).unwrap_or_else(|| start_date.clone());

        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            event_type: event.event_type,
            start_date,
            end_date,
            start_time: event.start_time.as_deref().map(trim_seconds).unwrap_or_default(),
            end_time: event.end_time.as_deref().map(trim_seconds).unwrap_or_default(),
            all_day: event.all_day,
            location: event.location.clone().unwrap_or_default(),
            is_virtual: event.is_virtual,
            meeting_link: event.meeting_link.clone().unwrap_or_default(),
            is_public: event.is_public,
            is_company_wide: event.is_company_wide,
            color: event.display_color().to_string(),
        }
    }

    pub fn apply(&mut self, field: FormField) {
        match field {
            FormField::Title(value) => self.title = value,
            FormField::Description(value) => self.description = value,
            FormField::EventType(kind) => {
                if self.color.eq_ignore_ascii_case(self.event_type.default_color()) {
                    self.color = kind.default_color().to_string();
                }
                self.event_type = kind;
            }
            FormField::StartDate(value) => {
                let start = parse_date_key(&value);
                let end = parse_date_key(&self.end_date);
                let end_is_behind = match (start, end) {
                    (Some(start), Some(end)) => end < start,
                    (Some(_), None) => true,
                    _ => false,
                };
                if end_is_behind {
                    self.end_date = value.clone();
                }
                self.start_date = value;
            }
            FormField::EndDate(value) => self.end_date = value,
            FormField::StartTime(value) => self.start_time = value,
            FormField::EndTime(value) => self.end_time = value,
            FormField::AllDay(value) => self.all_day = value,
            FormField::Location(value) => self.location = value,
            FormField::IsVirtual(value) => self.is_virtual = value,
            FormField::MeetingLink(value) => self.meeting_link = value,
            FormField::IsPublic(value) => self.is_public = value,
            FormField::IsCompanyWide(value) => self.is_company_wide = value,
            FormField::Color(value) => self.color = value,
        }
    }

    pub fn validate(&self) -> AppResult<EventDraft> {
        let title = utils::normalize_title(&self.title);
        if title.is_empty() {
            return Err(AppError::invalid_input("Title is required"));
        }

        let start_date = parse_date_key(&self.start_date)
            .ok_or_else(|| AppError::invalid_input("Start date must be a valid YYYY-MM-DD date"))?;
        let end_date = if self.end_date.trim().is_empty() {
            start_date
        } else {
            parse_date_key(&self.end_date)
                .ok_or_else(|| AppError::invalid_input("End date must be a valid YYYY-MM-DD date"))?
        };
        if end_date < start_date {
            return Err(AppError::invalid_input("End date cannot be before start date"));
        }

        let (start_time, end_time) = if self.all_day {
            (None, None)
        } else {
            let start = parse_time(&self.start_time, "Start time")?;
            let end = parse_time(&self.end_time, "End time")?;
            if start_date == end_date && end <= start {
                return Err(AppError::invalid_input("End time must be after start time"));
            }
            (
                Some(start.format(TIME_FORMAT).to_string()),
                Some(end.format(TIME_FORMAT).to_string()),
            )
        };

        let color = self.color.trim();
        if !is_hex_color(color) {
            return Err(AppError::invalid_input("Color must be a hex value such as #3B82F6"));
        }

        let meeting_link = if self.is_virtual {
            non_empty(&self.meeting_link)
                .map(|link| validate_meeting_link(&link).map(|_| link))
                .transpose()?
        } else {
            None
        };

        Ok(EventDraft {
            title,
            description: non_empty(&self.description),
            event_type: self.event_type,
            start_date,
            end_date,
            start_time,
            end_time,
            all_day: self.all_day,
            location: non_empty(&self.location),
            is_virtual: self.is_virtual,
            meeting_link,
            is_public: self.is_public,
            is_company_wide: self.is_company_wide,
            color: color.to_string(),
        })
    }
}

fn trim_seconds(raw: &str) -> String {
    raw.get(..5).unwrap_or(raw).to_string()
}

fn parse_time(raw: &str, label: &str) -> AppResult<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::invalid_input(format!("{} is required", label)));
    }
    NaiveTime::parse_from_str(raw.get(..5).unwrap_or(raw), TIME_FORMAT)
        .map_err(|_| AppError::invalid_input(format!("{} must be in HH:MM format", label)))
}

fn validate_meeting_link(link: &str) -> AppResult<()> {
    let parsed = Url::parse(link)
        .map_err(|e| AppError::invalid_input(format!("Meeting link is not a valid URL: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::invalid_input("Meeting link must start with http:// or https://"));
    }
    Ok(())
}
