// file: src/models/event.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_id, deserialize_optional_id, null_as_default};
use crate::calendar::parse_date_key;
use crate::policy::{self, SystemSource};

/// Closed set of event categories. Anything the backend sends outside this
/// set is folded into `Other` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Meeting,
    Holiday,
    Leave,
    Birthday,
    Anniversary,
    CompanyEvent,
    TeamEvent,
    Training,
    Deadline,
    #[default]
    Other,
}

impl EventType {
    pub const ALL: [EventType; 10] = [
        EventType::Meeting,
        EventType::Holiday,
        EventType::Leave,
        EventType::Birthday,
        EventType::Anniversary,
        EventType::CompanyEvent,
        EventType::TeamEvent,
        EventType::Training,
        EventType::Deadline,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Holiday => "holiday",
            EventType::Leave => "leave",
            EventType::Birthday => "birthday",
            EventType::Anniversary => "anniversary",
            EventType::CompanyEvent => "company_event",
            EventType::TeamEvent => "team_event",
            EventType::Training => "training",
            EventType::Deadline => "deadline",
            EventType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Meeting => "Meeting",
            EventType::Holiday => "Holiday",
            EventType::Leave => "Leave",
            EventType::Birthday => "Birthday",
            EventType::Anniversary => "Work Anniversary",
            EventType::CompanyEvent => "Company Event",
            EventType::TeamEvent => "Team Event",
            EventType::Training => "Training",
            EventType::Deadline => "Deadline",
            EventType::Other => "Other",
        }
    }

    /// Display color used when an event carries none of its own.
    pub fn default_color(&self) -> &'static str {
        match self {
            EventType::Meeting => "#3B82F6",
            EventType::Holiday => "#EF4444",
            EventType::Leave => "#F59E0B",
            EventType::Birthday => "#EC4899",
            EventType::Anniversary => "#8B5CF6",
            EventType::CompanyEvent => "#10B981",
            EventType::TeamEvent => "#06B6D4",
            EventType::Training => "#6366F1",
            EventType::Deadline => "#DC2626",
            EventType::Other => "#6B7280",
        }
    }
}

impl From<String> for EventType {
    fn from(raw: String) -> Self {
        EventType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw.trim().to_lowercase())
            .unwrap_or(EventType::Other)
    }
}

impl From<EventType> for String {
    fn from(kind: EventType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An attendee's answer to an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RsvpStatus {
    Accepted,
    Declined,
    #[default]
    Pending,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Accepted => "accepted",
            RsvpStatus::Declined => "declined",
            RsvpStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RsvpStatus::Accepted => "Accepted",
            RsvpStatus::Declined => "Declined",
            RsvpStatus::Pending => "Pending",
        }
    }
}

impl From<String> for RsvpStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "accepted" => RsvpStatus::Accepted,
            "declined" => RsvpStatus::Declined,
            _ => RsvpStatus::Pending,
        }
    }
}

impl From<RsvpStatus> for String {
    fn from(status: RsvpStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RsvpStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: EventType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_day: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_virtual: bool,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_public: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_company_wide: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub organizer_id: Option<String>,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attendees: Vec<Attendee>,
}

impl Event {
    pub fn effective_start(&self) -> Option<NaiveDate> {
        parse_date_key(&self.start_date)
    }

    /// The end date, falling back to the start date when absent or unreadable.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        let start = self.effective_start()?;
        Some(
            self.end_date
                .as_deref()
                .and_then(parse_date_key)
                .unwrap_or(start),
        )
    }

    /// Inclusive on both ends. Events without a readable start never match.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match (self.effective_start(), self.effective_end()) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn is_multi_day(&self) -> bool {
        matches!(
            (self.effective_start(), self.effective_end()),
            (Some(start), Some(end)) if end > start
        )
    }

    pub fn system_source(&self) -> Option<SystemSource> {
        policy::system_source(&self.id)
    }

    pub fn is_system_derived(&self) -> bool {
        self.system_source().is_some()
    }

    pub fn display_color(&self) -> &str {
        match self.color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() => color,
            _ => self.event_type.default_color(),
        }
    }

    pub fn time_label(&self) -> String {
        if self.all_day {
            return "All day".to_string();
        }
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => format!("{} - {}", short_time(start), short_time(end)),
            (Some(start), None) => short_time(start).to_string(),
            _ => "All day".to_string(),
        }
    }

    pub fn attendee_status(&self, name: &str) -> Option<RsvpStatus> {
        self.attendees
            .iter()
            .find(|attendee| attendee.name.eq_ignore_ascii_case(name))
            .map(|attendee| attendee.status)
    }
}

// "09:30:00" -> "09:30"
fn short_time(raw: &str) -> &str {
    raw.get(..5).unwrap_or(raw)
}
