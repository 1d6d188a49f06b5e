//! Event types for the team sprint calendar.
//!
//! All event times are floating local wall-clock times (`NaiveDateTime`):
//! the calendar lives entirely on one machine and never crosses timezones.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The sprint tag assigned to new events when none is chosen.
pub const DEFAULT_SPRINT: &str = "Sprint 1";

/// Sprint tags offered by the event form. Events are never validated
/// against this list; the `sprint` field stays a free filter key.
pub const KNOWN_SPRINTS: [&str; 4] = ["Sprint 1", "Sprint 2", "Sprint 3", "Sprint 4"];

/// Unique event identifier, allocated from the wall clock at creation
/// time (Unix milliseconds) and preserved across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(i64);

impl EventId {
    /// Allocate a fresh id from the current wall clock.
    pub fn generate() -> Self {
        EventId(Utc::now().timestamp_millis())
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for EventId {
    fn from(raw: i64) -> Self {
        EventId(raw)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(EventId)
    }
}

/// What kind of calendar entry an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Meeting,
    Planning,
    Review,
    Deadline,
    Standup,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Meeting,
        EventKind::Planning,
        EventKind::Review,
        EventKind::Deadline,
        EventKind::Standup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
            EventKind::Planning => "planning",
            EventKind::Review => "review",
            EventKind::Deadline => "deadline",
            EventKind::Standup => "standup",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = EventKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("Unknown event type '{}'. Valid: {}", s, valid.join(", "))
            })
    }
}

/// Where an event stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Pending,
    InProgress,
    Completed,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] =
        [EventStatus::Pending, EventStatus::InProgress, EventStatus::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::InProgress => "in-progress",
            EventStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = EventStatus::ALL.iter().map(|st| st.as_str()).collect();
                format!("Unknown status '{}'. Valid: {}", s, valid.join(", "))
            })
    }
}

/// A calendar event.
///
/// `end` is not required to come after `start`; the store accepts whatever
/// the form produced and validation surfaces the inversion as a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub status: EventStatus,
    pub sprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Event {
    /// Whether the event's start falls on the given calendar date,
    /// regardless of time of day.
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }

    /// True when the end timestamp precedes the start timestamp.
    pub fn has_inverted_range(&self) -> bool {
        self.end < self.start
    }

    /// "HH:MM - HH:MM" span for display.
    pub fn time_span(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Parse a comma-separated attendee list: split on commas, trim each
/// entry, drop empties, keep the original order.
pub fn parse_attendees(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
