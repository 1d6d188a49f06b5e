//! Event drafts: the create/edit form model and its validation.
//!
//! A draft carries the raw form fields (date plus "HH:MM" time-of-day
//! strings, comma-separated attendee text) and composes them into an
//! `Event` on submit.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CalResult, CalendarError};
use crate::event::{self, Event, EventId, EventKind, EventStatus, DEFAULT_SPRINT};

/// Raw form state for creating or editing one event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    /// Start time of day, "HH:MM".
    pub start_time: String,
    /// End time of day, "HH:MM".
    pub end_time: String,
    pub kind: EventKind,
    pub status: EventStatus,
    pub sprint: String,
    pub location: Option<String>,
    /// Comma-separated attendee text, parsed on submit.
    pub attendees: String,
}

impl EventDraft {
    /// A blank draft for the given date, mirroring the form defaults:
    /// 09:00-10:00 meeting, pending, default sprint.
    pub fn for_date(date: NaiveDate) -> Self {
        EventDraft {
            title: String::new(),
            description: None,
            date,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            kind: EventKind::Meeting,
            status: EventStatus::Pending,
            sprint: DEFAULT_SPRINT.to_string(),
            location: None,
            attendees: String::new(),
        }
    }

    /// A draft pre-filled from an existing event, for editing.
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.start.date(),
            start_time: event.start.format("%H:%M").to_string(),
            end_time: event.end.format("%H:%M").to_string(),
            kind: event.kind,
            status: event.status,
            sprint: event.sprint.clone(),
            location: event.location.clone(),
            attendees: event.attendees.join(", "),
        }
    }

    /// Field-level validation: the title must be non-empty and both
    /// time-of-day strings must parse.
    pub fn validate(&self) -> Vec<CalendarError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(CalendarError::EmptyTitle);
        }
        if let Err(err) = parse_time_of_day("start", &self.start_time) {
            errors.push(err);
        }
        if let Err(err) = parse_time_of_day("end", &self.end_time) {
            errors.push(err);
        }

        errors
    }

    /// Non-blocking issues. The calendar accepts these events; callers
    /// just tell the user about them.
    pub fn warnings(&self) -> Vec<DraftWarning> {
        let mut warnings = Vec::new();

        if let (Ok(start), Ok(end)) = (
            parse_time_of_day("start", &self.start_time),
            parse_time_of_day("end", &self.end_time),
        ) && end < start
        {
            warnings.push(DraftWarning::EndBeforeStart { start, end });
        }

        warnings
    }

    /// Compose the event, combining the chosen date with each time-of-day
    /// string. Fails on the first validation error; warnings pass through.
    pub fn build(&self, id: EventId) -> CalResult<Event> {
        if self.title.trim().is_empty() {
            return Err(CalendarError::EmptyTitle);
        }

        let start = self.date.and_time(parse_time_of_day("start", &self.start_time)?);
        let end = self.date.and_time(parse_time_of_day("end", &self.end_time)?);

        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            description: none_if_blank(&self.description),
            start,
            end,
            kind: self.kind,
            status: self.status,
            sprint: self.sprint.clone(),
            location: none_if_blank(&self.location),
            attendees: event::parse_attendees(&self.attendees),
        })
    }
}

/// A draft issue the calendar tolerates but the user should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftWarning {
    EndBeforeStart { start: NaiveTime, end: NaiveTime },
}

impl fmt::Display for DraftWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftWarning::EndBeforeStart { start, end } => write!(
                f,
                "End time {} is before start time {}",
                end.format("%H:%M"),
                start.format("%H:%M")
            ),
        }
    }
}

fn parse_time_of_day(field: &'static str, value: &str) -> CalResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| CalendarError::InvalidTime { field, value: value.to_string() })
}

fn none_if_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Parse a calendar date in YYYY-MM-DD form.
pub fn parse_date(value: &str) -> CalResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
    }

    fn filled_draft() -> EventDraft {
        let mut draft = EventDraft::for_date(march_20());
        draft.title = "Team Standup".to_string();
        draft.start_time = "09:30".to_string();
        draft.end_time = "10:00".to_string();
        draft.kind = EventKind::Standup;
        draft.attendees = "dev-team@company.com".to_string();
        draft
    }

    #[test]
    fn build_composes_timestamps_from_date_and_times() {
        let event = filled_draft().build(EventId::from(1)).unwrap();

        assert_eq!(event.start, march_20().and_hms_opt(9, 30, 0).unwrap());
        assert_eq!(event.end, march_20().and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(event.attendees, vec!["dev-team@company.com"]);
        assert_eq!(event.sprint, DEFAULT_SPRINT);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut draft = filled_draft();
        draft.title = "   ".to_string();

        assert!(matches!(draft.build(EventId::from(1)), Err(CalendarError::EmptyTitle)));
        assert!(draft.validate().iter().any(|e| matches!(e, CalendarError::EmptyTitle)));
    }

    #[test]
    fn malformed_time_is_an_explicit_error() {
        let mut draft = filled_draft();
        draft.end_time = "25:99".to_string();

        let err = draft.build(EventId::from(1)).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidTime { field: "end", .. }));
    }

    #[test]
    fn end_before_start_warns_but_still_builds() {
        // Inverted ranges are accepted; the warning is informational only.
        let mut draft = filled_draft();
        draft.start_time = "10:00".to_string();
        draft.end_time = "09:00".to_string();

        assert_eq!(draft.warnings().len(), 1);
        let event = draft.build(EventId::from(1)).unwrap();
        assert!(event.has_inverted_range());
    }

    #[test]
    fn well_formed_draft_has_no_warnings() {
        assert!(filled_draft().warnings().is_empty());
        assert!(filled_draft().validate().is_empty());
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let mut draft = filled_draft();
        draft.location = Some("  ".to_string());
        draft.description = Some("agenda".to_string());

        let event = draft.build(EventId::from(1)).unwrap();
        assert_eq!(event.location, None);
        assert_eq!(event.description.as_deref(), Some("agenda"));
    }

    #[test]
    fn edit_round_trip_preserves_fields() {
        let event = filled_draft().build(EventId::from(7)).unwrap();
        let rebuilt = EventDraft::from_event(&event).build(EventId::from(7)).unwrap();
        assert_eq!(rebuilt, event);
    }

    #[test]
    fn parse_date_accepts_iso_and_rejects_garbage() {
        assert_eq!(parse_date("2026-03-20").unwrap(), march_20());
        assert!(matches!(parse_date("20/03/2026"), Err(CalendarError::InvalidDate(_))));
    }
}
