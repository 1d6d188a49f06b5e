//! Bundled sample events.
//!
//! The calendar keeps all state in memory for one session, so every
//! invocation starts from the same sample data set, dated relative to
//! today so the agenda and reminder views have something to show.

use chrono::{Duration, Local, NaiveDate};
use sprintcal_core::event::{Event, EventId, EventKind, EventStatus};
use sprintcal_core::EventStore;

/// The session store, seeded with the sample events.
pub fn sample_store() -> EventStore {
    EventStore::with_events(sample_events(Local::now().date_naive()))
}

/// Sample events around the given day.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    vec![
        Event {
            id: EventId::from(1),
            title: "Sprint Planning".to_string(),
            description: Some("Plan the upcoming sprint goals and tasks".to_string()),
            start: (today - Duration::days(2)).and_hms_opt(9, 0, 0).unwrap(),
            end: (today - Duration::days(2)).and_hms_opt(11, 0, 0).unwrap(),
            kind: EventKind::Planning,
            status: EventStatus::Completed,
            sprint: "Sprint 1".to_string(),
            location: Some("Conference Room A".to_string()),
            attendees: vec!["john@team.com".to_string(), "jane@team.com".to_string()],
        },
        Event {
            id: EventId::from(2),
            title: "Team Standup".to_string(),
            description: Some("Daily team sync and progress update".to_string()),
            start: today.and_hms_opt(9, 30, 0).unwrap(),
            end: today.and_hms_opt(10, 0, 0).unwrap(),
            kind: EventKind::Standup,
            status: EventStatus::Pending,
            sprint: "Sprint 1".to_string(),
            location: Some("Zoom Meeting".to_string()),
            attendees: vec!["dev-team@company.com".to_string()],
        },
        Event {
            id: EventId::from(3),
            title: "Feature Deadline".to_string(),
            description: Some("Final deadline for user authentication feature".to_string()),
            start: (today + Duration::days(3)).and_hms_opt(23, 59, 0).unwrap(),
            end: (today + Duration::days(3)).and_hms_opt(23, 59, 0).unwrap(),
            kind: EventKind::Deadline,
            status: EventStatus::Pending,
            sprint: "Sprint 1".to_string(),
            location: None,
            attendees: vec![],
        },
        Event {
            id: EventId::from(4),
            title: "Sprint Review".to_string(),
            description: Some("Review completed work and demonstrate features".to_string()),
            start: (today + Duration::days(6)).and_hms_opt(14, 0, 0).unwrap(),
            end: (today + Duration::days(6)).and_hms_opt(16, 0, 0).unwrap(),
            kind: EventKind::Review,
            status: EventStatus::InProgress,
            sprint: "Sprint 2".to_string(),
            location: Some("Main Hall".to_string()),
            attendees: vec!["team@company.com".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let events = sample_events(today);

        let mut ids: Vec<_> = events.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn samples_cover_multiple_sprints() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let store = EventStore::with_events(sample_events(today));

        let counts = store.sprint_counts();
        assert!(counts.iter().any(|(tag, _)| tag == "Sprint 1"));
        assert!(counts.iter().any(|(tag, _)| tag == "Sprint 2"));
    }

    #[test]
    fn standup_lands_on_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let events = sample_events(today);

        let standup = events.iter().find(|e| e.kind == EventKind::Standup).unwrap();
        assert!(standup.starts_on(today));
    }
}
