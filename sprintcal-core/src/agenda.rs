//! Derived sidebar views over the event list.
//!
//! Both views are pure functions of (events, reference time): nothing is
//! cached and nothing needs invalidating. They always read the full event
//! list, never the sprint-filtered one.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::Event;

/// How far ahead the upcoming view looks.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Maximum number of entries in the upcoming view.
pub const UPCOMING_LIMIT: usize = 5;

/// Events whose start falls on the given calendar date, any time of day,
/// in store order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.starts_on(date)).collect()
}

/// Events starting within the next seven days of `now` (both bounds
/// inclusive), soonest first, capped at five entries.
pub fn upcoming(events: &[Event], now: NaiveDateTime) -> Vec<&Event> {
    let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);

    let mut hits: Vec<&Event> = events
        .iter()
        .filter(|event| event.start >= now && event.start <= horizon)
        .collect();

    hits.sort_by_key(|event| event.start);
    hits.truncate(UPCOMING_LIMIT);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventId, EventKind, EventStatus};

    fn make_event(id: i64, start: NaiveDateTime) -> Event {
        Event {
            id: EventId::from(id),
            title: format!("event-{id}"),
            description: None,
            start,
            end: start + Duration::hours(1),
            kind: EventKind::Meeting,
            status: EventStatus::Pending,
            sprint: "Sprint 1".to_string(),
            location: None,
            attendees: vec![],
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn day_view_matches_calendar_date_regardless_of_time() {
        let events = vec![
            make_event(1, at(2026, 3, 20, 0, 0)),
            make_event(2, at(2026, 3, 20, 23, 59)),
            make_event(3, at(2026, 3, 21, 9, 0)),
        ];

        let day = events_on(&events, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        let ids: Vec<_> = day.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn upcoming_excludes_past_and_beyond_horizon() {
        let now = at(2026, 3, 20, 12, 0);
        let events = vec![
            make_event(1, now - Duration::minutes(1)),
            make_event(2, now),
            make_event(3, now + Duration::days(7)),
            make_event(4, now + Duration::days(7) + Duration::minutes(1)),
        ];

        let hits = upcoming(&events, now);
        let ids: Vec<_> = hits.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn upcoming_sorts_ascending_and_caps_at_five() {
        let now = at(2026, 3, 20, 12, 0);
        let events: Vec<Event> = (0..8)
            .map(|i| make_event(i, now + Duration::hours(8 - i)))
            .collect();

        let hits = upcoming(&events, now);
        assert_eq!(hits.len(), UPCOMING_LIMIT);

        let starts: Vec<_> = hits.iter().map(|e| e.start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
        assert_eq!(hits[0].start, now + Duration::hours(1));
    }
}
