//! Reminder evaluation and the periodic watcher.
//!
//! An event earns exactly one reminder: at the evaluation tick where its
//! start is fifteen floored minutes away. A tick delayed past that minute
//! skips the reminder silently; this is best-effort, not a guarantee.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::event::{Event, EventId};

/// How many minutes before its start an event is announced.
pub const REMINDER_LEAD_MINUTES: i64 = 15;

/// Wall-clock cadence of the watcher.
pub const DEFAULT_TICK: Duration = Duration::from_secs(60);

/// Whole minutes until `start`, floored. Negative once the start has
/// passed.
pub fn minutes_until(start: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (start - now).num_seconds().div_euclid(60)
}

/// True when the event is exactly fifteen floored minutes from starting.
pub fn is_due(event: &Event, now: NaiveDateTime) -> bool {
    minutes_until(event.start, now) == REMINDER_LEAD_MINUTES
}

/// Remembers which events have already been announced, keyed by event id
/// and the event's start date. A single timer never hits the same due
/// minute twice, but the log keeps overlapping evaluators from
/// double-alerting.
#[derive(Debug, Clone, Default)]
pub struct ReminderLog {
    seen: HashSet<(EventId, NaiveDate)>,
}

impl ReminderLog {
    pub fn new() -> Self {
        ReminderLog::default()
    }

    /// Record the event for its start date. Returns false when the event
    /// was already announced that day.
    pub fn mark(&mut self, event: &Event) -> bool {
        self.seen.insert((event.id, event.start.date()))
    }
}

/// Events due at `now` that have not been announced yet. Marks each hit
/// in the log.
pub fn due_events<'a>(
    events: &'a [Event],
    now: NaiveDateTime,
    log: &mut ReminderLog,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| is_due(event, now) && log.mark(event))
        .collect()
}

/// Side channel that delivers a reminder to the user.
///
/// The CLI backs this with desktop notifications; tests record calls.
pub trait Notifier {
    fn notify(&self, event: &Event);
}

/// Periodic reminder evaluator.
///
/// Ticks once per interval over a snapshot of the store, announcing every
/// event that is fifteen minutes from starting. The loop exits promptly
/// when the cancellation token fires, releasing the timer with it.
pub struct ReminderWatcher<N> {
    events: Vec<Event>,
    notifier: N,
    log: ReminderLog,
    tick: Duration,
}

impl<N: Notifier> ReminderWatcher<N> {
    pub fn new(events: Vec<Event>, notifier: N) -> Self {
        ReminderWatcher { events, notifier, log: ReminderLog::new(), tick: DEFAULT_TICK }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Evaluate a single tick at the given instant. Returns how many
    /// reminders were delivered.
    pub fn evaluate_at(&mut self, now: NaiveDateTime) -> usize {
        let due = due_events(&self.events, now, &mut self.log);

        for event in &due {
            self.notifier.notify(event);
        }

        due.len()
    }

    /// Run until the token is cancelled.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.tick);
        // A delayed tick skips the missed window instead of catching up.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("reminder watcher cancelled");
                    break;
                }
                _ = interval.tick() => {
                    let delivered = self.evaluate_at(Local::now().naive_local());
                    if delivered > 0 {
                        info!(delivered, "reminders delivered");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{Duration as ChronoDuration, NaiveDate};

    use super::*;
    use crate::event::{EventKind, EventStatus};

    fn make_event(id: i64, start: NaiveDateTime) -> Event {
        Event {
            id: EventId::from(id),
            title: format!("event-{id}"),
            description: None,
            start,
            end: start + ChronoDuration::minutes(30),
            kind: EventKind::Standup,
            status: EventStatus::Pending,
            sprint: "Sprint 1".to_string(),
            location: None,
            attendees: vec![],
        }
    }

    fn at(h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 20).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        delivered: Arc<Mutex<Vec<EventId>>>,
    }

    impl RecordingNotifier {
        fn delivered(&self) -> Vec<EventId> {
            self.delivered.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, event: &Event) {
            self.delivered.lock().unwrap().push(event.id);
        }
    }

    #[test]
    fn due_exactly_inside_the_fifteen_minute_window() {
        let now = at(9, 0, 0);

        assert!(is_due(&make_event(1, at(9, 15, 0)), now));
        assert!(is_due(&make_event(2, at(9, 15, 59)), now));
        assert!(!is_due(&make_event(3, at(9, 14, 59)), now));
        assert!(!is_due(&make_event(4, at(9, 16, 0)), now));
    }

    #[test]
    fn minutes_until_floors_toward_negative_infinity() {
        let now = at(9, 0, 0);
        assert_eq!(minutes_until(at(9, 15, 59), now), 15);
        assert_eq!(minutes_until(at(9, 0, 30), now), 0);
        assert_eq!(minutes_until(at(8, 59, 30), now), -1);
    }

    #[test]
    fn two_evaluations_in_the_same_due_minute_fire_once() {
        let notifier = RecordingNotifier::default();
        let mut watcher =
            ReminderWatcher::new(vec![make_event(1, at(9, 15, 30))], notifier.clone());

        assert_eq!(watcher.evaluate_at(at(9, 0, 0)), 1);
        assert_eq!(watcher.evaluate_at(at(9, 0, 30)), 0);
        assert_eq!(notifier.delivered(), vec![EventId::from(1)]);
    }

    #[test]
    fn delayed_tick_past_the_window_skips_the_reminder() {
        let notifier = RecordingNotifier::default();
        let mut watcher = ReminderWatcher::new(vec![make_event(1, at(9, 15, 0))], notifier.clone());

        // Tick lands after the boundary (e.g. suspended timer): no catch-up.
        assert_eq!(watcher.evaluate_at(at(9, 1, 30)), 0);
        assert!(notifier.delivered().is_empty());
    }

    #[test]
    fn each_due_event_fires_independently() {
        let notifier = RecordingNotifier::default();
        let mut watcher = ReminderWatcher::new(
            vec![
                make_event(1, at(9, 15, 0)),
                make_event(2, at(9, 15, 45)),
                make_event(3, at(10, 0, 0)),
            ],
            notifier.clone(),
        );

        assert_eq!(watcher.evaluate_at(at(9, 0, 0)), 2);
        assert_eq!(notifier.delivered(), vec![EventId::from(1), EventId::from(2)]);
    }

    #[tokio::test(start_paused = true)]
    async fn watcher_delivers_once_then_stops_on_cancellation() {
        let notifier = RecordingNotifier::default();
        let soon = Local::now().naive_local()
            + ChronoDuration::minutes(REMINDER_LEAD_MINUTES)
            + ChronoDuration::seconds(30);

        let watcher = ReminderWatcher::new(vec![make_event(1, soon)], notifier.clone())
            .with_tick(Duration::from_secs(60));

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(watcher.run(cancel.clone()));

        // Let the immediate first tick evaluate, then tear down.
        tokio::time::sleep(Duration::from_millis(10)).await;
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(notifier.delivered(), vec![EventId::from(1)]);
    }
}
