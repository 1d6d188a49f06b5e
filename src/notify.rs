//! Desktop reminder delivery.

use notify_rust::Notification;
use sprintcal_core::event::Event;
use sprintcal_core::reminder::Notifier;
use tracing::warn;

/// Delivers reminders through the desktop notification service, falling
/// back to a plain terminal line when that channel is unavailable.
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn summary(event: &Event) -> String {
        format!("Upcoming event: {}", event.title)
    }

    fn body(event: &Event) -> String {
        format!("Starting in 15 minutes at {}", event.start.format("%H:%M"))
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, event: &Event) {
        let summary = Self::summary(event);
        let body = Self::body(event);

        if let Err(err) = Notification::new().summary(&summary).body(&body).show() {
            warn!(error = %err, "desktop notification failed, printing instead");
            println!("🔔 {summary}: {body}");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sprintcal_core::event::{EventId, EventKind, EventStatus};

    use super::*;

    #[test]
    fn reminder_text_names_the_event_and_start_time() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let event = Event {
            id: EventId::from(1),
            title: "Team Standup".to_string(),
            description: None,
            start,
            end: start,
            kind: EventKind::Standup,
            status: EventStatus::Pending,
            sprint: "Sprint 1".to_string(),
            location: None,
            attendees: vec![],
        };

        assert_eq!(DesktopNotifier::summary(&event), "Upcoming event: Team Standup");
        assert_eq!(DesktopNotifier::body(&event), "Starting in 15 minutes at 09:30");
    }
}
