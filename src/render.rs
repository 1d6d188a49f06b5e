//! Terminal rendering for sprintcal types.
//!
//! This module holds the color/icon lookup tables of the calendar UI as
//! exhaustive matches over the closed enums, plus extension traits that
//! add colored rendering using owo_colors.

use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;
use sprintcal_core::config::Theme;
use sprintcal_core::event::{Event, EventKind, EventStatus};

/// Extension trait for colored one-line rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {} {} {}",
            kind_symbol(self.kind),
            colorize_status(self.status, &self.title),
            self.time_span().dimmed(),
            format!("[{}]", self.sprint).cyan(),
            status_icon(self.status),
        )
    }
}

/// Multi-line card for the agenda views: title line plus the optional
/// location/attendee details the sidebar shows.
pub fn event_card(event: &Event) -> Vec<String> {
    let mut lines = vec![format!("  {}", event.render())];

    if let Some(location) = &event.location {
        lines.push(format!("     {} {}", "at".dimmed(), location.dimmed()));
    }
    if !event.attendees.is_empty() {
        let count = event.attendees.len();
        let noun = if count == 1 { "attendee" } else { "attendees" };
        lines.push(format!("     {}", format!("{count} {noun}").dimmed()));
    }
    if let Some(description) = &event.description {
        lines.push(format!("     {}", description.dimmed()));
    }

    lines
}

/// Section header, tinted for the active theme.
pub fn header(text: &str, theme: Theme) -> String {
    match theme {
        Theme::Light => text.blue().bold().to_string(),
        Theme::Dark => text.bright_white().bold().to_string(),
    }
}

/// Colorize text with the status color: completed blue, in progress
/// yellow, pending red.
pub fn colorize_status(status: EventStatus, text: &str) -> String {
    match status {
        EventStatus::Completed => text.blue().to_string(),
        EventStatus::InProgress => text.yellow().to_string(),
        EventStatus::Pending => text.red().to_string(),
    }
}

/// Colorize text with the event-type color.
pub fn colorize_kind(kind: EventKind, text: &str) -> String {
    match kind {
        EventKind::Planning => text.green().to_string(),
        EventKind::Review => text.magenta().to_string(),
        EventKind::Deadline => text.red().to_string(),
        EventKind::Meeting => text.yellow().to_string(),
        EventKind::Standup => text.cyan().to_string(),
    }
}

pub fn status_icon(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Pending => "🔴",
        EventStatus::InProgress => "🟡",
        EventStatus::Completed => "🔵",
    }
}

pub fn status_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Pending => "Yet to Start",
        EventStatus::InProgress => "In Progress",
        EventStatus::Completed => "Completed",
    }
}

pub fn kind_symbol(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Deadline => "⚠",
        EventKind::Planning | EventKind::Review => "📅",
        EventKind::Meeting | EventKind::Standup => "🕐",
    }
}

pub fn kind_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Meeting => "Team Meeting",
        EventKind::Planning => "Sprint Planning",
        EventKind::Review => "Sprint Review",
        EventKind::Deadline => "Deadline",
        EventKind::Standup => "Daily Standup",
    }
}

/// The color legend: event type plus a short description.
pub fn legend_entries() -> [(EventKind, &'static str); 4] {
    [
        (EventKind::Deadline, "Critical project deadlines"),
        (EventKind::Planning, "Sprint planning sessions"),
        (EventKind::Review, "Sprint reviews & retrospectives"),
        (EventKind::Meeting, "Team meetings & standups"),
    ]
}

/// Human day label: Today/Tomorrow/Yesterday, otherwise "Mar 20".
pub fn format_event_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else if date == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        date.format("%b %d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_labels_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();

        assert_eq!(format_event_date(today, today), "Today");
        assert_eq!(format_event_date(today + Duration::days(1), today), "Tomorrow");
        assert_eq!(format_event_date(today - Duration::days(1), today), "Yesterday");
        assert_eq!(format_event_date(today + Duration::days(9), today), "Mar 29");
    }

    #[test]
    fn every_kind_has_a_label_and_symbol() {
        for kind in EventKind::ALL {
            assert!(!kind_label(kind).is_empty());
            assert!(!kind_symbol(kind).is_empty());
        }
    }

    #[test]
    fn legend_covers_the_four_ui_entries() {
        let entries = legend_entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|(_, desc)| !desc.is_empty()));
    }

    #[test]
    fn status_labels_match_the_ui() {
        assert_eq!(status_label(EventStatus::Pending), "Yet to Start");
        assert_eq!(status_label(EventStatus::InProgress), "In Progress");
        assert_eq!(status_label(EventStatus::Completed), "Completed");
    }
}
