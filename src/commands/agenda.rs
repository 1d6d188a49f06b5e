//! The sidebar: one day's events plus the next five upcoming.

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use sprintcal_core::agenda;
use sprintcal_core::config::Preferences;

use crate::render::{self, Render};
use crate::seed;
use crate::utils::parse_day;

pub fn run(date: Option<&str>) -> Result<()> {
    let theme = Preferences::load()?.effective_theme();
    let store = seed::sample_store();
    let today = Local::now().date_naive();

    let selected = match date {
        Some(input) => parse_day(input)?,
        None => today,
    };

    // Day view
    let day_events = agenda::events_on(store.events(), selected);
    let noun = if day_events.len() == 1 { "event" } else { "events" };
    let title = format!(
        "{} ({} {})",
        render::format_event_date(selected, today),
        day_events.len(),
        noun
    );
    println!("{}", render::header(&title, theme));

    if day_events.is_empty() {
        println!("  {}", "No events scheduled for this day".dimmed());
    } else {
        for event in &day_events {
            for line in render::event_card(event) {
                println!("{line}");
            }
        }
    }

    // Upcoming view
    println!();
    println!("{}", render::header("Upcoming Events (next 7 days)", theme));

    let upcoming = agenda::upcoming(store.events(), Local::now().naive_local());
    if upcoming.is_empty() {
        println!("  {}", "No upcoming events".dimmed());
        println!("  {}", "Your schedule is clear for the week!".dimmed());
    } else {
        for event in &upcoming {
            println!(
                "  {} {}",
                render::format_event_date(event.start.date(), today).dimmed(),
                event.render()
            );
        }
    }

    Ok(())
}
