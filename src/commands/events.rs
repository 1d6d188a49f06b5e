//! List events, optionally scoped to one sprint.

use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use sprintcal_core::config::Preferences;
use sprintcal_core::{Event, SprintFilter};

use crate::render::{self, Render};
use crate::seed;

pub fn run(sprint: Option<&str>, json: bool) -> Result<()> {
    let store = seed::sample_store();
    let filter = sprint.map(SprintFilter::parse).unwrap_or(SprintFilter::All);

    let mut events: Vec<&Event> = store.filter_by_sprint(&filter);
    events.sort_by_key(|event| event.start);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    let theme = Preferences::load()?.effective_theme();
    let noun = if events.len() == 1 { "event" } else { "events" };
    println!(
        "{}",
        render::header(&format!("{} ({} {})", filter, events.len(), noun), theme)
    );

    if events.is_empty() {
        println!("  {}", "No events in this sprint".dimmed());
        return Ok(());
    }

    let today = Local::now().date_naive();
    for event in &events {
        println!(
            "  {} {} {}",
            format!("#{}", event.id).dimmed(),
            render::format_event_date(event.start.date(), today).dimmed(),
            event.render()
        );
    }

    Ok(())
}
