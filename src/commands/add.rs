//! Add an event to the session calendar.
//!
//! Anything not supplied as a flag is prompted for interactively, the
//! same fields the event dialog offers.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use sprintcal_core::draft::EventDraft;
use sprintcal_core::event::{EventKind, EventStatus, KNOWN_SPRINTS};
use sprintcal_core::EventId;

use crate::render::{self, Render};
use crate::seed;
use crate::utils::parse_day;

pub struct AddArgs {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub sprint: Option<String>,
    pub location: Option<String>,
    pub attendees: Option<String>,
}

pub fn run(args: AddArgs) -> Result<()> {
    let interactive = args.title.is_none();

    // --- Title ---
    let title = match args.title {
        Some(t) => t,
        None => Input::<String>::new().with_prompt("  Title").interact_text()?,
    };

    // --- Date ---
    let date = match args.date {
        Some(input) => parse_day(&input)?,
        None if interactive => prompt_with_retry("  Which day?", parse_day)?,
        None => Local::now().date_naive(),
    };

    // --- Draft ---
    let mut draft = EventDraft::for_date(date);
    draft.title = title;
    if let Some(start) = args.start {
        draft.start_time = start;
    }
    if let Some(end) = args.end {
        draft.end_time = end;
    }
    draft.kind = match args.kind {
        Some(input) => input.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None if interactive => select_kind()?,
        None => draft.kind,
    };
    draft.status = match args.status {
        Some(input) => input.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => draft.status,
    };
    if let Some(sprint) = args.sprint {
        draft.sprint = sprint;
    } else if interactive {
        draft.sprint = select_sprint()?;
    }
    draft.location = args.location;
    if let Some(attendees) = args.attendees {
        draft.attendees = attendees;
    }

    // --- Validate & build ---
    let errors = draft.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {}", error.to_string().red());
        }
        anyhow::bail!("Event not added");
    }
    for warning in draft.warnings() {
        eprintln!("  {}", warning.to_string().yellow());
    }

    let event = draft.build(EventId::generate())?;

    let mut store = seed::sample_store();
    store.add(event.clone());

    println!("{}", format!("  Added: {}", event.title).green());
    println!();

    // Show the day the event landed on.
    let day_events = sprintcal_core::agenda::events_on(store.events(), date);
    let today = Local::now().date_naive();
    println!("  {}", render::format_event_date(date, today).bold());
    for entry in &day_events {
        println!("  {}", entry.render());
    }

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn select_kind() -> Result<EventKind> {
    let labels: Vec<&str> = EventKind::ALL.iter().map(|k| render::kind_label(*k)).collect();
    let selection = Select::new()
        .with_prompt("  Event type")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(EventKind::ALL[selection])
}

fn select_sprint() -> Result<String> {
    let selection = Select::new()
        .with_prompt("  Sprint")
        .items(&KNOWN_SPRINTS)
        .default(0)
        .interact()?;
    Ok(KNOWN_SPRINTS[selection].to_string())
}
