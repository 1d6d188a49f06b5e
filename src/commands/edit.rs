//! Edit an event in place by id.

use anyhow::Result;
use owo_colors::OwoColorize;
use sprintcal_core::draft::EventDraft;
use sprintcal_core::{CalendarError, EventId};

use crate::render::Render;
use crate::seed;
use crate::utils::parse_day;

pub struct EditArgs {
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

pub fn run(id: EventId, args: EditArgs) -> Result<()> {
    let mut store = seed::sample_store();

    let Some(existing) = store.get(id) else {
        // Unknown ids are a warning, not a failure: the store is unchanged.
        eprintln!("  {}", CalendarError::EventNotFound(id).to_string().yellow());
        return Ok(());
    };

    // Start from the current fields, overlay whatever flags were given.
    let mut draft = EventDraft::from_event(existing);
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(date) = args.date {
        draft.date = parse_day(&date)?;
    }
    if let Some(start) = args.start {
        draft.start_time = start;
    }
    if let Some(end) = args.end {
        draft.end_time = end;
    }
    if let Some(kind) = args.kind {
        draft.kind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if let Some(status) = args.status {
        draft.status = status.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    }
    if let Some(sprint) = args.sprint {
        draft.sprint = sprint;
    }
    if let Some(location) = args.location {
        draft.location = Some(location);
    }
    if let Some(attendees) = args.attendees {
        draft.attendees = attendees;
    }

    let errors = draft.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {}", error.to_string().red());
        }
        anyhow::bail!("Event not updated");
    }
    for warning in draft.warnings() {
        eprintln!("  {}", warning.to_string().yellow());
    }

    let updated = draft.build(id)?;
    store.update(id, updated.clone())?;

    println!("{}", format!("  Updated: {}", updated.title).green());
    println!("  {}", updated.render());

    Ok(())
}
