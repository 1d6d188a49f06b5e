//! Delete an event by id.

use anyhow::Result;
use owo_colors::OwoColorize;
use sprintcal_core::{CalendarError, EventId};

use crate::seed;

pub fn run(id: EventId) -> Result<()> {
    let mut store = seed::sample_store();

    match store.remove(id) {
        Ok(event) => {
            println!("{}", format!("  Deleted: {}", event.title).green());
            println!("  {}", format!("{} events remain", store.len()).dimmed());
        }
        Err(err @ CalendarError::EventNotFound(_)) => {
            // Warning only: deleting a missing event leaves the store as-is.
            eprintln!("  {}", err.to_string().yellow());
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
