//! In-memory event store.
//!
//! The store owns all events for one session. There is no persistence:
//! state lives exactly as long as the session that created it, matching
//! the calendar's single-session model.

use crate::error::{CalResult, CalendarError};
use crate::event::{Event, EventId};

/// Sprint scope for a filtered view of the store.
///
/// `All` is the "all sprints" sentinel of the tag bar; `Tag` matches the
/// event's `sprint` field verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprintFilter {
    All,
    Tag(String),
}

impl SprintFilter {
    /// Parse user input: "all" (any case) selects every sprint, anything
    /// else is treated as a literal sprint tag.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("all") {
            SprintFilter::All
        } else {
            SprintFilter::Tag(input.to_string())
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            SprintFilter::All => true,
            SprintFilter::Tag(tag) => event.sprint == *tag,
        }
    }
}

impl std::fmt::Display for SprintFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SprintFilter::All => f.write_str("all"),
            SprintFilter::Tag(tag) => f.write_str(tag),
        }
    }
}

/// All events of one calendar session, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        EventStore { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Append an event. No dedup: the caller is responsible for allocating
    /// a fresh id.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replace the event with the given id, keeping its id and position.
    ///
    /// The replacement's id is forced to `id`, so an edit can never
    /// re-identify an event. Unknown ids leave the store unchanged.
    pub fn update(&mut self, id: EventId, mut replacement: Event) -> CalResult<()> {
        let slot = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(CalendarError::EventNotFound(id))?;

        replacement.id = id;
        *slot = replacement;
        Ok(())
    }

    /// Remove and return the event with the given id. Unknown ids leave
    /// the store unchanged.
    pub fn remove(&mut self, id: EventId) -> CalResult<Event> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(CalendarError::EventNotFound(id))?;

        Ok(self.events.remove(index))
    }

    /// Events visible under the given sprint filter, in insertion order.
    pub fn filter_by_sprint(&self, filter: &SprintFilter) -> Vec<&Event> {
        self.events.iter().filter(|event| filter.matches(event)).collect()
    }

    /// Sprint tags present in the store with their event counts, in order
    /// of first appearance. Feeds the tag bar.
    pub fn sprint_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();

        for event in &self.events {
            match counts.iter_mut().find(|(tag, _)| *tag == event.sprint) {
                Some((_, count)) => *count += 1,
                None => counts.push((event.sprint.clone(), 1)),
            }
        }

        counts
    }
}
