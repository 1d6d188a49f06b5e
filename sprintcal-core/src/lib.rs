//! Core types and logic for the sprintcal team calendar.
//!
//! This crate provides everything below the presentation layer:
//! - `Event` and related types for sprint calendar entries
//! - `EventStore` for in-memory session state
//! - `agenda` for the derived day/upcoming views
//! - `reminder` for the periodic fifteen-minute reminder evaluator
//! - `draft` for the create/edit form model and its validation
//! - `config` for the persisted theme preference

pub mod agenda;
pub mod config;
pub mod draft;
pub mod error;
pub mod event;
pub mod reminder;
pub mod store;

// Re-export the types most callers need at crate root for convenience
pub use error::{CalResult, CalendarError};
pub use event::{Event, EventId, EventKind, EventStatus};
pub use store::{EventStore, SprintFilter};
