//! Error types for the sprintcal crates.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in calendar operations.
///
/// None of these are fatal to the session: callers surface `EventNotFound`
/// and validation errors as warnings and leave the store untouched.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Event title must not be empty")]
    EmptyTitle,

    #[error("Invalid {field} time '{value}'. Expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for calendar operations.
pub type CalResult<T> = Result<T, CalendarError>;
