//! Core error types.
//!
//! Rendering itself never fails; these errors come from turning JSON into
//! [`Event`](crate::event::Event) records.

use thiserror::Error;

/// Errors that can occur while reading events from JSON.
#[derive(Debug, Error)]
pub enum EventParseError {
    /// The payload is not valid JSON or does not match the event shape.
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but neither an event, a list of events,
    /// nor an object with an `items` list.
    #[error("expected an event, an array of events or an `items` list, found {0}")]
    UnexpectedShape(&'static str),
}
