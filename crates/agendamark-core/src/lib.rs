//! Core types and renderers: events, timing, markdown formatting

pub mod error;
pub mod event;
pub mod format;
pub mod time;
pub mod tracing;

pub use error::EventParseError;
pub use event::{Attendee, Event, EventDateTime, ResponseStatus, parse_events};
pub use format::{
    DateTimePatterns, FormatOptions, PATTERNS, VERBIAGE, Verbiage, escape_markdown_link_text,
    render_event, render_event_time, render_event_time_with_day, render_event_with_details,
    render_event_without_details, render_events, render_hangout_link, render_self_attendance,
    render_title_link,
};
pub use time::{DEFAULT_TIME_ZONE, EventTiming, parse_time_zone, resolve_time_zone};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
