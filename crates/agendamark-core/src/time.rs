//! Time types for calendar events.
//!
//! This module provides [`EventTiming`], the shape of an event's start/end
//! decided once per event (all-day dates or timed instants), and the
//! timezone resolution used when rendering timed events.

use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use tracing::warn;

use crate::event::Event;

/// Timezone used when neither the event nor the caller names one.
pub const DEFAULT_TIME_ZONE: Tz = Tz::UTC;

/// The timing of a calendar event.
///
/// Calendar events come in two shapes:
/// - **AllDay**: civil dates, with an exclusive end date
/// - **Timed**: instants, optionally scheduled in a named IANA zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTiming {
    /// An all-day event.
    AllDay {
        /// First day of the event.
        start: NaiveDate,
        /// Day after the last day of the event.
        end: Option<NaiveDate>,
    },
    /// An event with specific start and end instants.
    Timed {
        /// When the event starts.
        start: DateTime<FixedOffset>,
        /// When the event ends.
        end: Option<DateTime<FixedOffset>>,
        /// The zone named on the start marker.
        zone: Option<String>,
    },
}

impl EventTiming {
    /// Decides the timing shape of an event.
    ///
    /// The shape is picked from `start` alone: a civil date means all-day.
    /// The end is dropped when `endTimeUnspecified` is set, when the event
    /// has no end marker, or when the end marker has the other shape.
    /// Returns `None` when `start` carries neither a date nor an instant.
    pub fn from_event(event: &Event) -> Option<Self> {
        let end = event.end.as_ref().filter(|_| !event.end_time_unspecified);

        if let Some(start) = event.start.date {
            return Some(Self::AllDay {
                start,
                end: end.and_then(|e| e.date),
            });
        }

        let start = event.start.date_time?;
        Some(Self::Timed {
            start,
            end: end.and_then(|e| e.date_time),
            zone: event.start.time_zone.clone(),
        })
    }
}

/// Parses an IANA timezone name.
///
/// Blank names are treated as absent. Unknown names are logged and ignored.
pub fn parse_time_zone(name: &str) -> Option<Tz> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(err) => {
            warn!(zone = trimmed, error = %err, "ignoring unknown timezone");
            None
        }
    }
}

/// Picks the zone a timed event is rendered in.
///
/// Precedence: the event's own zone, then the caller's zone, then UTC.
pub fn resolve_time_zone(event_zone: Option<&str>, caller_zone: Option<&str>) -> Tz {
    [event_zone, caller_zone]
        .into_iter()
        .flatten()
        .find_map(parse_time_zone)
        .unwrap_or(DEFAULT_TIME_ZONE)
}
