//! Event types for calendar events.
//!
//! This module provides the input records the renderers work on:
//! - [`Event`]: a single calendar event occurrence
//! - [`EventDateTime`]: the start or end marker of an event
//! - [`Attendee`]: an invited participant, possibly the viewer themself
//! - [`ResponseStatus`]: an attendee's answer to the invitation
//!
//! Field names follow the Google Calendar API (`htmlLink`, `dateTime`,
//! `responseStatus`, ...) so provider payloads deserialize directly.
//! Fields the renderers do not use are ignored.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EventParseError;

/// The response status for an event attendee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseStatus {
    /// The attendee has accepted the invitation.
    Accepted,
    /// The attendee has declined the invitation.
    Declined,
    /// The attendee has tentatively accepted.
    Tentative,
    /// The attendee has not responded.
    NeedsAction,
    /// Any status string we do not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ResponseStatus {
    /// Returns the wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Tentative => "tentative",
            Self::NeedsAction => "needsAction",
            Self::Unknown => "unknown",
        }
    }
}

/// An attendee of a calendar event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// The attendee's email address.
    #[serde(default)]
    pub email: String,
    /// The attendee's display name, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether this entry represents the viewer.
    #[serde(default, rename = "self")]
    pub is_self: bool,
    /// The attendee's response, if the provider reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,
}

impl Attendee {
    /// Creates a new attendee with the given email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Builder method to mark this attendee as the viewer.
    pub fn as_self(mut self) -> Self {
        self.is_self = true;
        self
    }

    /// Builder method to set the response status.
    pub fn with_response_status(mut self, status: ResponseStatus) -> Self {
        self.response_status = Some(status);
        self
    }

    /// The name shown for this attendee: display name when set, else email.
    pub fn name(&self) -> &str {
        non_empty(self.display_name.as_deref()).unwrap_or(&self.email)
    }
}

/// The start or end marker of an event.
///
/// All-day markers carry `date`; timed markers carry `date_time` and
/// optionally the IANA zone the event was scheduled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    /// Civil date for all-day events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Instant for timed events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,
    /// IANA timezone identifier (e.g., "America/Toronto").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventDateTime {
    /// Creates an all-day marker.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Creates a timed marker.
    pub fn from_date_time(date_time: DateTime<FixedOffset>) -> Self {
        Self {
            date_time: Some(date_time),
            ..Self::default()
        }
    }

    /// Builder method to set the timezone.
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }
}

/// A calendar event occurrence to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The event title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// URL to view this event in the calendar UI.
    #[serde(default)]
    pub html_link: String,
    /// Video call join URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hangout_link: Option<String>,
    /// When the event starts.
    #[serde(default)]
    pub start: EventDateTime,
    /// When the event ends (exclusive date for all-day events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventDateTime>,
    /// Set when the provider has no end for this event.
    #[serde(default)]
    pub end_time_unspecified: bool,
    /// Invited attendees, in provider order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Attendee>,
}

impl Event {
    /// Creates an event with the given start and end markers.
    pub fn new(start: EventDateTime, end: EventDateTime) -> Self {
        Self {
            start,
            end: Some(end),
            ..Self::default()
        }
    }

    /// Creates an all-day event; `end` is the exclusive end date.
    pub fn all_day(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(EventDateTime::from_date(start), EventDateTime::from_date(end))
    }

    /// Creates a timed event.
    pub fn timed(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self::new(
            EventDateTime::from_date_time(start),
            EventDateTime::from_date_time(end),
        )
    }

    /// Parses a single event from JSON.
    pub fn from_json(json: &str) -> Result<Self, EventParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true if the start marker carries a civil date.
    pub fn is_all_day(&self) -> bool {
        self.start.date.is_some()
    }

    /// The title to display, falling back to the untitled placeholder.
    pub fn summary_text(&self) -> &str {
        non_empty(self.summary.as_deref()).unwrap_or(crate::format::VERBIAGE.untitled)
    }

    /// The description, if present and non-empty.
    pub fn description_text(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// The location, if present and non-empty.
    pub fn location_text(&self) -> Option<&str> {
        non_empty(self.location.as_deref())
    }

    /// The hangout link, if present and non-empty.
    pub fn hangout_url(&self) -> Option<&str> {
        non_empty(self.hangout_link.as_deref())
    }

    /// Returns the first attendee flagged as the viewer.
    ///
    /// Several self-flagged attendees is not a supported input; only the
    /// first one is ever looked at.
    pub fn self_attendee(&self) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.is_self)
    }

    /// Returns attendees other than the viewer, in original order.
    pub fn other_attendees(&self) -> impl Iterator<Item = &Attendee> {
        self.attendees.iter().filter(|a| !a.is_self)
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the calendar link.
    pub fn with_html_link(mut self, url: impl Into<String>) -> Self {
        self.html_link = url.into();
        self
    }

    /// Builder method to set the hangout link.
    pub fn with_hangout_link(mut self, url: impl Into<String>) -> Self {
        self.hangout_link = Some(url.into());
        self
    }

    /// Builder method to add an attendee.
    pub fn with_attendee(mut self, attendee: Attendee) -> Self {
        self.attendees.push(attendee);
        self
    }

    /// Builder method to mark the end as unknown.
    pub fn with_end_time_unspecified(mut self) -> Self {
        self.end_time_unspecified = true;
        self
    }
}

/// Parses events from a JSON payload.
///
/// Accepts a single event object, an array of events, or an object with an
/// `items` array as returned by the Google Calendar `events.list` endpoint.
pub fn parse_events(json: &str) -> Result<Vec<Event>, EventParseError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(EventParseError::from))
            .collect(),
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(EventParseError::from))
                .collect(),
            Some(_) => Err(EventParseError::UnexpectedShape("non-array `items`")),
            None => Ok(vec![serde_json::from_value(Value::Object(map))?]),
        },
        Value::Null => Err(EventParseError::UnexpectedShape("null")),
        Value::Bool(_) => Err(EventParseError::UnexpectedShape("a boolean")),
        Value::Number(_) => Err(EventParseError::UnexpectedShape("a number")),
        Value::String(_) => Err(EventParseError::UnexpectedShape("a string")),
    }
}

/// Treats empty strings as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
