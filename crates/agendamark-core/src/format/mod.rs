//! Markdown rendering for calendar events.
//!
//! An event is rendered from three pieces:
//! - the time phrase ([`render_event_time`])
//! - the linked title ([`render_title_link`])
//! - the viewer's attendance badge ([`render_self_attendance`])
//!
//! which are composed into either a compact single line
//! ([`render_event_without_details`]) or an expanded block
//! ([`render_event_with_details`]).
//!
//! # Example
//!
//! ```rust
//! use agendamark_core::format::{render_event, FormatOptions};
//! use agendamark_core::Event;
//! use chrono::NaiveDate;
//!
//! let event = Event::all_day(
//!     NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2017, 1, 2).unwrap(),
//! )
//! .with_summary("Holiday")
//! .with_html_link("https://calendar.google.com/event");
//!
//! let line = render_event(&event, &FormatOptions::default());
//! assert_eq!(line, "Jan 1, 2017 (all day): **[Holiday](https://calendar.google.com/event)**");
//! ```

mod attendance;
mod time;
mod title;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::Event;

pub use attendance::render_self_attendance;
pub use time::{render_event_time, render_event_time_with_day};
pub use title::{escape_markdown_link_text, render_title_link};

/// Named strftime patterns used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimePatterns {
    /// Full weekday name ("Sunday").
    pub day_of_week: &'static str,
    /// Date of an all-day event ("Jan 1, 2017").
    pub all_day: &'static str,
    /// Short date of a timed event ("Sun, Jan 1").
    pub date: &'static str,
    /// Sortable civil date ("2017-01-01").
    pub ymd: &'static str,
    /// Time of day ("12:00 PM").
    pub time: &'static str,
    /// Timezone abbreviation ("EST").
    pub tz: &'static str,
}

/// Literal strings the renderers emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verbiage {
    /// Separator between start and end.
    pub dash: &'static str,
    /// Suffix for events that fit within a single day.
    pub all_day_suffix: &'static str,
    /// Replaces the start date when it equals the reference date.
    pub today: &'static str,
    /// Title used when the event has none.
    pub untitled: &'static str,
    /// Marker for an accepted invitation.
    pub accepted: &'static str,
    /// Label of the hangout link.
    pub join_hangout: &'static str,
    /// Prefix of the location line.
    pub where_label: &'static str,
}

/// The pattern table.
pub const PATTERNS: DateTimePatterns = DateTimePatterns {
    day_of_week: "%A",
    all_day: "%b %-d, %Y",
    date: "%a, %b %-d",
    ymd: "%Y-%m-%d",
    time: "%-I:%M %p",
    tz: "%Z",
};

/// The verbiage table.
pub const VERBIAGE: Verbiage = Verbiage {
    dash: "\u{2014}",
    all_day_suffix: "(all day)",
    today: "Today",
    untitled: "(untitled event)",
    accepted: "\u{2714}\u{fe0e}",
    join_hangout: "Join hangout",
    where_label: "Where:",
};

/// Markdown hard line break.
const HARD_BREAK: &str = "  \n";

/// Configuration options for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Render the expanded multi-line form.
    pub details: bool,
    /// Viewer's IANA timezone, used when the event names none.
    pub timezone: Option<String>,
    /// Reference date for "Today" and same-day elision.
    pub today: Option<NaiveDate>,
}

impl FormatOptions {
    /// Options for the expanded form.
    #[must_use]
    pub fn detailed() -> Self {
        Self {
            details: true,
            ..Self::default()
        }
    }

    /// Set the viewer's timezone.
    #[must_use]
    pub fn with_timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Set the reference date.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

/// Renders an event in the form selected by `options.details`.
///
/// A missing event renders as an empty string.
pub fn render_event<'a>(event: impl Into<Option<&'a Event>>, options: &FormatOptions) -> String {
    let Some(event) = event.into() else {
        return String::new();
    };
    if options.details {
        render_event_with_details(event, options)
    } else {
        render_event_without_details(event, options)
    }
}

/// Renders events in input order.
pub fn render_events(events: &[Event], options: &FormatOptions) -> Vec<String> {
    events.iter().map(|e| render_event(e, options)).collect()
}

/// Renders the expanded multi-line form.
///
/// Every line but the last ends with a markdown hard break.
pub fn render_event_with_details(event: &Event, options: &FormatOptions) -> String {
    let time = render_event_time(event, options.timezone.as_deref(), options.today);
    debug!(
        summary = event.summary_text(),
        all_day = event.is_all_day(),
        details = true,
        "rendering event"
    );

    let mut out = format!(
        "{}{}{}**{}**{}",
        time,
        render_self_attendance(event),
        HARD_BREAK,
        render_title_link(event),
        HARD_BREAK
    );
    if let Some(description) = event.description_text() {
        out.push_str(description);
        out.push_str(HARD_BREAK);
    }
    if let Some(location) = event.location_text() {
        out.push_str(&format!("_{} {}_", VERBIAGE.where_label, location));
        out.push_str(HARD_BREAK);
    }
    out.push_str(&render_hangout_link(event, true));
    out
}

/// Renders the compact single-line form.
pub fn render_event_without_details(event: &Event, options: &FormatOptions) -> String {
    let time = render_event_time(event, options.timezone.as_deref(), options.today);
    debug!(
        summary = event.summary_text(),
        all_day = event.is_all_day(),
        details = false,
        "rendering event"
    );

    format!(
        "{}: **{}**{}{}",
        time,
        render_title_link(event),
        render_self_attendance(event),
        render_hangout_link(event, false)
    )
}

/// Renders the hangout link annotation, or an empty string without one.
///
/// The compact form separates it from the title with a middle dot; the
/// expanded form puts it on its own line.
pub fn render_hangout_link(event: &Event, details: bool) -> String {
    match event.hangout_url() {
        Some(url) => {
            let separator = if details { "" } else { " \u{b7} " };
            format!("{}[{}]({})", separator, VERBIAGE.join_hangout, url)
        }
        None => String::new(),
    }
}
