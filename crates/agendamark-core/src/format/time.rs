//! Time phrase rendering.

use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use tracing::warn;

use super::{PATTERNS, VERBIAGE};
use crate::event::Event;
use crate::time::{EventTiming, resolve_time_zone};

/// Renders when an event happens.
///
/// `tz` is the viewer's zone, used when the event names none. When `today`
/// matches the event's start date the date is replaced with "Today" (all-day
/// events) or left out (timed events on a single day).
///
/// A missing event renders as an empty string.
pub fn render_event_time<'a>(
    event: impl Into<Option<&'a Event>>,
    tz: Option<&str>,
    today: Option<NaiveDate>,
) -> String {
    render_time_phrase(event.into(), tz, today, false)
}

/// Like [`render_event_time`], with the weekday name before each date.
pub fn render_event_time_with_day<'a>(
    event: impl Into<Option<&'a Event>>,
    tz: Option<&str>,
    today: Option<NaiveDate>,
) -> String {
    render_time_phrase(event.into(), tz, today, true)
}

fn render_time_phrase(
    event: Option<&Event>,
    tz: Option<&str>,
    today: Option<NaiveDate>,
    include_day: bool,
) -> String {
    let Some(event) = event else {
        return String::new();
    };

    match EventTiming::from_event(event) {
        Some(EventTiming::AllDay { start, end }) => render_all_day(start, end, today, include_day),
        Some(EventTiming::Timed { start, end, zone }) => {
            let tz = resolve_time_zone(zone.as_deref(), tz);
            render_timed(start, end, tz, today, include_day)
        }
        None => {
            warn!(
                summary = event.summary_text(),
                "event start has neither a date nor a dateTime"
            );
            String::new()
        }
    }
}

fn render_all_day(
    start: NaiveDate,
    end: Option<NaiveDate>,
    today: Option<NaiveDate>,
    include_day: bool,
) -> String {
    let start_phrase = all_day_phrase(start, include_day);
    let mut out = if today == Some(start) {
        VERBIAGE.today.to_string()
    } else {
        start_phrase.clone()
    };

    // The end date is exclusive.
    let end_phrase = end
        .and_then(|end| end.pred_opt())
        .map(|last| all_day_phrase(last, include_day))
        .filter(|phrase| *phrase != start_phrase);

    match end_phrase {
        Some(phrase) => out.push_str(&format!(" {} {}", VERBIAGE.dash, phrase)),
        None => out.push_str(&format!(" {}", VERBIAGE.all_day_suffix)),
    }
    out
}

fn render_timed(
    start: DateTime<FixedOffset>,
    end: Option<DateTime<FixedOffset>>,
    tz: Tz,
    today: Option<NaiveDate>,
    include_day: bool,
) -> String {
    let start = start.with_timezone(&tz);
    let end = end.map(|end| end.with_timezone(&tz));

    let ends_same_day = end
        .as_ref()
        .is_none_or(|end| end.date_naive() == start.date_naive());
    let elide_date = ends_same_day && today == Some(start.date_naive());

    let mut out = if elide_date {
        start.format(PATTERNS.time).to_string()
    } else {
        dated_phrase(&start, include_day)
    };

    if let Some(end) = end {
        let end_phrase = if ends_same_day {
            end.format(PATTERNS.time).to_string()
        } else {
            dated_phrase(&end, include_day)
        };
        out.push_str(&format!(" {} {}", VERBIAGE.dash, end_phrase));
    }

    out.push_str(&format!(" {}", start.format(PATTERNS.tz)));
    out
}

fn all_day_phrase(date: NaiveDate, include_day: bool) -> String {
    let phrase = date.format(PATTERNS.all_day).to_string();
    if include_day {
        format!("{}, {}", date.format(PATTERNS.day_of_week), phrase)
    } else {
        phrase
    }
}

fn dated_phrase(dt: &DateTime<Tz>, include_day: bool) -> String {
    let phrase = format!("{} {}", dt.format(PATTERNS.date), dt.format(PATTERNS.time));
    if include_day {
        format!("{}, {}", dt.format(PATTERNS.day_of_week), phrase)
    } else {
        phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn timed(start: &str, end: &str) -> Event {
        Event::timed(instant(start), instant(end))
    }

    fn timed_in(start: &str, end: &str, zone: &str) -> Event {
        Event::new(
            EventDateTime::from_date_time(instant(start)).with_time_zone(zone),
            EventDateTime::from_date_time(instant(end)).with_time_zone(zone),
        )
    }

    #[test]
    fn missing_event_is_empty() {
        assert_eq!(render_event_time(None::<&Event>, None, None), "");
        assert_eq!(render_event_time_with_day(None::<&Event>, None, None), "");
    }

    #[test]
    fn missing_start_is_empty() {
        assert_eq!(render_event_time(&Event::default(), None, None), "");
    }

    mod all_day {
        use super::*;

        #[test]
        fn subtracts_the_exclusive_end_day() {
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 3));
            assert_eq!(
                render_event_time(&event, None, None),
                "Jan 1, 2017 — Jan 2, 2017"
            );
        }

        #[test]
        fn single_day_gets_suffix() {
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 2));
            assert_eq!(render_event_time(&event, None, None), "Jan 1, 2017 (all day)");
        }

        #[test]
        fn today_replaces_start() {
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 2));
            assert_eq!(
                render_event_time(&event, None, Some(date(2017, 1, 1))),
                "Today (all day)"
            );
        }

        #[test]
        fn today_with_range() {
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 4));
            assert_eq!(
                render_event_time(&event, None, Some(date(2017, 1, 1))),
                "Today — Jan 3, 2017"
            );
        }

        #[test]
        fn other_reference_date_is_ignored() {
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 2));
            assert_eq!(
                render_event_time(&event, None, Some(date(2016, 12, 31))),
                "Jan 1, 2017 (all day)"
            );
        }

        #[test]
        fn unspecified_end_gets_suffix() {
            let event =
                Event::all_day(date(2017, 1, 1), date(2017, 1, 5)).with_end_time_unspecified();
            assert_eq!(render_event_time(&event, None, None), "Jan 1, 2017 (all day)");
        }

        #[test]
        fn caller_zone_does_not_matter() {
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 2));
            assert_eq!(
                render_event_time(&event, Some("Pacific/Kiritimati"), None),
                "Jan 1, 2017 (all day)"
            );
        }

        #[test]
        fn with_day_of_week() {
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 3));
            assert_eq!(
                render_event_time_with_day(&event, None, None),
                "Sunday, Jan 1, 2017 — Monday, Jan 2, 2017"
            );
            let event = Event::all_day(date(2017, 1, 1), date(2017, 1, 2));
            assert_eq!(
                render_event_time_with_day(&event, None, None),
                "Sunday, Jan 1, 2017 (all day)"
            );
        }
    }

    mod timed {
        use super::*;

        #[test]
        fn includes_end_date_when_different() {
            let event = timed("2017-01-01T12:00:00.00Z", "2017-01-02T17:00:00.00Z");
            assert_eq!(
                render_event_time(&event, None, None),
                "Sun, Jan 1 12:00 PM — Mon, Jan 2 5:00 PM UTC"
            );
        }

        #[test]
        fn omits_end_date_when_same() {
            let event = timed("2017-01-01T12:00:00.00Z", "2017-01-01T17:00:00.00Z");
            assert_eq!(
                render_event_time(&event, None, None),
                "Sun, Jan 1 12:00 PM — 5:00 PM UTC"
            );
        }

        #[test]
        fn omits_end_when_unspecified() {
            let event = Event {
                start: EventDateTime::from_date_time(instant("2017-01-01T12:00:00.00Z")),
                end_time_unspecified: true,
                ..Event::default()
            };
            assert_eq!(render_event_time(&event, None, None), "Sun, Jan 1 12:00 PM UTC");
        }

        #[test]
        fn defaults_to_utc() {
            let event = timed("2017-01-01T12:00:00.00-05:00", "2017-01-02T17:00:00.00-05:00");
            assert_eq!(
                render_event_time(&event, None, None),
                "Sun, Jan 1 5:00 PM — Mon, Jan 2 10:00 PM UTC"
            );
        }

        #[test]
        fn uses_event_zone() {
            let event = timed_in(
                "2017-01-01T12:00:00.00-05:00",
                "2017-01-02T17:00:00.00-05:00",
                "America/Toronto",
            );
            assert_eq!(
                render_event_time(&event, None, None),
                "Sun, Jan 1 12:00 PM — Mon, Jan 2 5:00 PM EST"
            );
        }

        #[test]
        fn uses_caller_zone_when_event_has_none() {
            let event = timed("2017-01-01T12:00:00.00Z", "2017-01-02T17:00:00.00Z");
            assert_eq!(
                render_event_time(&event, Some("America/Toronto"), None),
                "Sun, Jan 1 7:00 AM — Mon, Jan 2 12:00 PM EST"
            );
        }

        #[test]
        fn prefers_event_zone() {
            let event = timed_in(
                "2017-01-01T12:00:00.00-05:00",
                "2017-01-02T17:00:00.00-05:00",
                "America/Toronto",
            );
            assert_eq!(
                render_event_time(&event, Some("America/Los_Angeles"), None),
                "Sun, Jan 1 12:00 PM — Mon, Jan 2 5:00 PM EST"
            );
        }

        #[test]
        fn zone_moves_the_calendar_day() {
            // 03:00 UTC on Jan 2 is still Jan 1 in Los Angeles.
            let event = timed("2017-01-02T03:00:00Z", "2017-01-02T04:00:00Z");
            assert_eq!(
                render_event_time(&event, Some("America/Los_Angeles"), None),
                "Sun, Jan 1 7:00 PM — 8:00 PM PST"
            );
        }

        #[test]
        fn excludes_date_on_reference_day() {
            let event = timed_in(
                "2017-01-01T12:00:00.00-05:00",
                "2017-01-01T17:00:00.00-05:00",
                "America/Toronto",
            );
            assert_eq!(
                render_event_time(&event, Some("America/Toronto"), Some(date(2017, 1, 1))),
                "12:00 PM — 5:00 PM EST"
            );
        }

        #[test]
        fn excludes_date_without_end() {
            let event = Event {
                start: EventDateTime::from_date_time(instant("2017-01-01T12:00:00Z")),
                end_time_unspecified: true,
                ..Event::default()
            };
            assert_eq!(
                render_event_time(&event, None, Some(date(2017, 1, 1))),
                "12:00 PM UTC"
            );
        }

        #[test]
        fn keeps_dates_when_spanning_days_from_today() {
            let event = timed("2017-01-01T22:00:00Z", "2017-01-02T02:00:00Z");
            assert_eq!(
                render_event_time(&event, None, Some(date(2017, 1, 1))),
                "Sun, Jan 1 10:00 PM — Mon, Jan 2 2:00 AM UTC"
            );
        }

        #[test]
        fn reference_day_is_taken_in_resolved_zone() {
            // 12:00 UTC on Jan 1 is Jan 2 in Auckland.
            let event = timed("2017-01-01T12:00:00Z", "2017-01-01T13:00:00Z");
            assert_eq!(
                render_event_time(&event, Some("Pacific/Auckland"), Some(date(2017, 1, 2))),
                "1:00 AM — 2:00 AM NZDT"
            );
        }

        #[test]
        fn tz_token_follows_start_instant() {
            // Spans the spring-forward change; the label is the start's.
            let event = timed_in(
                "2017-03-11T12:00:00-05:00",
                "2017-03-12T12:00:00-04:00",
                "America/Toronto",
            );
            assert_eq!(
                render_event_time(&event, None, None),
                "Sat, Mar 11 12:00 PM — Sun, Mar 12 12:00 PM EST"
            );
        }

        #[test]
        fn with_day_of_week() {
            let event = timed("2017-01-01T12:00:00Z", "2017-01-02T17:00:00Z");
            assert_eq!(
                render_event_time_with_day(&event, None, None),
                "Sunday, Sun, Jan 1 12:00 PM — Monday, Mon, Jan 2 5:00 PM UTC"
            );
        }

        #[test]
        fn with_day_of_week_elided() {
            let event = timed("2017-01-01T12:00:00Z", "2017-01-01T13:00:00Z");
            assert_eq!(
                render_event_time_with_day(&event, None, Some(date(2017, 1, 1))),
                "12:00 PM — 1:00 PM UTC"
            );
        }
    }
}
