//! Rendering event JSON to markdown.

use std::io::Read;
use std::path::Path;

use agendamark_core::{
    Event, FormatOptions, parse_events, render_event_time, render_event_time_with_day,
    render_events,
};
use tracing::debug;

use crate::error::CliResult;

/// What to print for each event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Time phrase, title, badge and hangout link.
    #[default]
    Full,
    /// Only the time phrase.
    TimeOnly,
    /// Only the time phrase, prefixed with the weekday.
    WithDay,
}

/// Reads JSON input from a file, or from stdin for `None` and `-`.
pub fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading events from file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            debug!("reading events from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parses `input` and renders every event it holds.
///
/// Compact lines are joined with a newline. Expanded blocks lose their
/// trailing hard break and are separated by a blank line.
pub fn render(input: &str, mode: RenderMode, options: &FormatOptions) -> CliResult<String> {
    let events = parse_events(input)?;
    debug!(count = events.len(), ?mode, "rendering events");

    let (parts, separator) = match mode {
        RenderMode::Full if options.details => {
            let blocks: Vec<String> = render_events(&events, options)
                .into_iter()
                .map(|block| block.trim_end().to_string())
                .collect();
            (blocks, "\n\n")
        }
        RenderMode::Full => (render_events(&events, options), "\n"),
        RenderMode::TimeOnly | RenderMode::WithDay => (time_phrases(&events, mode, options), "\n"),
    };
    Ok(parts.join(separator))
}

fn time_phrases(events: &[Event], mode: RenderMode, options: &FormatOptions) -> Vec<String> {
    let tz = options.timezone.as_deref();
    events
        .iter()
        .map(|event| match mode {
            RenderMode::WithDay => render_event_time_with_day(event, tz, options.today),
            _ => render_event_time(event, tz, options.today),
        })
        .collect()
}
