//! Linked title rendering.

use std::borrow::Cow;

use crate::event::{Attendee, Event};

/// Characters that would start markdown link syntax or an autolink.
const LINK_TEXT_SPECIALS: [char; 4] = ['[', ']', '<', '>'];

/// Renders the event title as a markdown link to the calendar entry.
///
/// Non-self attendees are appended after `" - "`, comma separated, in the
/// order the provider listed them. The link text is escaped; the URL is
/// used as-is.
pub fn render_title_link(event: &Event) -> String {
    let mut text = event.summary_text().to_string();

    let others: Vec<&str> = event.other_attendees().map(Attendee::name).collect();
    if !others.is_empty() {
        text.push_str(" - ");
        text.push_str(&others.join(", "));
    }

    format!("[{}]({})", escape_markdown_link_text(&text), event.html_link)
}

/// Backslash-escapes `[`, `]`, `<` and `>`.
pub fn escape_markdown_link_text(text: &str) -> Cow<'_, str> {
    if !text.contains(LINK_TEXT_SPECIALS) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if LINK_TEXT_SPECIALS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}
