//! Attendance badge rendering.

use crate::event::{Event, ResponseStatus};

use super::VERBIAGE;

/// Renders the viewer's own response as a trailing badge.
///
/// Accepted shows a check mark; declined and tentative show the status name
/// in italics. Only the first self-flagged attendee counts. No response,
/// `needsAction` and unrecognized statuses render as an empty string.
pub fn render_self_attendance(event: &Event) -> String {
    match event.self_attendee().and_then(|a| a.response_status) {
        Some(ResponseStatus::Accepted) => format!(" {}", VERBIAGE.accepted),
        Some(status @ (ResponseStatus::Declined | ResponseStatus::Tentative)) => {
            format!(" _({})_", status.as_str())
        }
        Some(ResponseStatus::NeedsAction | ResponseStatus::Unknown) | None => String::new(),
    }
}
