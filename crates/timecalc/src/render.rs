//! Result lines for a computed time and its total day delta.

use crate::time::Time;

/// Which surface the line is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `3:00 AM, 2 days later`
    Terminal,
    /// `3:00 AM (2 days later)`
    Web,
}

/// Render `time` with a note describing `total_days`. Zero days gets no note.
pub fn render_result(time: Time, total_days: i64, style: Style) -> String {
    match day_note(total_days, style) {
        Some(note) => format!("{time}{note}"),
        None => time.to_string(),
    }
}

fn day_note(total_days: i64, style: Style) -> Option<String> {
    let magnitude = total_days.unsigned_abs();
    let note = match (style, total_days.signum()) {
        (_, 0) => return None,
        (Style::Terminal, 1) if magnitude == 1 => ", 1 day later".to_string(),
        (Style::Terminal, 1) => format!(", {magnitude} days later"),
        (Style::Terminal, _) if magnitude == 1 => ", 1 day earlier".to_string(),
        (Style::Terminal, _) => format!(", {magnitude} days earlier"),
        (Style::Web, 1) if magnitude == 1 => " (next day)".to_string(),
        (Style::Web, 1) => format!(" ({magnitude} days later)"),
        (Style::Web, _) if magnitude == 1 => " (previous day)".to_string(),
        (Style::Web, _) => format!(" ({magnitude} days prior)"),
    };
    Some(note)
}
