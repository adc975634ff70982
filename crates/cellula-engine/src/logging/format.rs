use std::fmt::Write as _;

use chrono::{DateTime, Local};

use super::{LogEntry, LogLevel};

/// `strftime` pattern for line timestamps, e.g. `18-Oct-2026 14:03:07`.
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

const ANSI_RESET: &str = "\x1b[0m";

/// Formats an entry as `<tag> [<timestamp>] - <message> (<detail>)`.
///
/// The parenthesized suffix only appears when the entry carries a detail.
/// With `color` set, the tag is wrapped in the level's ANSI color.
pub fn format_line(entry: &LogEntry, color: bool) -> String {
    let mut line = String::with_capacity(entry.message.len() + 40);
    write_head(&mut line, entry.level, &entry.timestamp, color);
    line.push_str(&entry.message);

    if let Some(detail) = entry.detail.as_deref() {
        let _ = write!(line, " ({detail})");
    }

    line
}

pub(super) fn write_head(out: &mut String, level: LogLevel, timestamp: &DateTime<Local>, color: bool) {
    if color {
        out.push_str(level.ansi());
        out.push_str(level.tag());
        out.push_str(ANSI_RESET);
    } else {
        out.push_str(level.tag());
    }

    let _ = write!(out, " [{}] - ", timestamp.format(TIMESTAMP_FORMAT));
}
