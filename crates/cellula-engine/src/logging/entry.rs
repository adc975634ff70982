use chrono::{DateTime, Local};

/// Severity of a log entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Fixed-width tag printed at the start of a line.
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => " ERR",
            LogLevel::Critical => "CRIT",
        }
    }

    /// ANSI SGR prefix used when color output is enabled.
    pub const fn ansi(self) -> &'static str {
        match self {
            LogLevel::Info => "\x1b[32m",
            LogLevel::Warning => "\x1b[33m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Critical => "\x1b[41m",
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info | log::Level::Debug | log::Level::Trace => LogLevel::Info,
        }
    }
}

/// A single recorded message.
///
/// Entries are immutable once built; sinks receive them by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub message: String,
    /// Error text attached to the message. `None` when absent or empty.
    pub detail: Option<String>,
}

impl LogEntry {
    /// Builds an entry stamped with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            message: message.into(),
            detail: detail.filter(|d| !d.is_empty()),
        }
    }
}
