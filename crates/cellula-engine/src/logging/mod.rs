//! Logging utilities.
//!
//! Two layers live here:
//! - `Logger` + `LogSink`: leveled, timestamped application messages written to
//!   an owned sink (console, in-memory list, or both).
//! - `init_logging`: installs `env_logger` behind the `log` facade for engine
//!   diagnostics, using the same line format.

mod entry;
mod format;
mod init;
mod logger;
mod sink;

pub use entry::{LogEntry, LogLevel};
pub use format::{format_line, TIMESTAMP_FORMAT};
pub use init::{init_logging, LoggingConfig};
pub use logger::Logger;
pub use sink::{ConsoleSink, LogSink, MemorySink};

pub use env_logger::WriteStyle;
