use std::io::{self, Write};

use anstream::{AutoStream, ColorChoice};

use env_logger::WriteStyle;

use super::{format_line, LogEntry};

/// Destination for log entries.
pub trait LogSink {
    fn emit(&mut self, entry: &LogEntry);
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn emit(&mut self, entry: &LogEntry) {
        (**self).emit(entry);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(&mut self, entry: &LogEntry) {
        (**self).emit(entry);
    }
}

/// Fan-out: every entry goes to both sinks, left first.
impl<A: LogSink, B: LogSink> LogSink for (A, B) {
    fn emit(&mut self, entry: &LogEntry) {
        self.0.emit(entry);
        self.1.emit(entry);
    }
}

/// Writes one formatted line per entry.
#[derive(Debug)]
pub struct ConsoleSink<W: Write = io::Stdout> {
    writer: W,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    /// Stdout sink. `WriteStyle::Auto` decides like `env_logger` does: color on a
    /// terminal unless `NO_COLOR` is set, forced by `CLICOLOR_FORCE`.
    pub fn stdout(style: WriteStyle) -> Self {
        let out = io::stdout();
        let color = use_color(style, || AutoStream::choice(&out) != ColorChoice::Never);
        Self::new(out, color)
    }
}

fn use_color(style: WriteStyle, auto: impl FnOnce() -> bool) -> bool {
    match style {
        WriteStyle::Always => true,
        WriteStyle::Never => false,
        _ => auto(),
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> LogSink for ConsoleSink<W> {
    fn emit(&mut self, entry: &LogEntry) {
        // Console output is best-effort; a closed stdout must not take the app down.
        let _ = writeln!(self.writer, "{}", format_line(entry, self.color));
    }
}

/// Append-only in-memory record of every entry, in call order.
///
/// Grows without bound for the lifetime of the sink.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<LogEntry>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LogSink for MemorySink {
    fn emit(&mut self, entry: &LogEntry) {
        self.entries.push(entry.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;

    #[test]
    fn console_sink_writes_one_line_per_entry() {
        let mut sink = ConsoleSink::new(Vec::new(), false);
        sink.emit(&LogEntry::now(LogLevel::Info, "one", None));
        sink.emit(&LogEntry::now(LogLevel::Error, "two", Some("why".into())));

        let out = String::from_utf8(sink.into_writer()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("INFO ["));
        assert!(lines[0].ends_with("- one"));
        assert!(lines[1].starts_with(" ERR ["));
        assert!(lines[1].ends_with("- two (why)"));
    }

    #[test]
    fn console_sink_without_color_emits_no_escapes() {
        let mut sink = ConsoleSink::new(Vec::new(), false);
        sink.emit(&LogEntry::now(LogLevel::Critical, "x", None));
        assert!(!sink.writer().contains(&0x1b));
    }

    #[test]
    fn explicit_style_overrides_detection() {
        assert!(use_color(WriteStyle::Always, || false));
        assert!(!use_color(WriteStyle::Never, || true));
        assert!(use_color(WriteStyle::Auto, || true));
        assert!(!use_color(WriteStyle::Auto, || false));
    }

    #[test]
    fn tuple_fans_out_to_both() {
        let mut pair = (MemorySink::new(), MemorySink::new());
        pair.emit(&LogEntry::now(LogLevel::Warning, "w", None));
        assert_eq!(pair.0.len(), 1);
        assert_eq!(pair.1.len(), 1);
        assert_eq!(pair.0.entries(), pair.1.entries());
    }

    #[test]
    fn memory_sink_keeps_call_order() {
        let mut sink = MemorySink::new();
        for i in 0..5 {
            sink.emit(&LogEntry::now(LogLevel::Info, format!("m{i}"), None));
        }
        let msgs: Vec<&str> = sink.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, ["m0", "m1", "m2", "m3", "m4"]);
    }
}
