use std::fmt;

use super::{LogEntry, LogLevel, LogSink};

/// Leveled application logger writing to an owned sink.
///
/// Single-threaded: every call takes `&mut self`. Pair sinks with a tuple to
/// log to several destinations, e.g. `Logger::new((ConsoleSink::stdout(..), MemorySink::new()))`.
#[derive(Debug, Default)]
pub struct Logger<S: LogSink> {
    sink: S,
}

impl<S: LogSink> Logger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Emits exactly one entry.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.sink.emit(&LogEntry::now(level, message, None));
    }

    /// Emits one entry carrying `error`'s text as detail.
    ///
    /// Uses the alternate form (`{:#}`) so error chains render in full.
    /// An error whose text is empty produces no suffix.
    pub fn log_with(&mut self, level: LogLevel, message: impl Into<String>, error: &dyn fmt::Display) {
        let detail = format!("{error:#}");
        self.sink.emit(&LogEntry::now(level, message, Some(detail)));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn err(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn crit(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }

    pub fn info_with(&mut self, message: impl Into<String>, error: &dyn fmt::Display) {
        self.log_with(LogLevel::Info, message, error);
    }

    pub fn warn_with(&mut self, message: impl Into<String>, error: &dyn fmt::Display) {
        self.log_with(LogLevel::Warning, message, error);
    }

    pub fn err_with(&mut self, message: impl Into<String>, error: &dyn fmt::Display) {
        self.log_with(LogLevel::Error, message, error);
    }

    pub fn crit_with(&mut self, message: impl Into<String>, error: &dyn fmt::Display) {
        self.log_with(LogLevel::Critical, message, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{format_line, ConsoleSink, MemorySink};

    #[derive(Debug)]
    struct Cause(&'static str);

    impl fmt::Display for Cause {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    #[test]
    fn entry_count_matches_call_count() {
        let mut logger = Logger::new(MemorySink::new());
        for n in 0..37 {
            match n % 4 {
                0 => logger.info("i"),
                1 => logger.warn("w"),
                2 => logger.err_with("e", &Cause("c")),
                _ => logger.crit("c"),
            }
        }
        assert_eq!(logger.sink().len(), 37);
    }

    #[test]
    fn each_helper_records_its_level() {
        let mut logger = Logger::new(MemorySink::new());
        logger.info("a");
        logger.warn("b");
        logger.err("c");
        logger.crit("d");

        let levels: Vec<LogLevel> = logger.sink().entries().iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            [LogLevel::Info, LogLevel::Warning, LogLevel::Error, LogLevel::Critical]
        );
    }

    #[test]
    fn error_text_becomes_suffix() {
        let mut logger = Logger::new(MemorySink::new());
        logger.crit_with("Failed to create renderer.", &Cause("adapter not found"));

        let entry = &logger.sink().entries()[0];
        assert_eq!(entry.detail.as_deref(), Some("adapter not found"));
        assert!(format_line(entry, false).ends_with("Failed to create renderer. (adapter not found)"));
    }

    #[test]
    fn empty_error_text_has_no_suffix() {
        let mut logger = Logger::new(MemorySink::new());
        logger.err_with("quiet", &Cause(""));

        let entry = &logger.sink().entries()[0];
        assert_eq!(entry.detail, None);
        assert!(format_line(entry, false).ends_with("- quiet"));
    }

    #[test]
    fn console_and_memory_together() {
        let mut logger = Logger::new((ConsoleSink::new(Vec::new(), false), MemorySink::new()));
        logger.info("hello");
        logger.warn("there");

        let (console, memory) = logger.into_sink();
        let text = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn borrowed_sink_outlives_logger() {
        let mut memory = MemorySink::new();
        {
            let mut logger = Logger::new(&mut memory);
            logger.info("borrowed");
        }
        assert_eq!(memory.entries()[0].message, "borrowed");
    }
}
