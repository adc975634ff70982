use std::fmt;
use std::io::Write;
use std::sync::Once;

use chrono::Local;

use super::format::write_head;
use super::LogLevel;

/// Diagnostics logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "cellula_engine=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` behind the `log` facade once.
///
/// Subsequent calls are ignored. Records are printed in the same
/// `<tag> [<timestamp>] - <message>` layout as `Logger`; debug and trace
/// records are tagged `INFO` and prefixed with their target.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
            // wgpu is chatty at info.
            builder.filter_module("wgpu_core", log::LevelFilter::Warn);
            builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);

        // env_logger strips the escapes when the style resolves to no color.
        builder.format(|buf, record| {
            let line = format_record(record.level(), record.target(), record.args(), true);
            writeln!(buf, "{line}")
        });

        // Another logger may already be installed (tests, embedding hosts).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Renders one diagnostics record in the console line layout.
///
/// Debug and trace records are tagged `INFO` and prefixed with `target: `.
fn format_record(level: log::Level, target: &str, args: &fmt::Arguments<'_>, color: bool) -> String {
    let mut line = String::new();
    write_head(&mut line, LogLevel::from(level), &Local::now(), color);
    if level > log::Level::Info {
        line.push_str(target);
        line.push_str(": ");
    }
    let _ = fmt::Write::write_fmt(&mut line, *args);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: log::Level, target: &str, color: bool) -> String {
        format_record(level, target, &format_args!("surface {}x{}", 1280, 720), color)
    }

    #[test]
    fn levels_map_to_console_tags() {
        assert!(record(log::Level::Error, "t", false).starts_with(" ERR ["));
        assert!(record(log::Level::Warn, "t", false).starts_with("WARN ["));
        assert!(record(log::Level::Info, "t", false).starts_with("INFO ["));
        assert!(record(log::Level::Debug, "t", false).starts_with("INFO ["));
        assert!(record(log::Level::Trace, "t", false).starts_with("INFO ["));
    }

    #[test]
    fn info_and_above_have_no_target() {
        for level in [log::Level::Error, log::Level::Warn, log::Level::Info] {
            let line = record(level, "cellula_engine::device", false);
            assert!(line.ends_with("] - surface 1280x720"), "{line}");
        }
    }

    #[test]
    fn debug_and_trace_are_prefixed_with_target() {
        for level in [log::Level::Debug, log::Level::Trace] {
            let line = record(level, "cellula_engine::device", false);
            assert!(line.ends_with("] - cellula_engine::device: surface 1280x720"), "{line}");
        }
    }

    #[test]
    fn color_wraps_the_tag() {
        let line = record(log::Level::Error, "t", true);
        assert!(line.starts_with("\x1b[31m ERR\x1b[0m ["), "{line:?}");
    }
}
