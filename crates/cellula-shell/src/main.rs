use std::io;
use std::process::ExitCode;

use cellula_engine::device::GpuInit;
use cellula_engine::logging::{
    init_logging, ConsoleSink, Logger, LoggingConfig, MemorySink, WriteStyle,
};
use cellula_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

mod app;
mod args;
mod config;
mod grid;

use app::GridApp;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = args::echo_args(&argv, &mut io::stdout().lock()) {
        log::warn!("failed to echo arguments: {err}");
    }

    let mut logger = Logger::new((ConsoleSink::stdout(WriteStyle::Auto), MemorySink::new()));

    let runtime_config = RuntimeConfig {
        title: config::WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(config::SCREEN_WIDTH, config::SCREEN_HEIGHT),
        resizable: true,
        target_fps: config::TARGET_FPS,
    };

    let result = {
        let mut app = GridApp::new(&mut logger);
        Runtime::run(runtime_config, GpuInit::default(), &mut app)
    };

    match result {
        Ok(()) => {
            let (_, history) = logger.sink();
            log::debug!("shut down cleanly after {} log entries", history.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            logger.crit_with(err.summary(), &err);
            ExitCode::FAILURE
        }
    }
}
