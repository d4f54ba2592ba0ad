use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr so they never interleave with prompts on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

/// Initialize logging with `RUST_LOG` filtering (defaults to "warn").
pub fn init_logging() {
    init_logging_with(default_log_mode());
}

pub fn init_logging_with(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match mode {
        LogMode::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogMode::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init(),
    }
}
