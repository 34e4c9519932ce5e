use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_NAME;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Keeps the file writer alive; logs are flushed when this is dropped.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initializes console logging on stderr, plus a JSON log file when a
/// logging directory is configured.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> LogGuard {
    let default_directive = if verbose {
        "mga_foursomes=debug"
    } else {
        "mga_foursomes=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let mut file_guard = None;
    let file_layer = config.directory.as_ref().and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: cannot create log directory {}: {}", dir.display(), e);
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        file_guard = Some(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    });

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    LogGuard {
        _file_guard: file_guard,
    }
}
