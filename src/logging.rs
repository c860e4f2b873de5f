//! Tracing subscriber setup

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::{info, warn};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build the filter from the configured level; `RUST_LOG` wins when set
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber
///
/// Logs go to stdout, and to `log_file` as well when one is given. A log file
/// that cannot be opened leaves stdout-only logging in place.
pub fn init_logging(level: LogLevel, log_file: Option<&Path>) {
    let mut file_error = None;

    let file = log_file.and_then(|path| match open_log_file(path) {
        Ok(file) => Some(file),
        Err(e) => {
            file_error = Some(format!("{}: {}", path.display(), e));
            None
        }
    });

    let (writer, ansi) = match file {
        Some(file) => (
            BoxMakeWriter::new(io::stdout.and(Mutex::new(file))),
            false,
        ),
        None => (BoxMakeWriter::new(io::stdout), true),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init()
        .is_ok();

    if !installed {
        return;
    }

    if let Some(e) = file_error {
        warn!("Failed to open log file {}; only console output will be available", e);
    }
    info!("Log initialized, log level set to {}", level.as_str());
}
