//! Logging setup and module-gated logging macros.
//!
//! Each module that uses the macros defines its own switch:
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//! use crate::{log_debug, log_info};
//!
//! log_info!("dispatch started");
//! ```

use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Most verbose level echoed to stderr while a log file is active.
const CONSOLE_LEVEL: Level = Level::Info;

/// Initialise the global logger.
///
/// Without a log file, records go to stderr at `Info` (or whatever `RUST_LOG`
/// asks for). With a log file, the file receives everything from `Debug` up,
/// appended across runs, and stderr still shows `Info` and above.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::new();
    builder.format_timestamp_secs();

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Debug)
                .target(Target::Pipe(Box::new(file)))
                .format(|buf, record| {
                    let line = format_line(buf.timestamp_seconds(), record.level(), record.args());
                    if reaches_console(record.level()) {
                        io::stderr().write_all(line.as_bytes())?;
                    }
                    buf.write_all(line.as_bytes())
                });
        }
        None => {
            builder.filter_level(LevelFilter::Info);
        }
    }

    // RUST_LOG still wins over the defaults above.
    builder.parse_default_env();
    builder
        .try_init()
        .context("logger was already initialised")?;
    Ok(())
}

fn reaches_console(level: Level) -> bool {
    level <= CONSOLE_LEVEL
}

fn format_line(timestamp: impl fmt::Display, level: Level, message: &fmt::Arguments<'_>) -> String {
    format!("{timestamp} - {level} - {message}\n")
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Checks the `ENABLE_LOGS` const in the calling module.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_skips_debug_when_file_logging() {
        assert!(reaches_console(Level::Error));
        assert!(reaches_console(Level::Warn));
        assert!(reaches_console(Level::Info));
        assert!(!reaches_console(Level::Debug));
        assert!(!reaches_console(Level::Trace));
    }

    #[test]
    fn line_is_time_level_message() {
        let line = format_line("2024-05-01T09:00:00Z", Level::Info, &format_args!("Sent {}", 3));
        assert_eq!(line, "2024-05-01T09:00:00Z - INFO - Sent 3\n");
    }
}
