//! Process-wide log sink writing timestamped lines to a file.
//!
//! `init` also registers the sink with the `log` facade, so library crates
//! only depend on `log`.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Label written into the log file.
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    min_level: LogLevel,
    file_path: PathBuf,
}

impl Logger {
    /// Truncates the log file and writes a start marker.
    fn new(file_path: PathBuf, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== Arbor Log Start ===");
        }

        Self {
            min_level,
            file_path,
        }
    }

    fn write(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S");

        // Reopened per entry so a deleted log file is recreated
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// `log::Log` adapter forwarding records to `LOGGER`.
struct LogFacade;

static FACADE: LogFacade = LogFacade;

impl log::Log for LogFacade {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            add(LogLevel::from(record.level()), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Install the sink. Only the first call has an effect; messages logged
/// before it are dropped.
pub fn init(file_path: PathBuf, min_level: LogLevel) {
    let mut first = false;
    LOGGER.get_or_init(|| {
        first = true;
        Mutex::new(Logger::new(file_path, min_level))
    });

    if first && log::set_logger(&FACADE).is_ok() {
        log::set_max_level(min_level.to_filter());
    }
}

fn add(level: LogLevel, message: &str) {
    if let Some(Ok(logger)) = LOGGER.get().map(|l| l.lock()) {
        logger.write(level, message);
    }
}

pub fn debug(message: impl AsRef<str>) {
    add(LogLevel::Debug, message.as_ref());
}

pub fn info(message: impl AsRef<str>) {
    add(LogLevel::Info, message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    add(LogLevel::Warn, message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    add(LogLevel::Error, message.as_ref());
}
