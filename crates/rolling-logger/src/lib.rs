//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a fixed-size ring
//! and forwards every record to a sink. In the browser the sink is the
//! devtools console; on native targets it is stderr.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept by `init`
pub const DEFAULT_CAPACITY: usize = 500;

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format_line(&self) -> String {
        format!("{} [{}] {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

pub type Sink = fn(&LogEntry);

pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    entries: Mutex<VecDeque<LogEntry>>,
    sink: Sink,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            entries: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink: default_sink,
        }
    }

    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Store an entry, dropping the oldest once the ring is full
    pub fn push(&self, entry: LogEntry) {
        (self.sink)(&entry);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.push(LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if another logger is already set.
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(target_arch = "wasm32")]
fn default_sink(entry: &LogEntry) {
    use web_sys::console;

    let line = entry.format_line().into();
    match entry.level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_sink(entry: &LogEntry) {
    eprintln!("{}", entry.format_line());
}
