//! Log sinks handed to the pipeline.
//!
//! The pipeline never touches a global logger directly. It reports through a
//! [`PipelineLog`] supplied by the caller: [`LogFacade`] forwards to the `log`
//! crate (and therefore to whatever `env_logger` setup the binary installed),
//! while [`MemoryLog`] keeps entries so they can be shown after a run.

use std::sync::Mutex;

use chrono::{DateTime, Local};
use log::Level;

pub const PIPELINE_TARGET: &str = "supply_map::pipeline";

pub trait PipelineLog: Send + Sync {
    fn emit(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl PipelineLog for LogFacade {
    fn emit(&self, level: Level, message: &str) {
        log::log!(target: PIPELINE_TARGET, level, "{message}");
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    /// `timestamp - target - LEVEL - message`
    pub fn render(&self) -> String {
        format!(
            "{} - {PIPELINE_TARGET} - {} - {}",
            self.at.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.message
        )
    }
}

#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }

    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }

    pub fn render(&self) -> String {
        self.entries()
            .iter()
            .map(LogEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PipelineLog for MemoryLog {
    fn emit(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(LogEntry {
                at: Local::now(),
                level,
                message: message.to_string(),
            });
        }
    }
}

/// Forwards every entry to two sinks.
pub struct Tee<'a> {
    first: &'a dyn PipelineLog,
    second: &'a dyn PipelineLog,
}

impl<'a> Tee<'a> {
    pub fn new(first: &'a dyn PipelineLog, second: &'a dyn PipelineLog) -> Self {
        Self { first, second }
    }
}

impl PipelineLog for Tee<'_> {
    fn emit(&self, level: Level, message: &str) {
        self.first.emit(level, message);
        self.second.emit(level, message);
    }
}
