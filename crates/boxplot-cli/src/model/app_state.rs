use std::path::Path;

use crate::data::{self, LoadedSample};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Messages shown to the user in the status pane.
#[derive(Debug, Default, Clone)]
pub struct StatusLog {
    entries: Vec<LogEntry>,
}

impl StatusLog {
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Appends a message and mirrors it to `tracing`.
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Warn => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }
        self.entries.push(LogEntry { level, message });
    }
}

/// State of the viewer: the current sample and the status log.
///
/// A load replaces the sample wholesale; a failed load keeps the previous one.
#[derive(Debug, Default)]
pub struct AppState {
    sample: Option<LoadedSample>,
    log: StatusLog,
}

impl AppState {
    pub fn sample(&self) -> Option<&LoadedSample> {
        self.sample.as_ref()
    }

    /// Values of the current sample, or an empty slice before the first load.
    pub fn values(&self) -> &[f64] {
        self.sample
            .as_ref()
            .map(|s| s.values.as_slice())
            .unwrap_or_default()
    }

    pub fn log(&self) -> &StatusLog {
        &self.log
    }

    pub fn report(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log.push(level, message);
    }

    /// Starts a new load, clearing messages of the previous one.
    pub fn begin_load(&mut self) {
        self.log.clear();
        self.log.push(LogLevel::Info, "Starting data load...");
    }

    pub fn cancel_load(&mut self) {
        self.log.push(LogLevel::Info, "No file selected.");
    }

    /// Loads `path`, replacing the current sample on success.
    ///
    /// Returns whether the sample was replaced.
    pub fn load_file(&mut self, path: &Path) -> bool {
        self.log
            .push(LogLevel::Info, format!("Selected file: {}", path.display()));
        match data::load_sample(path) {
            Ok(sample) => {
                for skipped in &sample.skipped {
                    self.log
                        .push(LogLevel::Warn, format!("Ignored rest of {skipped}"));
                }
                self.log.push(
                    LogLevel::Info,
                    format!("Data loaded successfully ({} values).", sample.values.len()),
                );
                self.sample = Some(sample);
                true
            }
            Err(e) => {
                self.log
                    .push(LogLevel::Error, format!("Failed to load data: {e:#}"));
                false
            }
        }
    }

    /// Loads the current file again.
    pub fn reload(&mut self) -> bool {
        let Some(path) = self.sample.as_ref().map(|s| s.path.clone()) else {
            self.log.push(LogLevel::Warn, "No file loaded yet.");
            return false;
        };
        self.begin_load();
        self.load_file(&path)
    }
}
