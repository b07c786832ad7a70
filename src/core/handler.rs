//! `log::Log` backend that forwards records to the unified logging system,
//! the macOS counterpart of `android_logger` on Android builds.

use log::{Log, Metadata, Record};

use super::error::OslogError;
use super::handle::OsLog;
use super::level::OsLogType;

pub struct OsLogHandler {
    log: OsLog,
}

impl OsLogHandler {
    /// Forwards to `OS_LOG_DEFAULT`.
    pub fn new() -> Self {
        Self { log: OsLog::Default }
    }

    /// Forwards to a custom subsystem (reverse DNS notation) and category,
    /// so the host app's records can be filtered in Console.app.
    pub fn with_subsystem(subsystem: &str, category: &str) -> Result<Self, OslogError> {
        Ok(Self {
            log: OsLog::create(subsystem, category)?,
        })
    }
}

impl Default for OsLogHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for OsLogHandler {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.log.type_enabled(OsLogType::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // a record that cannot cross the C boundary is dropped; a logging
        // backend has nowhere left to report the failure
        let _ = self
            .log
            .log_with_type(OsLogType::from(record.level()), &record.args().to_string());
    }

    fn flush(&self) {
        // the OS owns all buffering
    }
}
