use std::fmt;

use super::error::OslogError;
use super::level::OsLogType;
use super::sys;

/// Longest subsystem string `os_log_create` stores intact. Anything longer
/// silently corrupts the log metadata at the OS level, so it is rejected
/// here instead of forwarded.
pub const SUBSYSTEM_MAX_BYTES: usize = 249;
/// Longest category string the OS stores intact.
pub const CATEGORY_MAX_BYTES: usize = 254;

/// An owned custom log object. Holds the only reference to the native
/// `os_log_t`, which is released exactly once, on drop.
#[derive(Debug)]
pub struct CustomLog {
    raw: sys::RawLog,
    subsystem: String,
    category: String,
}

impl Drop for CustomLog {
    fn drop(&mut self) {
        sys::release(self.raw);
    }
}

/// A log handle. The platform singletons are distinct variants rather than
/// wrapped pointers: `Default` must never be released back to the OS, and
/// `Disabled` means "discard all messages", not "no handle given".
#[derive(Debug)]
pub enum OsLog {
    Custom(CustomLog),
    Default,
    Disabled,
}

impl OsLog {
    /// Creates a custom log object tied to a subsystem (reverse DNS
    /// notation) and category.
    pub fn create(subsystem: &str, category: &str) -> Result<Self, OslogError> {
        if subsystem.is_empty() {
            return Err(OslogError::InvalidArgument("subsystem must not be empty"));
        }
        if subsystem.len() > SUBSYSTEM_MAX_BYTES {
            return Err(OslogError::InvalidArgument("subsystem exceeds 249 bytes"));
        }
        if category.is_empty() {
            return Err(OslogError::InvalidArgument("category must not be empty"));
        }
        if category.len() > CATEGORY_MAX_BYTES {
            return Err(OslogError::InvalidArgument("category exceeds 254 bytes"));
        }

        let raw = sys::create(subsystem, category)?;
        Ok(OsLog::Custom(CustomLog {
            raw,
            subsystem: subsystem.to_string(),
            category: category.to_string(),
        }))
    }

    pub(crate) fn raw(&self) -> sys::RawLog {
        match self {
            OsLog::Custom(log) => log.raw,
            OsLog::Default => sys::default_log(),
            OsLog::Disabled => sys::disabled_log(),
        }
    }

    /// Sends `message` at `log_type`. Fire-and-forget: the OS call has no
    /// meaningful failure mode and its result is not surfaced. The message
    /// crosses the boundary as an opaque `%{public}s` argument and is never
    /// parsed for conversion specifiers.
    pub fn log_with_type(&self, log_type: OsLogType, message: &str) -> Result<(), OslogError> {
        sys::log_with_type(self.raw(), log_type, message)
    }

    /// Whether messages at `log_type` would actually be recorded for this
    /// handle. Lets callers skip building expensive messages the OS would
    /// discard anyway.
    pub fn type_enabled(&self, log_type: OsLogType) -> bool {
        sys::type_enabled(self.raw(), log_type)
    }
}

impl fmt::Display for OsLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsLog::Custom(log) => write!(f, "{}:{}", log.subsystem, log.category),
            OsLog::Default => write!(f, "OS_LOG_DEFAULT"),
            OsLog::Disabled => write!(f, "OS_LOG_DISABLED"),
        }
    }
}
