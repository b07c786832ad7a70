/// Severity levels of the unified logging system, bit-exact with the
/// platform's `os_log_type_t` values. The values are forwarded verbatim to
/// the OS, so they must never be renumbered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsLogType {
    Default = 0x00,
    Info = 0x01,
    Debug = 0x02,
    Error = 0x10,
    Fault = 0x11,
}

impl OsLogType {
    /// The only way in from an untyped caller; anything outside the five
    /// defined values is rejected rather than forwarded to the OS.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x00 => Some(OsLogType::Default),
            0x01 => Some(OsLogType::Info),
            0x02 => Some(OsLogType::Debug),
            0x10 => Some(OsLogType::Error),
            0x11 => Some(OsLogType::Fault),
            _ => None,
        }
    }

    pub fn as_raw(self) -> u8 {
        self as u8
    }
}

impl From<log::Level> for OsLogType {
    /// Maps `log` crate levels onto os_log severities. `log` has nothing
    /// above `Error`, so `Fault` is only reachable through the explicit
    /// bridge API; `Warn` lands on `Default`, which is always persisted.
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => OsLogType::Error,
            log::Level::Warn => OsLogType::Default,
            log::Level::Info => OsLogType::Info,
            log::Level::Debug => OsLogType::Debug,
            log::Level::Trace => OsLogType::Debug,
        }
    }
}
