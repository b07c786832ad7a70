use thiserror::Error;

/// Errors surfaced across the bridge. Everything here is detected before
/// any native call with side effects, so a failed operation never leaves a
/// partially constructed log object behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OslogError {
    /// Malformed subsystem, category, or message string.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The caller passed something that is not a live log handle.
    #[error("invalid log handle")]
    InvalidHandle,

    /// The severity value is not one of the five `os_log_type_t` levels.
    #[error("invalid severity level: {0}")]
    InvalidLevel(u8),

    /// The native log object could not be allocated.
    #[error("failed to allocate log object")]
    OutOfMemory,
}
