//! The bridge surface the Dart side calls, mirroring the os_log C API:
//! opaque `u64` handles, raw `u8` severities, and the five `OS_LOG_TYPE_*`
//! constants. Validation happens entirely on this side of the boundary;
//! nothing malformed ever reaches the OS.

use crate::core::error::OslogError;
use crate::core::handle::OsLog;
use crate::core::level::OsLogType;
use crate::core::registry;

pub const OS_LOG_TYPE_DEFAULT: u8 = OsLogType::Default as u8;
pub const OS_LOG_TYPE_INFO: u8 = OsLogType::Info as u8;
pub const OS_LOG_TYPE_DEBUG: u8 = OsLogType::Debug as u8;
pub const OS_LOG_TYPE_ERROR: u8 = OsLogType::Error as u8;
pub const OS_LOG_TYPE_FAULT: u8 = OsLogType::Fault as u8;

/// Handle meaning "discard all messages". A reserved value rather than an
/// absent argument, so it can never be confused with "no handle given".
pub const OS_LOG_DISABLED: u64 = registry::DISABLED_HANDLE;
/// Handle for the platform's default log.
pub const OS_LOG_DEFAULT: u64 = registry::DEFAULT_HANDLE;

/// Creates a custom log object for a subsystem (reverse DNS notation) and
/// category, and returns the handle the caller passes to every other call.
/// The handle must eventually go through [`os_log_release`].
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_create(subsystem: String, category: String) -> Result<u64, OslogError> {
    let log = OsLog::create(&subsystem, &category)?;
    Ok(registry::insert(log))
}

/// Accessor for the default-log handle, kept for parity with the C API's
/// `OS_LOG_DEFAULT` object. Equivalent to reading [`OS_LOG_DEFAULT`].
#[flutter_rust_bridge::frb(sync)]
pub fn get_os_log_default() -> u64 {
    OS_LOG_DEFAULT
}

/// Sends a message at a specific level, such as default, info, debug,
/// error, or fault, to the logging system.
///
/// The handle is resolved before the severity is checked, and both are
/// validated before anything is forwarded.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_with_type(log: u64, log_type: u8, message: String) -> Result<(), OslogError> {
    let handle = registry::resolve(log)?;
    let level = OsLogType::from_raw(log_type).ok_or(OslogError::InvalidLevel(log_type))?;
    handle.log_with_type(level, &message)
}

/// Whether the log would actually record messages at the given level; the
/// OS suppresses DEBUG and INFO by default on most configurations.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_type_enabled(log: u64, log_type: u8) -> Result<bool, OslogError> {
    let handle = registry::resolve(log)?;
    let level = OsLogType::from_raw(log_type).ok_or(OslogError::InvalidLevel(log_type))?;
    Ok(handle.type_enabled(level))
}

/// Releases a handle obtained from [`os_log_create`]. Called from the Dart
/// wrapper's finalizer, so it never fails: sentinel handles and handles
/// already released are no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_release(log: u64) {
    registry::release(log);
}

/// Sends a default-level message to the logging system.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log(log: u64, message: String) -> Result<(), OslogError> {
    os_log_with_type(log, OS_LOG_TYPE_DEFAULT, message)
}

/// Sends an info-level message to the logging system.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_info(log: u64, message: String) -> Result<(), OslogError> {
    os_log_with_type(log, OS_LOG_TYPE_INFO, message)
}

/// Sends a debug-level message to the logging system.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_debug(log: u64, message: String) -> Result<(), OslogError> {
    os_log_with_type(log, OS_LOG_TYPE_DEBUG, message)
}

/// Sends an error-level message to the logging system.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_error(log: u64, message: String) -> Result<(), OslogError> {
    os_log_with_type(log, OS_LOG_TYPE_ERROR, message)
}

/// Sends a fault-level message to the logging system.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_fault(log: u64, message: String) -> Result<(), OslogError> {
    os_log_with_type(log, OS_LOG_TYPE_FAULT, message)
}

/// Whether info-level logging is enabled for the log object.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_info_enabled(log: u64) -> Result<bool, OslogError> {
    os_log_type_enabled(log, OS_LOG_TYPE_INFO)
}

/// Whether debug-level logging is enabled for the log object.
#[flutter_rust_bridge::frb(sync)]
pub fn os_log_debug_enabled(log: u64) -> Result<bool, OslogError> {
    os_log_type_enabled(log, OS_LOG_TYPE_DEBUG)
}

/// Whether the unified logging collaborator exists on this platform. On
/// every other target messages go to an in-process recorder and are not
/// persisted anywhere.
#[flutter_rust_bridge::frb(sync)]
pub fn is_supported() -> bool {
    cfg!(target_os = "macos")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_os_log_type_t() {
        assert_eq!(OS_LOG_TYPE_DEFAULT, 0x00);
        assert_eq!(OS_LOG_TYPE_INFO, 0x01);
        assert_eq!(OS_LOG_TYPE_DEBUG, 0x02);
        assert_eq!(OS_LOG_TYPE_ERROR, 0x10);
        assert_eq!(OS_LOG_TYPE_FAULT, 0x11);
    }

    #[test]
    fn test_create_rejects_bad_strings_without_allocating_a_handle() {
        assert!(matches!(
            os_log_create(String::new(), "network".into()),
            Err(OslogError::InvalidArgument(_))
        ));
        assert!(matches!(
            os_log_create("s".repeat(250), "network".into()),
            Err(OslogError::InvalidArgument(_))
        ));
        assert!(matches!(
            os_log_create("com.example.app".into(), "c".repeat(255)),
            Err(OslogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_created_handles_are_not_sentinels() {
        let handle = os_log_create("com.example.app".into(), "api".into())
            .expect("create should succeed");
        assert_ne!(handle, OS_LOG_DEFAULT);
        assert_ne!(handle, OS_LOG_DISABLED);
        os_log_release(handle);
    }

    #[test]
    fn test_disabled_handle_swallows_messages() {
        os_log_with_type(OS_LOG_DISABLED, OS_LOG_TYPE_ERROR, "x".into())
            .expect("disabled log must never raise");
        assert_eq!(
            os_log_type_enabled(OS_LOG_DISABLED, OS_LOG_TYPE_ERROR),
            Ok(false)
        );
    }

    #[test]
    fn test_invalid_severity_fails_for_every_handle_kind() {
        let handle = os_log_create("com.example.app".into(), "severity".into())
            .expect("create should succeed");
        for log in [handle, OS_LOG_DEFAULT, OS_LOG_DISABLED] {
            assert_eq!(
                os_log_with_type(log, 0x03, "x".into()),
                Err(OslogError::InvalidLevel(0x03))
            );
            assert_eq!(
                os_log_type_enabled(log, 0xff),
                Err(OslogError::InvalidLevel(0xff))
            );
        }
        os_log_release(handle);
    }

    #[test]
    fn test_unknown_handle_fails_before_severity_is_checked() {
        // an id that was never issued is rejected as a handle error even
        // when the severity is also out of range
        assert_eq!(
            os_log_with_type(u64::MAX, 0xff, "x".into()),
            Err(OslogError::InvalidHandle)
        );
        assert_eq!(os_log_type_enabled(u64::MAX, 0xff), Err(OslogError::InvalidHandle));
    }

    #[test]
    fn test_released_handle_becomes_invalid() {
        let handle = os_log_create("com.example.app".into(), "released".into())
            .expect("create should succeed");
        os_log_release(handle);
        assert_eq!(
            os_log_with_type(handle, OS_LOG_TYPE_DEFAULT, "x".into()),
            Err(OslogError::InvalidHandle)
        );
    }

    #[test]
    fn test_convenience_wrappers_forward_their_level() {
        os_log(OS_LOG_DEFAULT, "default".into()).expect("os_log should succeed");
        os_log_info(OS_LOG_DEFAULT, "info".into()).expect("os_log_info should succeed");
        os_log_debug(OS_LOG_DEFAULT, "debug".into()).expect("os_log_debug should succeed");
        os_log_error(OS_LOG_DEFAULT, "error".into()).expect("os_log_error should succeed");
        os_log_fault(OS_LOG_DEFAULT, "fault".into()).expect("os_log_fault should succeed");

        assert!(os_log_info_enabled(OS_LOG_DEFAULT).is_ok());
        assert!(os_log_debug_enabled(OS_LOG_DEFAULT).is_ok());
    }

    #[test]
    fn test_is_supported_tracks_the_platform() {
        assert_eq!(is_supported(), cfg!(target_os = "macos"));
    }

    #[test]
    fn test_end_to_end() {
        let handle = os_log_create("com.example.app".into(), "network".into())
            .expect("create should succeed");

        // platform-dependent value; the contract is only that it answers
        let enabled = os_log_type_enabled(handle, OS_LOG_TYPE_DEBUG);
        assert!(enabled.is_ok());

        os_log_with_type(handle, OS_LOG_TYPE_INFO, "connected".into())
            .expect("emit should succeed");

        #[cfg(not(target_os = "macos"))]
        {
            let raw = crate::core::registry::resolve(handle).unwrap().raw();
            os_log_release(handle);
            assert_eq!(crate::core::sys::release_count(raw), 1);

            let emitted = crate::core::sys::emitted_for(raw);
            assert_eq!(emitted.len(), 1);
            assert_eq!(emitted[0].message, "connected");
        }
        #[cfg(target_os = "macos")]
        os_log_release(handle);
    }
}
