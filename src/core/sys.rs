//! The seam to the OS logging collaborator.
//!
//! On macOS this is FFI into `libSystem` plus a one-function C shim
//! (`oslog_shim.c`) for `os_log_with_type`, which is a macro and needs a
//! compile-time-constant format string. Every other target gets an
//! in-process backend with the same signatures that records what would have
//! been sent, so the validation and lifetime rules stay testable off-Apple.

use super::error::OslogError;
use super::level::OsLogType;

#[cfg(target_os = "macos")]
mod macos {
    use std::ffi::{c_char, c_void, CString};
    use std::ptr;

    use super::{OsLogType, OslogError};

    /// Opaque `os_log_t` reference. The objects behind these pointers are
    /// documented thread-safe, and the two singletons are process-global.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct RawLog(*mut c_void);

    unsafe impl Send for RawLog {}
    unsafe impl Sync for RawLog {}

    extern "C" {
        static mut _os_log_default: c_void;
        static mut _os_log_disabled: c_void;

        fn os_log_create(subsystem: *const c_char, category: *const c_char) -> *mut c_void;
        fn os_release(object: *mut c_void);
        fn os_log_type_enabled(log: *mut c_void, log_type: u8) -> bool;

        // from oslog_shim.c
        fn oslog_shim_with_type(log: *mut c_void, log_type: u8, message: *const c_char);
    }

    pub(crate) fn default_log() -> RawLog {
        RawLog(unsafe { ptr::addr_of_mut!(_os_log_default) })
    }

    pub(crate) fn disabled_log() -> RawLog {
        RawLog(unsafe { ptr::addr_of_mut!(_os_log_disabled) })
    }

    pub(crate) fn create(subsystem: &str, category: &str) -> Result<RawLog, OslogError> {
        let subsystem = CString::new(subsystem)
            .map_err(|_| OslogError::InvalidArgument("subsystem contains a NUL byte"))?;
        let category = CString::new(category)
            .map_err(|_| OslogError::InvalidArgument("category contains a NUL byte"))?;

        let raw = unsafe { os_log_create(subsystem.as_ptr(), category.as_ptr()) };
        if raw.is_null() {
            return Err(OslogError::OutOfMemory);
        }
        Ok(RawLog(raw))
    }

    pub(crate) fn release(log: RawLog) {
        unsafe { os_release(log.0) };
    }

    pub(crate) fn type_enabled(log: RawLog, log_type: OsLogType) -> bool {
        unsafe { os_log_type_enabled(log.0, log_type.as_raw()) }
    }

    pub(crate) fn log_with_type(
        log: RawLog,
        log_type: OsLogType,
        message: &str,
    ) -> Result<(), OslogError> {
        let message = CString::new(message)
            .map_err(|_| OslogError::InvalidArgument("message contains a NUL byte"))?;
        unsafe { oslog_shim_with_type(log.0, log_type.as_raw(), message.as_ptr()) };
        Ok(())
    }
}

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(not(target_os = "macos"))]
mod portable {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::{OsLogType, OslogError};

    const DEFAULT_TOKEN: usize = 1;
    const DISABLED_TOKEN: usize = 2;
    const FIRST_CUSTOM_TOKEN: usize = 16;

    /// Stand-in for `os_log_t`: an opaque token instead of a pointer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct RawLog(usize);

    #[derive(Debug, Clone)]
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) struct Emitted {
        pub(crate) log: RawLog,
        pub(crate) log_type: OsLogType,
        pub(crate) message: String,
    }

    static NEXT_TOKEN: AtomicUsize = AtomicUsize::new(FIRST_CUSTOM_TOKEN);
    static RELEASED: Lazy<Mutex<Vec<RawLog>>> = Lazy::new(|| Mutex::new(Vec::new()));
    static EMITTED: Lazy<Mutex<Vec<Emitted>>> = Lazy::new(|| Mutex::new(Vec::new()));

    pub(crate) fn default_log() -> RawLog {
        RawLog(DEFAULT_TOKEN)
    }

    pub(crate) fn disabled_log() -> RawLog {
        RawLog(DISABLED_TOKEN)
    }

    pub(crate) fn create(subsystem: &str, category: &str) -> Result<RawLog, OslogError> {
        // same rejection the C boundary would apply
        if subsystem.contains('\0') {
            return Err(OslogError::InvalidArgument("subsystem contains a NUL byte"));
        }
        if category.contains('\0') {
            return Err(OslogError::InvalidArgument("category contains a NUL byte"));
        }
        Ok(RawLog(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed)))
    }

    pub(crate) fn release(log: RawLog) {
        RELEASED.lock().unwrap().push(log);
    }

    pub(crate) fn type_enabled(log: RawLog, _log_type: OsLogType) -> bool {
        // the real collaborator reports false for OS_LOG_DISABLED at every
        // severity; filtering of DEBUG/INFO is config-dependent, so the
        // recorder keeps everything else enabled
        log != disabled_log()
    }

    pub(crate) fn log_with_type(
        log: RawLog,
        log_type: OsLogType,
        message: &str,
    ) -> Result<(), OslogError> {
        if message.contains('\0') {
            return Err(OslogError::InvalidArgument("message contains a NUL byte"));
        }
        if log == disabled_log() {
            return Ok(());
        }
        EMITTED.lock().unwrap().push(Emitted {
            log,
            log_type,
            message: message.to_string(),
        });
        Ok(())
    }

    /// How many times the collaborator's release was invoked for `log`.
    /// Keyed per token so tests stay independent under the parallel runner.
    #[cfg(test)]
    pub(crate) fn release_count(log: RawLog) -> usize {
        RELEASED.lock().unwrap().iter().filter(|&&l| l == log).count()
    }

    /// Everything emitted through `log`, in order.
    #[cfg(test)]
    pub(crate) fn emitted_for(log: RawLog) -> Vec<Emitted> {
        EMITTED
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.log == log)
            .cloned()
            .collect()
    }
}

#[cfg(not(target_os = "macos"))]
pub(crate) use portable::*;
