//! Maps the opaque `u64` ids held by the managed caller onto live log
//! objects. Resolving an id that was never issued (or has been released) is
//! the "is this really a log handle" check: it fails instead of silently
//! falling back to the default log.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use super::error::OslogError;
use super::handle::OsLog;

/// Reserved id meaning "discard all messages". Distinct from an unknown id,
/// which is an error.
pub const DISABLED_HANDLE: u64 = 0;
/// Reserved id for the platform's default log.
pub const DEFAULT_HANDLE: u64 = 1;

const FIRST_CUSTOM_HANDLE: u64 = 16;

static HANDLES: Lazy<Mutex<HashMap<u64, Arc<OsLog>>>> = Lazy::new(|| Mutex::new(HashMap::new()));
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(FIRST_CUSTOM_HANDLE);

static DEFAULT_LOG: Lazy<Arc<OsLog>> = Lazy::new(|| Arc::new(OsLog::Default));
static DISABLED_LOG: Lazy<Arc<OsLog>> = Lazy::new(|| Arc::new(OsLog::Disabled));

/// Registers a log object and returns the id the caller will hold.
pub fn insert(log: OsLog) -> u64 {
    let id = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
    HANDLES.lock().unwrap().insert(id, Arc::new(log));
    id
}

/// Resolves an id to its log object. The sentinels resolve without touching
/// the table; anything else must be a live custom handle.
pub fn resolve(id: u64) -> Result<Arc<OsLog>, OslogError> {
    match id {
        DISABLED_HANDLE => Ok(Arc::clone(&DISABLED_LOG)),
        DEFAULT_HANDLE => Ok(Arc::clone(&DEFAULT_LOG)),
        _ => HANDLES
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(OslogError::InvalidHandle),
    }
}

/// The finalizer path, so it must not fail: sentinel and already-released
/// ids are no-ops. Removing a custom id drops the registry's reference; the
/// native release runs when the last outstanding `Arc` goes away, so a
/// concurrent emit on the same handle can never observe a freed log object.
pub fn release(id: u64) {
    if id == DISABLED_HANDLE || id == DEFAULT_HANDLE {
        return;
    }
    HANDLES.lock().unwrap().remove(&id);
}
