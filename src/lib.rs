pub mod api;
pub mod core;

/// Routes this library's own `log` macros into the unified logging system.
/// Safe to call more than once; later calls keep the first logger.
pub fn init_logging() {
    #[cfg(target_os = "macos")]
    {
        use crate::core::handler::OsLogHandler;

        if log::set_boxed_logger(Box::new(OsLogHandler::new())).is_ok() {
            log::set_max_level(log::LevelFilter::Debug);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // unified logging only exists on Apple platforms; the host app
        // installs its own logger (android_logger etc.) elsewhere
    }
}
