pub mod error;
pub mod handle;
pub mod handler;
pub mod level;
pub mod registry;
pub(crate) mod sys;

pub use error::OslogError;
pub use handle::{OsLog, CATEGORY_MAX_BYTES, SUBSYSTEM_MAX_BYTES};
pub use handler::OsLogHandler;
pub use level::OsLogType;
