//! Logging.

#[macro_use]
mod macros;

pub use log::{Level, debug, error, info, log_enabled, trace, warn};
