//! The process-wide logger instance.
//!
//! Exactly one [`MuxLogger`] exists per process once [`init`] has been
//! called. Initialization is explicit and mandatory: using the instance
//! (through [`logger`] or the severity macros) before `init` panics with a
//! clear message rather than conjuring a logger with some default identity.
//! Code that wants to degrade instead can use [`try_logger`].
use once_cell::sync::OnceCell;
use std::fmt;

use crate::config::{MuxConfig, SinkConfig};
use crate::logger::MuxLogger;
use crate::types::Severity;
use crate::Result;

static GLOBAL: OnceCell<MuxLogger> = OnceCell::new();

/// Initializes the process-wide logger with the given name.
///
/// The first call constructs the instance; construction is race-free even
/// when several threads call `init` at once. Subsequent calls are no-ops
/// with respect to identity: they return the existing instance and the name
/// they carry is ignored.
///
/// The fresh instance has no sinks, the default pattern, and an `Info`
/// threshold.
pub fn init(name: &str) -> &'static MuxLogger {
    GLOBAL.get_or_init(|| MuxLogger::new(name))
}

/// Initializes the process-wide logger from a configuration.
///
/// Like [`init`], but the first call builds level, pattern, time zone, and
/// sinks from `config`. If the instance already exists it is returned
/// unchanged and `config` is ignored.
pub fn init_with_config(name: &str, config: &MuxConfig) -> Result<&'static MuxLogger> {
    GLOBAL.get_or_try_init(|| track!(config.build(name)))
}

/// The process-wide logger, if [`init`] has been called.
pub fn try_logger() -> Option<&'static MuxLogger> {
    GLOBAL.get()
}

/// The process-wide logger.
///
/// # Panics
///
/// Panics if [`init`] has not been called. Initialization is a deliberate,
/// explicit step; there is no implicit default instance.
pub fn logger() -> &'static MuxLogger {
    match GLOBAL.get() {
        Some(logger) => logger,
        None => panic!("logmux is not initialized; call logmux::init(name) at startup"),
    }
}

/// Updates the process-wide filter threshold.
///
/// Panics if [`init`] has not been called.
pub fn set_level(severity: Severity) {
    logger().set_level(severity);
}

/// Replaces the process-wide output pattern.
///
/// Panics if [`init`] has not been called.
pub fn set_pattern(pattern: &str) {
    logger().set_pattern(pattern);
}

/// Appends a sink to the process-wide logger.
///
/// Panics if [`init`] has not been called.
pub fn add_sink(config: &SinkConfig) -> Result<()> {
    track!(logger().add_sink(config))
}

/// Logs through the process-wide logger. The severity macros expand to
/// this.
///
/// Panics if [`init`] has not been called.
pub fn log(severity: Severity, args: fmt::Arguments<'_>) {
    logger().log(severity, args);
}
