//! This crate provides a process-wide logging facade which multiplexes
//! records over console, file, syslog, and null sinks, built on
//! [slog](https://github.com/slog-rs/slog).
//!
//! One named logger is initialized per process. Its severity threshold and
//! output pattern can change at any time; sinks accumulate and are never
//! removed. Messages are `format!`-style templates, checked at compile
//! time.
//!
//! # Examples
//!
//! Initializes the process-wide logger and logs through the macros:
//!
//! ```
//! use logmux::console::ConsoleSinkBuilder;
//! use logmux::types::Severity;
//! use logmux::Build;
//!
//! # fn main() -> logmux::Result<()> {
//! let logger = logmux::init("example");
//! logger.attach(ConsoleSinkBuilder::new().build()?);
//!
//! logmux::info!("Support for floats {:03.2}", 1.23456);
//! logmux::set_level(Severity::Debug);
//! logmux::debug!("Positional args are {1} {0}", "supported", "also");
//! logmux::set_pattern("[%H:%M:%S %z] [%n] [%^%L%$] [thread %t] %v");
//! logmux::debug!("and a new layout from the next record on");
//! # Ok(())
//! # }
//! ```
//!
//! Builds a local logger for injection, without touching the global
//! instance:
//!
//! ```
//! use logmux::null::NullSinkBuilder;
//! use logmux::{Build, MuxLogger};
//!
//! # fn main() -> logmux::Result<()> {
//! let logger = MuxLogger::new("worker");
//! logger.attach(NullSinkBuilder.build()?);
//! logger.warn(format_args!("queue depth {}", 17));
//! # Ok(())
//! # }
//! ```
//!
//! Creates a logger from configuration text (TOML):
//!
//! ```
//! use logmux::MuxConfig;
//!
//! # fn main() -> logmux::Result<()> {
//! let config = MuxConfig::from_toml_str(r#"
//! level = "debug"
//!
//! [[sinks]]
//! type = "console"
//! destination = "stderr"
//! "#)?;
//!
//! let logger = config.build("configured")?;
//! logger.debug(format_args!("ready"));
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
#[macro_use]
extern crate trackable;

pub use crate::build::{Build, SinkBuilder};
pub use crate::config::{Config, MuxConfig, SinkConfig};
pub use crate::error::{Error, ErrorKind};
pub use crate::global::{
    add_sink, init, init_with_config, logger, set_level, set_pattern, try_logger,
};
pub use crate::logger::MuxLogger;
pub use crate::misc::redirect_stdlog;
pub use crate::mux::Sink;

pub mod config;
pub mod console;
pub mod file;
pub mod global;
pub mod null;
pub mod pattern;
pub mod syslog;
pub mod types;

mod build;
mod error;
mod logger;
mod macros;
mod misc;
mod mux;

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
