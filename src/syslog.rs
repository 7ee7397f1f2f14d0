//! Sink that sends records to the local syslog daemon, via the POSIX
//! syslog API. Unix-like platforms only.
//!
//! # Concurrency issues
//!
//! POSIX keeps a single logging handle per process: the `openlog` settings
//! (identity, facility, flags) of the most recently opened syslog sink win,
//! and dropping a sink that owns its identity string calls `closelog`,
//! resetting them. For this reason:
//!
//! * Libraries should not attach a syslog sink unless told to do so by the
//!   main application.
//! * An application should not hold more than one syslog sink at a time,
//!   except briefly when replacing one during a logging-pipeline reload.
//!
//! Since sinks are append-only and live for the process in normal use,
//! these rules are easy to follow: attach one syslog sink at startup and
//! leave it alone.

#![cfg(unix)]

mod builder;
pub use builder::*;

mod config;
pub use config::*;

mod facility;
pub use facility::*;

mod sink;
pub use sink::SyslogSink;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;
