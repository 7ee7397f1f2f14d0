use serde::{Deserialize, Serialize};

use super::{Facility, SyslogBuilder};
use crate::config::Config;
use crate::Result;

/// The configuration of `SyslogBuilder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(default)]
pub struct SyslogConfig {
    /// The syslog facility to send logs to.
    pub facility: Facility,

    /// The name of this program, for inclusion with log messages. (POSIX
    /// calls this the "tag".) Must not contain any zero (ASCII NUL) bytes.
    pub ident: Option<String>,

    /// Include the process ID in log messages.
    pub log_pid: bool,
}

impl SyslogConfig {
    /// Creates a new `SyslogConfig` with default settings.
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        SyslogConfig {
            facility: Facility::default(),
            ident: None,
            log_pid: false,
        }
    }
}

impl Config for SyslogConfig {
    type Builder = SyslogBuilder;

    fn try_to_builder(&self) -> Result<Self::Builder> {
        let mut builder = SyslogBuilder::new();
        builder.facility(self.facility);
        if let Some(ref ident) = self.ident {
            builder.ident(ident);
        }
        if self.log_pid {
            builder.log_pid();
        }
        Ok(builder)
    }
}
