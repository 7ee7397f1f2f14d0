//! Serde-based configuration of loggers and sinks.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::build::{Build, SinkBuilder};
use crate::console::ConsoleSinkConfig;
use crate::file::FileSinkConfig;
use crate::logger::MuxLogger;
use crate::mux::Sink;
use crate::null::NullSinkConfig;
#[cfg(unix)]
use crate::syslog::SyslogConfig;
use crate::types::{Severity, TimeZone};
use crate::{Error, Result};

/// Placeholder syslog configuration for platforms without syslog support.
/// Cannot be constructed; deserializing it is an error.
#[cfg(not(unix))]
#[derive(Clone, Debug, Serialize)]
pub enum SyslogNotSupported {}

#[cfg(not(unix))]
impl<'de> Deserialize<'de> for SyslogNotSupported {
    fn deserialize<D: serde::Deserializer<'de>>(_: D) -> std::result::Result<Self, D::Error> {
        Err(serde::de::Error::custom("syslog is not supported on this platform"))
    }
}

/// Configuration of a sink builder.
pub trait Config {
    /// Sink builder.
    type Builder: Build;

    /// Makes a sink builder associated with this configuration.
    fn try_to_builder(&self) -> Result<Self::Builder>;

    /// Builds a sink with this configuration.
    fn build_sink(&self) -> Result<Sink> {
        let builder = track!(self.try_to_builder())?;
        let sink = track!(builder.build())?;
        Ok(sink)
    }
}

/// The configuration of any of the supported sink kinds, tagged by `type`.
///
/// An unrecognized `type` tag fails deserialization with an error value; it
/// can never reach the sink list.
///
/// # Examples
///
/// Null sink.
///
/// ```
/// use logmux::config::SinkConfig;
///
/// let toml = r#"
/// type = "null"
/// "#;
/// let _config: SinkConfig = toml::from_str(toml).unwrap();
/// ```
///
/// Console sink.
///
/// ```
/// use logmux::config::SinkConfig;
///
/// let toml = r#"
/// type = "console"
/// destination = "stderr"
/// "#;
/// let _config: SinkConfig = toml::from_str(toml).unwrap();
/// ```
///
/// File sink.
///
/// ```
/// use logmux::config::SinkConfig;
///
/// let toml = r#"
/// type = "file"
/// path = "/path/to/file.log"
/// truncate = true
/// "#;
/// let _config: SinkConfig = toml::from_str(toml).unwrap();
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SinkConfig {
    Console(ConsoleSinkConfig),
    File(FileSinkConfig),
    Null(NullSinkConfig),
    #[cfg(unix)]
    Syslog(SyslogConfig),
    #[cfg(not(unix))]
    #[doc(hidden)]
    Syslog(SyslogNotSupported),
}
impl Config for SinkConfig {
    type Builder = SinkBuilder;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        match *self {
            SinkConfig::Console(ref c) => track!(c.try_to_builder()).map(SinkBuilder::Console),
            SinkConfig::File(ref c) => track!(c.try_to_builder()).map(SinkBuilder::File),
            SinkConfig::Null(ref c) => track!(c.try_to_builder()).map(SinkBuilder::Null),
            #[cfg(unix)]
            SinkConfig::Syslog(ref c) => track!(c.try_to_builder()).map(SinkBuilder::Syslog),
            #[cfg(not(unix))]
            SinkConfig::Syslog(ref c) => match *c {},
        }
    }
}
impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig::Console(ConsoleSinkConfig::default())
    }
}

/// The configuration of a whole logger: threshold, pattern, time zone, and
/// the sink set.
///
/// # Examples
///
/// ```
/// use logmux::config::MuxConfig;
///
/// let toml = r#"
/// level = "debug"
/// pattern = "[%H:%M:%S] [%n] %v"
///
/// [[sinks]]
/// type = "console"
///
/// [[sinks]]
/// type = "null"
/// "#;
/// let config = MuxConfig::from_toml_str(toml).unwrap();
/// let logger = config.build("example").unwrap();
/// assert_eq!(logger.sink_count(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct MuxConfig {
    /// Filter threshold.
    #[serde(default)]
    pub level: Severity,

    /// Output pattern; the default pattern when absent.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Time zone of pattern timestamps.
    #[serde(default)]
    pub timezone: TimeZone,

    /// Sinks to attach, in order. Defaults to a single console sink.
    #[serde(default = "default_sinks")]
    pub sinks: Vec<SinkConfig>,
}
impl MuxConfig {
    /// Creates a new `MuxConfig` with default settings.
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads a configuration from TOML text.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        track!(toml::from_str(toml).map_err(Error::from))
    }

    /// Loads a configuration from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = track!(std::fs::read_to_string(path).map_err(Error::from))?;
        track!(Self::from_toml_str(&text))
    }

    /// Builds a logger with the given name from this configuration.
    pub fn build(&self, name: &str) -> Result<MuxLogger> {
        let logger = MuxLogger::with_timezone(name, self.timezone);
        logger.set_level(self.level);
        if let Some(ref pattern) = self.pattern {
            logger.set_pattern(pattern);
        }
        for sink in &self.sinks {
            track!(logger.add_sink(sink))?;
        }
        Ok(logger)
    }
}
impl Default for MuxConfig {
    fn default() -> Self {
        MuxConfig {
            level: Severity::default(),
            pattern: None,
            timezone: TimeZone::default(),
            sinks: default_sinks(),
        }
    }
}

fn default_sinks() -> Vec<SinkConfig> {
    vec![SinkConfig::default()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn unknown_sink_kind_is_an_error_not_a_crash() {
        assert!(toml::from_str::<SinkConfig>("type = \"pigeon\"").is_err());

        let toml = r#"
            [[sinks]]
            type = "pigeon"
        "#;
        assert!(MuxConfig::from_toml_str(toml).is_err());

        // The process carries on; a valid configuration still builds, and
        // the failed one contributed no sink anywhere.
        let logger = MuxConfig::new().build("fallback").unwrap();
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn defaults_give_one_console_sink_at_info() {
        let config = MuxConfig::from_toml_str("").unwrap();
        let logger = config.build("defaults").unwrap();
        assert_eq!(logger.level(), Severity::Info);
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn file_sink_from_toml_writes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.log");
        let toml = format!(
            "level = \"warning\"\npattern = \"%n/%l %v\"\n\n[[sinks]]\ntype = \"file\"\npath = '{}'\n",
            path.display()
        );
        let logger = MuxConfig::from_toml_str(&toml).unwrap().build("cfg").unwrap();

        logger.info(format_args!("filtered out"));
        logger.error(format_args!("kept"));

        assert_eq!(fs::read_to_string(&path).unwrap(), "cfg/error kept\n");
    }

    #[test]
    fn level_strings_cover_all_severities() {
        for name in &["trace", "debug", "info", "warning", "error", "critical", "off"] {
            let toml = format!("level = \"{}\"", name);
            assert!(MuxConfig::from_toml_str(&toml).is_ok(), "level {}", name);
        }
    }
}
