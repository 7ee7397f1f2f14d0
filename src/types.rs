//! Commonly used types.
use serde::{Deserialize, Serialize};
use slog::Level;
use std::str::FromStr;

use crate::{Error, ErrorKind};

/// The severity of a log record, also used as the logger's filter threshold.
///
/// Severities are totally ordered, `Trace` lowest. `Off` is a
/// threshold-only sentinel: no record carries it, and a logger whose level
/// is `Off` emits nothing.
///
/// # Examples
///
/// The default value:
///
/// ```
/// use logmux::types::Severity;
///
/// assert_eq!(Severity::default(), Severity::Info);
/// assert!(Severity::Off > Severity::Critical);
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
    Off,
}
impl Severity {
    /// Converts `Severity` to a slog `Level`.
    ///
    /// Returns `None` for `Off`, which has no slog counterpart: a message
    /// logged at `Off` is dropped before it reaches the backend.
    pub fn as_slog(self) -> Option<Level> {
        match self {
            Severity::Trace => Some(Level::Trace),
            Severity::Debug => Some(Level::Debug),
            Severity::Info => Some(Level::Info),
            Severity::Warning => Some(Level::Warning),
            Severity::Error => Some(Level::Error),
            Severity::Critical => Some(Level::Critical),
            Severity::Off => None,
        }
    }

    /// Converts a slog `Level` to the corresponding `Severity`.
    pub fn from_slog(level: Level) -> Self {
        match level {
            Level::Trace => Severity::Trace,
            Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warning => Severity::Warning,
            Level::Error => Severity::Error,
            Level::Critical => Severity::Critical,
        }
    }

    /// Whether a logger with this threshold emits a record of severity
    /// `message`.
    ///
    /// ```
    /// use logmux::types::Severity;
    ///
    /// assert!(Severity::Warning.accepts(Severity::Error));
    /// assert!(!Severity::Warning.accepts(Severity::Info));
    /// assert!(!Severity::Off.accepts(Severity::Critical));
    /// ```
    pub fn accepts(self, message: Severity) -> bool {
        message != Severity::Off && message >= self
    }

    /// The lowercase name of this severity.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Off => "off",
        }
    }

    /// The single-letter form used by the `%L` pattern directive.
    pub fn initial(self) -> char {
        match self {
            Severity::Trace => 'T',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warning => 'W',
            Severity::Error => 'E',
            Severity::Critical => 'C',
            Severity::Off => '-',
        }
    }

    pub(crate) fn to_rank(self) -> u8 {
        match self {
            Severity::Trace => 0,
            Severity::Debug => 1,
            Severity::Info => 2,
            Severity::Warning => 3,
            Severity::Error => 4,
            Severity::Critical => 5,
            Severity::Off => 6,
        }
    }

    pub(crate) fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Severity::Trace),
            1 => Some(Severity::Debug),
            2 => Some(Severity::Info),
            3 => Some(Severity::Warning),
            4 => Some(Severity::Error),
            5 => Some(Severity::Critical),
            6 => Some(Severity::Off),
            _ => None,
        }
    }
}
impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}
impl FromStr for Severity {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            "off" => Ok(Severity::Off),
            _ => track_panic!(ErrorKind::Invalid, "Undefined severity: {:?}", s),
        }
    }
}

/// Time Zone used for pattern timestamps.
///
/// # Examples
///
/// The default value:
///
/// ```
/// use logmux::types::TimeZone;
///
/// assert_eq!(TimeZone::default(), TimeZone::Local);
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZone {
    Utc,
    Local,
}
impl Default for TimeZone {
    fn default() -> Self {
        TimeZone::Local
    }
}
impl FromStr for TimeZone {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "utc" => Ok(TimeZone::Utc),
            "local" => Ok(TimeZone::Local),
            _ => track_panic!(ErrorKind::Invalid, "Undefined time zone: {:?}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order_matches_filtering() {
        assert!(Severity::Trace < Severity::Debug);
        assert!(Severity::Critical < Severity::Off);

        // Trace lets everything through, Off nothing.
        for message in &[
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Critical,
        ] {
            assert!(Severity::Trace.accepts(*message));
            assert!(!Severity::Off.accepts(*message));
        }

        assert!(Severity::Error.accepts(Severity::Critical));
        assert!(Severity::Error.accepts(Severity::Error));
        assert!(!Severity::Error.accepts(Severity::Warning));
    }

    #[test]
    fn severity_from_str() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("off".parse::<Severity>().unwrap(), Severity::Off);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn slog_round_trip() {
        for severity in &[
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Critical,
        ] {
            let level = severity.as_slog().unwrap();
            assert_eq!(Severity::from_slog(level), *severity);
        }
        assert_eq!(Severity::Off.as_slog(), None);
    }
}
