//! The logger handle through which all logging and configuration flows.
use slog::{o, Level};
use std::fmt;
use std::sync::Arc;

use crate::config::{Config, SinkConfig};
use crate::mux::{Control, MuxDrain, Sink};
use crate::pattern::Pattern;
use crate::types::{Severity, TimeZone};
use crate::Result;

/// A named logger multiplexing records over an append-only set of sinks.
///
/// Handles are cheap to clone and all clones share the same name, level,
/// pattern, and sinks. The name is immutable after construction; everything
/// else may change at runtime. Construction attaches no sinks, so a fresh
/// logger emits nothing.
///
/// # Examples
///
/// ```
/// use logmux::console::ConsoleSinkBuilder;
/// use logmux::types::Severity;
/// use logmux::{Build, MuxLogger};
///
/// # fn main() -> logmux::Result<()> {
/// let logger = MuxLogger::new("example");
/// logger.attach(ConsoleSinkBuilder::new().build()?);
/// logger.set_level(Severity::Debug);
/// logger.info(format_args!("ready: {} sink(s)", logger.sink_count()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MuxLogger {
    control: Arc<Control>,
    drain: Arc<MuxDrain>,
    slog: slog::Logger,
}

impl MuxLogger {
    /// Makes a new logger with the given name and local-time timestamps.
    pub fn new(name: &str) -> Self {
        MuxLogger::with_timezone(name, TimeZone::default())
    }

    /// Makes a new logger rendering pattern timestamps in `timezone`.
    pub fn with_timezone(name: &str, timezone: TimeZone) -> Self {
        let control = Arc::new(Control::new(name, timezone));
        let drain = Arc::new(MuxDrain::new(control.clone()));
        let slog = slog::Logger::root(drain.clone(), o!());
        MuxLogger {
            control,
            drain,
            slog,
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        self.control.name()
    }

    /// The underlying slog logger.
    ///
    /// Records logged through it (for instance with slog's structured
    /// macros) pass through the same threshold, pattern, and sinks as
    /// records logged through this handle.
    pub fn slog(&self) -> &slog::Logger {
        &self.slog
    }

    /// Builds the sink described by `config` and appends it to the output
    /// set.
    ///
    /// Sinks accumulate: nothing is ever de-duplicated or removed, and
    /// adding the same kind twice yields two independent targets.
    pub fn add_sink(&self, config: &SinkConfig) -> Result<()> {
        let sink = track!(config.build_sink())?;
        self.attach(sink);
        Ok(())
    }

    /// Appends an already-built sink to the output set.
    pub fn attach(&self, sink: Sink) {
        self.drain.attach(sink);
    }

    /// The number of attached sinks.
    pub fn sink_count(&self) -> usize {
        self.drain.sink_count()
    }

    /// Updates the filter threshold. Records strictly below it are dropped
    /// before any rendering cost is paid; `Severity::Off` suppresses all
    /// output.
    pub fn set_level(&self, severity: Severity) {
        self.control.set_level(severity);
    }

    /// The current filter threshold.
    pub fn level(&self) -> Severity {
        self.control.level()
    }

    /// Replaces the output pattern for all current and future sinks.
    ///
    /// Takes effect from the next emitted record; records already emitted
    /// are untouched. See [`crate::pattern`] for the directive set.
    pub fn set_pattern(&self, pattern: &str) {
        self.control.set_pattern(Pattern::parse(pattern));
    }

    /// The pattern string currently in effect.
    pub fn pattern(&self) -> String {
        self.control.pattern().raw().to_owned()
    }

    /// Logs a pre-formatted message at the given severity.
    ///
    /// `Severity::Off` is a threshold, not a message severity; such records
    /// are dropped. Use `format_args!` to build the message, or the
    /// per-severity methods and macros which do it for you.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if let Some(level) = severity.as_slog() {
            match level {
                Level::Trace => slog::log!(self.slog, Level::Trace, "", "{}", args),
                Level::Debug => slog::log!(self.slog, Level::Debug, "", "{}", args),
                Level::Info => slog::log!(self.slog, Level::Info, "", "{}", args),
                Level::Warning => slog::log!(self.slog, Level::Warning, "", "{}", args),
                Level::Error => slog::log!(self.slog, Level::Error, "", "{}", args),
                Level::Critical => slog::log!(self.slog, Level::Critical, "", "{}", args),
            }
        }
    }

    /// Logs at `Trace` severity.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Trace, args);
    }

    /// Logs at `Debug` severity.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    /// Logs at `Info` severity.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Logs at `Warning` severity.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    /// Logs at `Error` severity.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Logs at `Critical` severity.
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Critical, args);
    }
}

impl fmt::Debug for MuxLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MuxLogger")
            .field("name", &self.name())
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Build;
    use crate::file::FileSinkBuilder;
    use std::fs;
    use std::path::Path;

    const ALL: &[Severity] = &[
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Off,
    ];

    fn file_logger(name: &str, path: &Path) -> MuxLogger {
        let logger = MuxLogger::new(name);
        logger.attach(FileSinkBuilder::new(path).build().unwrap());
        logger
    }

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn threshold_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.log");
        let logger = file_logger("matrix", &path);
        logger.set_pattern("%l %v");

        let mut expected = 0;
        for threshold in ALL {
            logger.set_level(*threshold);
            for message in ALL {
                logger.log(*message, format_args!("x"));
                if *message != Severity::Off && message >= threshold {
                    expected += 1;
                }
            }
        }
        assert_eq!(lines(&path).len(), expected);
    }

    #[test]
    fn sinks_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");
        let logger = file_logger("dup", &first);
        logger.attach(FileSinkBuilder::new(&second).build().unwrap());
        assert_eq!(logger.sink_count(), 2);

        logger.set_pattern("%n %L %v");
        logger.info(format_args!("fan out"));

        assert_eq!(fs::read_to_string(&first).unwrap(), "dup I fan out\n");
        assert_eq!(fs::read_to_string(&second).unwrap(), "dup I fan out\n");
    }

    #[test]
    fn format_directives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fmt.log");
        let logger = file_logger("fmt", &path);
        logger.set_pattern("%v");

        logger.info(format_args!("{:08}", 12));
        logger.info(format_args!("{1} {0}", "a", "b"));
        logger.info(format_args!("{:03.2}", 1.23456));
        logger.info(format_args!("{:x} {:b} {:<5}|", 255, 5, "pad"));

        assert_eq!(
            lines(&path),
            vec!["00000012", "b a", "1.23", "ff 101 pad  |"]
        );
    }

    #[test]
    fn pattern_applies_from_next_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pattern.log");
        let logger = file_logger("pat", &path);

        logger.set_pattern("old %v");
        logger.info(format_args!("one"));
        logger.set_pattern("new %v");
        logger.info(format_args!("two"));

        assert_eq!(lines(&path), vec!["old one", "new two"]);
        assert_eq!(logger.pattern(), "new %v");
    }

    #[test]
    fn off_is_not_a_message_severity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("off.log");
        let logger = file_logger("off", &path);
        logger.set_level(Severity::Trace);

        logger.log(Severity::Off, format_args!("never"));
        logger.info(format_args!("once"));

        assert_eq!(lines(&path).len(), 1);
    }

    #[test]
    fn clones_share_state() {
        let logger = MuxLogger::new("shared");
        let clone = logger.clone();
        clone.set_level(Severity::Critical);
        assert_eq!(logger.level(), Severity::Critical);
        assert_eq!(clone.name(), "shared");
    }

    #[test]
    fn slog_macros_reach_the_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slog.log");
        let logger = file_logger("slog", &path);
        logger.set_pattern("%v");

        slog::info!(logger.slog(), "structured {}", 1; "k" => "v");

        assert_eq!(lines(&path), vec!["structured 1 [k=\"v\"]"]);
    }
}
