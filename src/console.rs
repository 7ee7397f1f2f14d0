//! Console sink.
use serde::{Deserialize, Serialize};
use slog::{OwnedKVList, Record};
use slog_term::{Decorator as _, PlainDecorator, TermDecorator};
use std::io::{self, Write};

use crate::build::Build;
use crate::config::Config;
use crate::mux::Sink;
use crate::pattern::{Pattern, RenderContext, Segment, Style};
use crate::Result;

/// A sink builder which builds sinks that write log records to the terminal.
///
/// When the destination stream is a terminal the severity-styled parts of
/// the pattern (`%l`, `%L`, and anything between `%^` and `%$`) are colored.
///
/// # Examples
///
/// ```
/// use logmux::console::{ConsoleSinkBuilder, Destination};
/// use logmux::{Build, MuxLogger};
///
/// # fn main() -> logmux::Result<()> {
/// let mut builder = ConsoleSinkBuilder::new();
/// builder.destination(Destination::Stderr);
///
/// let logger = MuxLogger::new("console");
/// logger.attach(builder.build()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConsoleSinkBuilder {
    destination: Destination,
}
impl ConsoleSinkBuilder {
    /// Makes a new `ConsoleSinkBuilder` instance.
    pub fn new() -> Self {
        ConsoleSinkBuilder {
            destination: Destination::default(),
        }
    }

    /// Sets the destination to which log records will be outputted.
    pub fn destination(&mut self, destination: Destination) -> &mut Self {
        self.destination = destination;
        self
    }
}
impl Default for ConsoleSinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl Build for ConsoleSinkBuilder {
    fn build(&self) -> Result<Sink> {
        Ok(Sink::Console(ConsoleSink {
            decorator: self.destination.to_decorator(),
        }))
    }
}

/// The destination to which log records will be outputted.
///
/// # Examples
///
/// The default value:
///
/// ```
/// use logmux::console::Destination;
///
/// assert_eq!(Destination::default(), Destination::Stdout);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Standard output.
    Stdout,

    /// Standard error.
    Stderr,
}
impl Default for Destination {
    fn default() -> Self {
        Destination::Stdout
    }
}
impl Destination {
    fn to_decorator(self) -> Decorator {
        let maybe_term_decorator = match self {
            Destination::Stdout => TermDecorator::new().stdout().try_build(),
            Destination::Stderr => TermDecorator::new().stderr().try_build(),
        };
        maybe_term_decorator
            .map(Decorator::Term)
            .unwrap_or_else(|| match self {
                Destination::Stdout => Decorator::PlainStdout(PlainDecorator::new(io::stdout())),
                Destination::Stderr => Decorator::PlainStderr(PlainDecorator::new(io::stderr())),
            })
    }
}

enum Decorator {
    Term(TermDecorator),
    PlainStdout(PlainDecorator<io::Stdout>),
    PlainStderr(PlainDecorator<io::Stderr>),
}
impl slog_term::Decorator for Decorator {
    fn with_record<F>(
        &self,
        record: &Record<'_>,
        logger_values: &OwnedKVList,
        f: F,
    ) -> io::Result<()>
    where
        F: FnOnce(&mut dyn slog_term::RecordDecorator) -> io::Result<()>,
    {
        match *self {
            Decorator::Term(ref d) => d.with_record(record, logger_values, f),
            Decorator::PlainStdout(ref d) => d.with_record(record, logger_values, f),
            Decorator::PlainStderr(ref d) => d.with_record(record, logger_values, f),
        }
    }
}

/// A terminal output target, one rendered line per record.
pub struct ConsoleSink {
    decorator: Decorator,
}
impl ConsoleSink {
    pub(crate) fn emit(
        &mut self,
        pattern: &Pattern,
        ctx: &RenderContext<'_>,
        record: &Record<'_>,
        values: &OwnedKVList,
    ) -> io::Result<()> {
        let mut buf = String::new();
        self.decorator.with_record(record, values, |rd| {
            let mut colored = false;
            for segment in pattern.segments() {
                match segment {
                    Segment::ColorStart => {
                        colored = true;
                        continue;
                    }
                    Segment::ColorEnd => {
                        colored = false;
                        continue;
                    }
                    _ => {}
                }
                buf.clear();
                segment.write(&mut buf, ctx, record, values);
                if buf.is_empty() {
                    continue;
                }
                if colored {
                    rd.start_level()?;
                } else {
                    match segment.style() {
                        Style::Level => rd.start_level()?,
                        Style::Timestamp => rd.start_timestamp()?,
                        Style::Message => rd.start_msg()?,
                        Style::Plain => rd.start_whitespace()?,
                    }
                }
                rd.write_all(buf.as_bytes())?;
            }
            rd.start_whitespace()?;
            rd.write_all(b"\n")?;
            rd.flush()
        })
    }
}

/// The configuration of `ConsoleSinkBuilder`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ConsoleSinkConfig {
    /// Output destination.
    #[serde(default)]
    pub destination: Destination,
}
impl ConsoleSinkConfig {
    /// Creates a new `ConsoleSinkConfig` with default settings.
    pub fn new() -> Self {
        Default::default()
    }
}
impl Config for ConsoleSinkConfig {
    type Builder = ConsoleSinkBuilder;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        let mut builder = ConsoleSinkBuilder::new();
        builder.destination(self.destination);
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use crate::MuxLogger;

    #[test]
    fn console_sink_smoke() {
        let logger = MuxLogger::new("console-test");
        logger.attach(ConsoleSinkBuilder::new().build().unwrap());
        logger.set_level(Severity::Trace);
        logger.set_pattern("[%^%l%$] %v");
        logger.info(format_args!("colored {}", "segments"));
        logger.trace(format_args!("and a plain one"));
    }
}
