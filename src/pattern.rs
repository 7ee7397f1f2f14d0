//! Pattern templates controlling the textual layout of emitted records.
//!
//! A pattern is an ordinary string in which `%`-directives are replaced per
//! record. The directive set is the line-oriented subset commonly found in
//! logging backends:
//!
//! | Directive | Meaning |
//! |-----------|-----------------------------------------------|
//! | `%v`      | the message (plus `k="v"` pairs, if any)      |
//! | `%n`      | logger name                                   |
//! | `%l`      | severity name (`info`, `warning`, ...)        |
//! | `%L`      | severity initial (`I`, `W`, ...)              |
//! | `%t`      | thread id                                     |
//! | `%P`      | process id                                    |
//! | `%Y` `%m` `%d` | year, month, day                         |
//! | `%H` `%M` `%S` `%e` | hour, minute, second, millisecond   |
//! | `%z`      | UTC offset (`+02:00`)                         |
//! | `%s` `%#` | source file basename, source line             |
//! | `%^` `%$` | start/end of the level-colored range          |
//! | `%%`      | a literal `%`                                 |
//!
//! Unknown directives are copied through verbatim, so parsing never fails.
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use slog::{OwnedKVList, Record, KV};
use std::fmt::Write;

use crate::types::Severity;

/// The pattern used by a logger until `set_pattern` is called.
pub const DEFAULT_PATTERN: &str = "[%Y-%m-%d %H:%M:%S.%e] [%n] [%l] %v";

/// A compiled pattern template.
///
/// # Examples
///
/// ```
/// use logmux::pattern::Pattern;
///
/// let pattern = Pattern::parse("[%H:%M:%S] [%n] %v");
/// assert_eq!(pattern.raw(), "[%H:%M:%S] [%n] %v");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}
impl Pattern {
    /// Compiles `raw` into a pattern. Parsing is total: directives that are
    /// not recognized stay in the output as written.
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            match chars.next() {
                None => literal.push('%'),
                Some('%') => literal.push('%'),
                Some(d) => match Segment::from_directive(d) {
                    Some(segment) => {
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(segment);
                    }
                    None => {
                        literal.push('%');
                        literal.push(d);
                    }
                },
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Pattern {
            raw: raw.to_owned(),
            segments,
        }
    }

    /// The pattern string this template was compiled from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders one record without styling, as used by line-oriented sinks.
    pub(crate) fn render(
        &self,
        ctx: &RenderContext<'_>,
        record: &Record<'_>,
        values: &OwnedKVList,
    ) -> String {
        let mut out = String::with_capacity(self.raw.len() + 64);
        for segment in &self.segments {
            segment.write(&mut out, ctx, record, values);
        }
        out
    }
}
impl Default for Pattern {
    fn default() -> Self {
        Pattern::parse(DEFAULT_PATTERN)
    }
}

/// Per-record values that do not live on the `slog::Record` itself.
pub(crate) struct RenderContext<'a> {
    pub name: &'a str,
    pub severity: Severity,
    pub timestamp: DateTime<FixedOffset>,
    pub thread_id: u64,
    pub process_id: u32,
}

/// How a segment should be styled by decorating sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    Plain,
    Timestamp,
    Level,
    Message,
}

#[derive(Debug, Clone)]
pub(crate) enum Segment {
    Literal(String),
    Message,
    LoggerName,
    LevelName,
    LevelInitial,
    ThreadId,
    ProcessId,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    TzOffset,
    SourceFile,
    SourceLine,
    ColorStart,
    ColorEnd,
}
impl Segment {
    fn from_directive(d: char) -> Option<Self> {
        match d {
            'v' => Some(Segment::Message),
            'n' => Some(Segment::LoggerName),
            'l' => Some(Segment::LevelName),
            'L' => Some(Segment::LevelInitial),
            't' => Some(Segment::ThreadId),
            'P' => Some(Segment::ProcessId),
            'Y' => Some(Segment::Year),
            'm' => Some(Segment::Month),
            'd' => Some(Segment::Day),
            'H' => Some(Segment::Hour),
            'M' => Some(Segment::Minute),
            'S' => Some(Segment::Second),
            'e' => Some(Segment::Millisecond),
            'z' => Some(Segment::TzOffset),
            's' => Some(Segment::SourceFile),
            '#' => Some(Segment::SourceLine),
            '^' => Some(Segment::ColorStart),
            '$' => Some(Segment::ColorEnd),
            _ => None,
        }
    }

    pub(crate) fn style(&self) -> Style {
        match *self {
            Segment::Message => Style::Message,
            Segment::LevelName | Segment::LevelInitial => Style::Level,
            Segment::Year
            | Segment::Month
            | Segment::Day
            | Segment::Hour
            | Segment::Minute
            | Segment::Second
            | Segment::Millisecond
            | Segment::TzOffset => Style::Timestamp,
            _ => Style::Plain,
        }
    }

    pub(crate) fn write(
        &self,
        out: &mut String,
        ctx: &RenderContext<'_>,
        record: &Record<'_>,
        values: &OwnedKVList,
    ) {
        // Writing into a `String` cannot fail.
        let _ = match *self {
            Segment::Literal(ref s) => {
                out.push_str(s);
                Ok(())
            }
            Segment::Message => {
                write_message(out, record, values);
                Ok(())
            }
            Segment::LoggerName => {
                out.push_str(ctx.name);
                Ok(())
            }
            Segment::LevelName => {
                out.push_str(ctx.severity.name());
                Ok(())
            }
            Segment::LevelInitial => {
                out.push(ctx.severity.initial());
                Ok(())
            }
            Segment::ThreadId => write!(out, "{}", ctx.thread_id),
            Segment::ProcessId => write!(out, "{}", ctx.process_id),
            Segment::Year => write!(out, "{:04}", ctx.timestamp.year()),
            Segment::Month => write!(out, "{:02}", ctx.timestamp.month()),
            Segment::Day => write!(out, "{:02}", ctx.timestamp.day()),
            Segment::Hour => write!(out, "{:02}", ctx.timestamp.hour()),
            Segment::Minute => write!(out, "{:02}", ctx.timestamp.minute()),
            Segment::Second => write!(out, "{:02}", ctx.timestamp.second()),
            Segment::Millisecond => write!(out, "{:03}", ctx.timestamp.timestamp_subsec_millis()),
            Segment::TzOffset => write!(out, "{}", ctx.timestamp.offset()),
            Segment::SourceFile => {
                let file = record.file();
                out.push_str(file.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(file));
                Ok(())
            }
            Segment::SourceLine => write!(out, "{}", record.line()),
            Segment::ColorStart | Segment::ColorEnd => Ok(()),
        };
    }
}

/// Writes the record message followed by its structured key/value pairs in
/// ` [k="v" ...]` form. Shared by `%v` and the syslog sink's payload.
pub(crate) fn write_message(out: &mut String, record: &Record<'_>, values: &OwnedKVList) {
    let _ = write!(out, "{}", record.msg());
    let any = {
        let mut serializer = KvWriter {
            out: &mut *out,
            any: false,
        };
        let _ = values.serialize(record, &mut serializer);
        let _ = record.kv().serialize(record, &mut serializer);
        serializer.any
    };
    if any {
        out.push(']');
    }
}

struct KvWriter<'a> {
    out: &'a mut String,
    any: bool,
}
impl<'a> slog::Serializer for KvWriter<'a> {
    fn emit_arguments(&mut self, key: slog::Key, val: &std::fmt::Arguments<'_>) -> slog::Result {
        self.out.push_str(if self.any { " " } else { " [" });
        self.any = true;
        write!(self.out, "{}=\"", key)?;
        // Values may contain the delimiters; escape the two that would break
        // re-parsing the pair.
        for c in val.to_string().chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                _ => self.out.push(c),
            }
        }
        self.out.push('"');
        Ok(())
    }
}
