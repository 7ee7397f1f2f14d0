//! The multiplexing root drain shared by every handle to one logger.
use slog::{Drain, OwnedKVList, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::console::ConsoleSink;
use crate::file::FileSink;
use crate::misc;
use crate::pattern::{Pattern, RenderContext};
#[cfg(unix)]
use crate::syslog::SyslogSink;
use crate::types::{Severity, TimeZone};

/// A configured output destination attached to a logger.
///
/// The set of kinds is closed: there is no way to hand the logger an
/// unrecognized sink, and every dispatch over sinks is checked for
/// exhaustiveness by the compiler.
pub enum Sink {
    /// Discards every record.
    Null,

    /// Writes to stdout or stderr, coloring by severity when the stream is
    /// a terminal.
    Console(ConsoleSink),

    /// Appends one rendered line per record to a file.
    File(FileSink),

    /// Submits records to the local syslog daemon. Unix-like platforms only.
    #[cfg(unix)]
    Syslog(SyslogSink),
}
impl Sink {
    fn emit(
        &mut self,
        pattern: &Pattern,
        ctx: &RenderContext<'_>,
        record: &Record<'_>,
        values: &OwnedKVList,
    ) -> std::io::Result<()> {
        match *self {
            Sink::Null => Ok(()),
            Sink::Console(ref mut sink) => sink.emit(pattern, ctx, record, values),
            Sink::File(ref mut sink) => sink.emit(pattern, ctx, record, values),
            #[cfg(unix)]
            Sink::Syslog(ref sink) => {
                sink.emit(record, values);
                Ok(())
            }
        }
    }
}

/// State shared by all clones of a logger handle. The name is fixed at
/// construction; level and pattern may change at any time.
pub(crate) struct Control {
    name: String,
    timezone: TimeZone,
    level: AtomicU8,
    pattern: RwLock<Arc<Pattern>>,
}
impl Control {
    pub fn new(name: &str, timezone: TimeZone) -> Self {
        Control {
            name: name.to_owned(),
            timezone,
            level: AtomicU8::new(Severity::default().to_rank()),
            pattern: RwLock::new(Arc::new(Pattern::default())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> TimeZone {
        self.timezone
    }

    pub fn level(&self) -> Severity {
        Severity::from_rank(self.level.load(Ordering::Relaxed)).unwrap_or(Severity::Off)
    }

    pub fn set_level(&self, severity: Severity) {
        self.level.store(severity.to_rank(), Ordering::Relaxed);
    }

    pub fn pattern(&self) -> Arc<Pattern> {
        self.pattern
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_pattern(&self, pattern: Pattern) {
        *self.pattern.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(pattern);
    }
}

/// Root drain: threshold check, then fan-out to every attached sink.
///
/// The sink list sits behind a mutex, so registration and concurrent
/// emission are serialized and lines of one sink never interleave.
pub(crate) struct MuxDrain {
    control: Arc<Control>,
    sinks: Mutex<Vec<Sink>>,
}
impl MuxDrain {
    pub fn new(control: Arc<Control>) -> Self {
        MuxDrain {
            control,
            sinks: Mutex::new(Vec::new()),
        }
    }

    pub fn attach(&self, sink: Sink) {
        self.sinks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
impl Drain for MuxDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<(), slog::Never> {
        let severity = Severity::from_slog(record.level());
        if !self.control.level().accepts(severity) {
            return Ok(());
        }
        let pattern = self.control.pattern();
        let ctx = RenderContext {
            name: self.control.name(),
            severity,
            timestamp: misc::now_in(self.control.timezone()),
            thread_id: misc::current_thread_id(),
            process_id: std::process::id(),
        };
        let mut sinks = self.sinks.lock().unwrap_or_else(|e| e.into_inner());
        for sink in sinks.iter_mut() {
            // Transport failures stay inside the logger; emission is
            // fire-and-forget for the caller.
            let _ = sink.emit(&pattern, &ctx, record, values);
        }
        Ok(())
    }
}
