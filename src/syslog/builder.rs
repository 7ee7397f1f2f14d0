use super::{Facility, SyslogSink};
use crate::build::Build;
use crate::mux::Sink;
use crate::Result;

/// A sink builder which builds sinks that submit records to the local
/// syslog daemon.
///
/// All settings have sensible defaults; most applications will want to set
/// the `facility` and an `ident`.
///
/// # Example
///
/// ```no_run
/// use logmux::syslog::{Facility, SyslogBuilder};
/// use logmux::{Build, MuxLogger};
///
/// # fn main() -> logmux::Result<()> {
/// let mut builder = SyslogBuilder::new();
/// builder.facility(Facility::Daemon).ident("example-app").log_pid();
///
/// let logger = MuxLogger::new("example-app");
/// logger.attach(builder.build()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SyslogBuilder {
    pub(super) facility: Facility,
    pub(super) ident: Option<String>,
    pub(super) log_pid: bool,
}

impl SyslogBuilder {
    /// Makes a new `SyslogBuilder` instance.
    pub fn new() -> Self {
        SyslogBuilder::default()
    }

    /// Sets the syslog facility to send logs to.
    ///
    /// By default, this is the `user` facility.
    pub fn facility(&mut self, facility: Facility) -> &mut Self {
        self.facility = facility;
        self
    }

    /// Sets the name of this program, for inclusion with log messages.
    /// (POSIX calls this the "tag".)
    ///
    /// The string must not contain any zero (ASCII NUL) bytes; building the
    /// sink fails otherwise. If no name is given, the platform libc picks
    /// its own default, usually the process name.
    pub fn ident(&mut self, ident: impl AsRef<str>) -> &mut Self {
        self.ident = Some(ident.as_ref().to_owned());
        self
    }

    /// Include the process ID in log messages.
    pub fn log_pid(&mut self) -> &mut Self {
        self.log_pid = true;
        self
    }
}

impl Build for SyslogBuilder {
    fn build(&self) -> Result<Sink> {
        let sink = track!(SyslogSink::open(self))?;
        Ok(Sink::Syslog(sink))
    }
}
