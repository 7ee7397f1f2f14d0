use crate::console::ConsoleSinkBuilder;
use crate::file::FileSinkBuilder;
use crate::mux::Sink;
use crate::null::NullSinkBuilder;
#[cfg(unix)]
use crate::syslog::SyslogBuilder;
use crate::Result;

/// Common interface of the sink builders.
pub trait Build {
    /// Builds a sink.
    fn build(&self) -> Result<Sink>;
}

/// A builder for any of the supported sink kinds.
#[allow(missing_docs)]
#[derive(Debug)]
pub enum SinkBuilder {
    Console(ConsoleSinkBuilder),
    File(FileSinkBuilder),
    Null(NullSinkBuilder),
    #[cfg(unix)]
    Syslog(SyslogBuilder),
}
impl Build for SinkBuilder {
    fn build(&self) -> Result<Sink> {
        match *self {
            SinkBuilder::Console(ref b) => track!(b.build()),
            SinkBuilder::File(ref b) => track!(b.build()),
            SinkBuilder::Null(ref b) => track!(b.build()),
            #[cfg(unix)]
            SinkBuilder::Syslog(ref b) => track!(b.build()),
        }
    }
}
