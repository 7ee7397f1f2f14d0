//! File sink.
use serde::{Deserialize, Serialize};
use slog::{OwnedKVList, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::build::Build;
use crate::config::Config;
use crate::mux::Sink;
use crate::pattern::{Pattern, RenderContext};
use crate::Result;

/// A sink builder which builds sinks that append log records to a file.
///
/// The file is opened lazily on the first record and reopened if it
/// disappears underneath the logger (e.g., moved away by an external
/// cleanup job).
///
/// # Examples
///
/// ```no_run
/// use logmux::file::FileSinkBuilder;
/// use logmux::{Build, MuxLogger};
///
/// # fn main() -> logmux::Result<()> {
/// let mut builder = FileSinkBuilder::new("/var/log/app.log");
/// builder.truncate();
///
/// let logger = MuxLogger::new("app");
/// logger.attach(builder.build()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileSinkBuilder {
    appender: FileAppender,
}
impl FileSinkBuilder {
    /// Makes a new `FileSinkBuilder` instance writing to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSinkBuilder {
            appender: FileAppender::new(path),
        }
    }

    /// Truncates the file on the first open instead of appending to
    /// whatever is already there.
    pub fn truncate(&mut self) -> &mut Self {
        self.appender.truncate = true;
        self
    }
}
impl Build for FileSinkBuilder {
    fn build(&self) -> Result<Sink> {
        Ok(Sink::File(FileSink {
            appender: self.appender.clone(),
        }))
    }
}

/// A file output target, one rendered line per record, flushed per record.
pub struct FileSink {
    appender: FileAppender,
}
impl FileSink {
    pub(crate) fn emit(
        &mut self,
        pattern: &Pattern,
        ctx: &RenderContext<'_>,
        record: &Record<'_>,
        values: &OwnedKVList,
    ) -> io::Result<()> {
        let mut line = pattern.render(ctx, record, values);
        line.push('\n');
        self.appender.write_all(line.as_bytes())?;
        self.appender.flush()
    }
}

#[derive(Debug)]
struct FileAppender {
    path: PathBuf,
    file: Option<File>,
    truncate: bool,
}
impl Clone for FileAppender {
    fn clone(&self) -> Self {
        FileAppender {
            path: self.path.clone(),
            file: None,
            truncate: self.truncate,
        }
    }
}
impl FileAppender {
    fn new<P: AsRef<Path>>(path: P) -> Self {
        FileAppender {
            path: path.as_ref().to_path_buf(),
            file: None,
            truncate: false,
        }
    }

    fn reopen_if_needed(&mut self) -> io::Result<()> {
        if !self.path.exists() || self.file.is_none() {
            let mut options = OpenOptions::new();
            options.create(true);
            if self.truncate {
                options.write(true).truncate(true);
            } else {
                options.append(true);
            }
            self.file = Some(options.open(&self.path)?);
            // Only the very first open truncates; reopens append.
            self.truncate = false;
        }
        Ok(())
    }
}
impl Write for FileAppender {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.reopen_if_needed()?;
        if let Some(ref mut f) = self.file {
            f.write(buf)
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("Cannot open file: {:?}", self.path),
            ))
        }
    }
    fn flush(&mut self) -> io::Result<()> {
        if let Some(ref mut f) = self.file {
            f.flush()?;
        }
        Ok(())
    }
}

/// The configuration of `FileSinkBuilder`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct FileSinkConfig {
    /// Log file path.
    pub path: PathBuf,

    /// Whether to truncate the file on the first open.
    #[serde(default)]
    pub truncate: bool,
}
impl Config for FileSinkConfig {
    type Builder = FileSinkBuilder;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        let mut builder = FileSinkBuilder::new(&self.path);
        if self.truncate {
            builder.truncate();
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn appender_reopens_when_file_disappears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut appender = FileAppender::new(&path);

        appender.write_all(b"first\n").unwrap();
        appender.flush().unwrap();
        fs::remove_file(&path).unwrap();

        appender.write_all(b"second\n").unwrap();
        appender.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn truncate_applies_only_to_first_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "stale contents\n").unwrap();

        let mut appender = FileAppender::new(&path);
        appender.truncate = true;
        appender.write_all(b"fresh\n").unwrap();
        appender.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");

        fs::remove_file(&path).unwrap();
        appender.write_all(b"after reopen\n").unwrap();
        appender.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "after reopen\n");
    }
}
