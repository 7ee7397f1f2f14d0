use std::io;
use trackable::error::ErrorKind as TrackableErrorKind;
use trackable::error::{ErrorKindExt, TrackableError};

/// The error type for this crate.
#[derive(Debug, Clone, TrackableError)]
pub struct Error(TrackableError<ErrorKind>);
impl From<io::Error> for Error {
    fn from(f: io::Error) -> Self {
        ErrorKind::Other.cause(f).into()
    }
}
impl From<toml::de::Error> for Error {
    fn from(f: toml::de::Error) -> Self {
        ErrorKind::Invalid.cause(f).into()
    }
}
impl From<log::SetLoggerError> for Error {
    fn from(f: log::SetLoggerError) -> Self {
        ErrorKind::Other.cause(f).into()
    }
}
impl From<std::ffi::NulError> for Error {
    fn from(f: std::ffi::NulError) -> Self {
        ErrorKind::Invalid.cause(f).into()
    }
}

/// A list of error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input.
    Invalid,

    /// Unknown error.
    Other,
}
impl TrackableErrorKind for ErrorKind {}
