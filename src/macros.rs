//! Severity-leveled macros over the process-wide logger.
//!
//! Each macro takes an ordinary `format!`-style template, so substitution
//! is compile-time checked and supports implicit (`{}`), positional
//! (`{1} {0}`), and width/precision/base (`{:08}`, `{:.2}`, `{:x}`, `{:b}`)
//! directives. All of them panic if [`init`](crate::init) has not been
//! called.

/// Logs at `Trace` severity via the process-wide logger.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::global::log($crate::types::Severity::Trace, format_args!($($arg)*))
    };
}

/// Logs at `Debug` severity via the process-wide logger.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::global::log($crate::types::Severity::Debug, format_args!($($arg)*))
    };
}

/// Logs at `Info` severity via the process-wide logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::global::log($crate::types::Severity::Info, format_args!($($arg)*))
    };
}

/// Logs at `Warning` severity via the process-wide logger.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::global::log($crate::types::Severity::Warning, format_args!($($arg)*))
    };
}

/// Logs at `Error` severity via the process-wide logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::global::log($crate::types::Severity::Error, format_args!($($arg)*))
    };
}

/// Logs at `Critical` severity via the process-wide logger.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {
        $crate::global::log($crate::types::Severity::Critical, format_args!($($arg)*))
    };
}
