use libc::c_int;
use slog::{OwnedKVList, Record};
use std::ffi::{CStr, CString};
use std::ptr;

use super::SyslogBuilder;
use crate::pattern;
use crate::types::Severity;
use crate::{Error, Result};

#[cfg(test)]
use super::mock::{closelog, openlog, syslog};
#[cfg(not(test))]
use libc::{closelog, openlog, syslog};

/// A syslog output target.
///
/// The pattern does not apply here: syslogd supplies its own timestamp and
/// tagging, so each record is submitted as the message text plus its
/// structured key/value pairs.
pub struct SyslogSink {
    /// The identity string passed to `openlog`. libc implementations may
    /// keep the pointer until `closelog`, so the string must outlive the
    /// sink.
    ident: Option<CString>,
}

impl SyslogSink {
    pub(super) fn open(builder: &SyslogBuilder) -> Result<Self> {
        let ident = match builder.ident {
            Some(ref s) => Some(track!(CString::new(s.as_str()).map_err(Error::from))?),
            None => None,
        };
        let option = if builder.log_pid { libc::LOG_PID } else { 0 };
        let ident_ptr = ident.as_ref().map_or(ptr::null(), |s| s.as_ptr());
        unsafe {
            openlog(ident_ptr, option, builder.facility.into());
        }
        Ok(SyslogSink { ident })
    }

    pub(crate) fn emit(&self, record: &Record<'_>, values: &OwnedKVList) {
        let mut msg = String::new();
        pattern::write_message(&mut msg, record, values);
        let msg = to_cstring_lossy(msg);
        let priority = priority_of(Severity::from_slog(record.level()));
        unsafe {
            syslog(
                priority,
                CStr::from_bytes_with_nul_unchecked(b"%s\0").as_ptr(),
                msg.as_ptr(),
            );
        }
    }
}

impl Drop for SyslogSink {
    fn drop(&mut self) {
        // If we registered an owned ident string, libc may still hold its
        // pointer; close the logging handle before the string is freed.
        if self.ident.is_some() {
            unsafe {
                closelog();
            }
        }
    }
}

fn priority_of(severity: Severity) -> c_int {
    match severity {
        Severity::Critical => libc::LOG_CRIT,
        Severity::Error => libc::LOG_ERR,
        Severity::Warning => libc::LOG_WARNING,
        Severity::Info => libc::LOG_INFO,
        Severity::Trace | Severity::Debug | Severity::Off => libc::LOG_DEBUG,
    }
}

/// Converts a `String` to a `CString`, stripping any interior null bytes
/// instead of failing on them.
fn to_cstring_lossy(s: String) -> CString {
    let mut bytes: Vec<u8> = s.into();
    bytes.retain(|b| *b != 0);
    // Sound: no null bytes remain, and a terminator is appended.
    unsafe { CString::from_vec_unchecked(bytes) }
}
