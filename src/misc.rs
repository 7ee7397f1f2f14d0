//! Miscellaneous helpers.
use chrono::{DateTime, FixedOffset, Offset};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::logger::MuxLogger;
use crate::types::TimeZone;
use crate::Result;

/// Routes the `log` crate's macros into `logger`'s sinks.
///
/// The logger is installed as the `slog-scope` global for the rest of the
/// process and `slog-stdlog` is registered as the `log` backend, so records
/// produced by third-party crates flow through the same sink set.
///
/// `log::set_logger` only succeeds once per process; a second call to this
/// function returns an error.
pub fn redirect_stdlog(logger: &MuxLogger) -> Result<()> {
    let guard = slog_scope::set_global_logger(logger.slog().clone());
    guard.cancel_reset();
    track!(slog_stdlog::init().map_err(crate::Error::from))?;
    Ok(())
}

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);
thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// A small per-process ordinal for the calling thread, used by the `%t`
/// pattern directive. Stable for the thread's lifetime.
pub(crate) fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}

/// Reads the wall clock in the given time zone, normalized to a fixed
/// offset so pattern rendering does not depend on the zone type.
pub(crate) fn now_in(timezone: TimeZone) -> DateTime<FixedOffset> {
    match timezone {
        TimeZone::Local => {
            let now = chrono::Local::now();
            let offset = *now.offset();
            now.with_timezone(&offset)
        }
        TimeZone::Utc => {
            let now = chrono::Utc::now();
            now.with_timezone(&now.offset().fix())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_ids_are_stable_and_distinct() {
        let here = current_thread_id();
        assert_eq!(here, current_thread_id());

        let other = std::thread::spawn(current_thread_id).join().unwrap();
        assert_ne!(here, other);
    }

    #[test]
    fn utc_clock_has_zero_offset() {
        let now = now_in(TimeZone::Utc);
        assert_eq!(now.offset().local_minus_utc(), 0);
    }
}
