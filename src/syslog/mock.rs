//! Mocks for the POSIX syslog API.
//!
//! The mock `syslog` function takes exactly three parameters, whereas the
//! real one is variadic. This works because the sink always calls it with
//! exactly three parameters anyway.
use libc::{c_char, c_int};
use once_cell::sync::Lazy;
use std::ffi::CStr;
use std::mem;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::Mutex;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    OpenLog {
        ident: String,
        flags: c_int,
        facility: c_int,
    },
    CloseLog,
    SysLog {
        priority: c_int,
        message: String,
    },
}

static EVENTS: Lazy<Mutex<Vec<Event>>> = Lazy::new(|| Mutex::new(Vec::new()));
static TESTING: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Runs `f` with exclusive access to the mocked syslog API and returns its
/// result together with the recorded events.
pub fn testing<T>(f: impl FnOnce() -> T) -> (T, Vec<Event>) {
    let _locked = TESTING.lock().unwrap();

    let result = catch_unwind(AssertUnwindSafe(f));
    let events = take_events();

    match result {
        Ok(ok) => (ok, events),
        Err(panicked) => resume_unwind(panicked),
    }
}

pub fn take_events() -> Vec<Event> {
    mem::take(&mut *EVENTS.lock().unwrap())
}

fn push_event(event: Event) {
    EVENTS.lock().unwrap().push(event);
}

pub unsafe extern "C" fn openlog(ident: *const c_char, logopt: c_int, facility: c_int) {
    push_event(Event::OpenLog {
        ident: string_from_ptr(ident),
        flags: logopt,
        facility,
    });
}

pub unsafe extern "C" fn closelog() {
    push_event(Event::CloseLog);
}

pub unsafe extern "C" fn syslog(priority: c_int, _format: *const c_char, message: *const c_char) {
    push_event(Event::SysLog {
        priority,
        message: string_from_ptr(message),
    });
}

unsafe fn string_from_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        String::from(CStr::from_ptr(ptr).to_string_lossy())
    }
}
