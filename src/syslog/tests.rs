use super::mock::{self, Event};
use super::{Facility, SyslogBuilder};
use crate::build::Build;
use crate::types::Severity;
use crate::MuxLogger;

#[test]
fn event_sequence_with_owned_ident() {
    let ((), events) = mock::testing(|| {
        let logger = MuxLogger::new("daemonite");
        logger.set_level(Severity::Debug);

        let mut builder = SyslogBuilder::new();
        builder.facility(Facility::Local0).ident("daemonite").log_pid();
        logger.attach(builder.build().unwrap());

        logger.info(format_args!("service started"));
        slog::warn!(logger.slog(), "low space"; "disk" => "/dev/sda1");
        logger.log(Severity::Off, format_args!("never submitted"));

        // The logger (and with it the sink) is dropped here, which must
        // close the logging handle because the sink owns its ident string.
    });

    let expected = vec![
        Event::OpenLog {
            ident: "daemonite".to_string(),
            flags: libc::LOG_PID,
            facility: libc::LOG_LOCAL0,
        },
        Event::SysLog {
            priority: libc::LOG_INFO,
            message: "service started".to_string(),
        },
        Event::SysLog {
            priority: libc::LOG_WARNING,
            message: "low space [disk=\"/dev/sda1\"]".to_string(),
        },
        Event::CloseLog,
    ];
    assert!(
        events == expected,
        "events didn't match\ngot: {:#?}\nexpected: {:#?}",
        events,
        expected
    );
}

#[test]
fn anonymous_sink_skips_closelog() {
    let ((), events) = mock::testing(|| {
        let logger = MuxLogger::new("anon");
        logger.attach(SyslogBuilder::new().build().unwrap());
        logger.error(format_args!("E: {:x}", 255));
    });

    let expected = vec![
        Event::OpenLog {
            ident: String::new(),
            flags: 0,
            facility: libc::LOG_USER,
        },
        Event::SysLog {
            priority: libc::LOG_ERR,
            message: "E: ff".to_string(),
        },
    ];
    assert_eq!(events, expected);
}

#[test]
fn priorities_map_to_severities() {
    let ((), events) = mock::testing(|| {
        let logger = MuxLogger::new("prio");
        logger.set_level(Severity::Trace);
        logger.attach(SyslogBuilder::new().build().unwrap());

        logger.trace(format_args!("t"));
        logger.debug(format_args!("d"));
        logger.warn(format_args!("w"));
        logger.critical(format_args!("c"));
    });

    let priorities: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::SysLog { priority, .. } => Some(*priority),
            _ => None,
        })
        .collect();
    assert_eq!(
        priorities,
        vec![libc::LOG_DEBUG, libc::LOG_DEBUG, libc::LOG_WARNING, libc::LOG_CRIT]
    );
}
