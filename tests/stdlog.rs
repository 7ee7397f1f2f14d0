//! `log::set_logger` succeeds once per process, so the bridge gets its own
//! test binary.
use logmux::file::FileSinkBuilder;
use logmux::{Build, MuxLogger};
use std::fs;

#[test]
fn stdlog_records_flow_through_the_sinks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.log");

    let logger = MuxLogger::new("bridge");
    logger.attach(FileSinkBuilder::new(&path).build().unwrap());
    logger.set_pattern("%n %v");

    logmux::redirect_stdlog(&logger).unwrap();
    log::info!("via the log crate: {}", 7);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(
        contents.starts_with("bridge via the log crate: 7"),
        "unexpected contents: {:?}",
        contents
    );

    // A second redirect hits `log::set_logger` again and must fail cleanly.
    assert!(logmux::redirect_stdlog(&logger).is_err());
}
