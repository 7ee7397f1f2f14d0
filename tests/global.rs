//! The process-wide instance is one-per-binary state, so its whole
//! lifecycle is exercised in a single test function.
use logmux::file::FileSinkBuilder;
use logmux::null::NullSinkConfig;
use logmux::types::Severity;
use logmux::{Build, SinkConfig};
use std::fs;

#[test]
fn process_wide_instance_lifecycle() {
    // Nothing is constructed implicitly.
    assert!(logmux::try_logger().is_none());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global.log");

    let logger = logmux::init("app");
    assert_eq!(logger.name(), "app");

    // Later init calls are no-ops with respect to identity.
    let again = logmux::init("other");
    assert_eq!(again.name(), "app");
    assert_eq!(logmux::logger().name(), "app");

    logger.attach(FileSinkBuilder::new(&path).build().unwrap());
    logmux::set_pattern("%n %l %v");
    logmux::set_level(Severity::Warning);

    logmux::info!("below threshold");
    logmux::warn!("disk {} almost full", "/dev/sda1");
    logmux::critical!("int {0}, hex {0:x}, bin {0:b}", 69);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "app warning disk /dev/sda1 almost full\napp critical int 69, hex 45, bin 1000101\n"
    );

    logmux::add_sink(&SinkConfig::Null(NullSinkConfig {})).unwrap();
    assert_eq!(logmux::logger().sink_count(), 2);

    // Config-driven init after the fact is also a no-op: the instance,
    // its name, and its sink set stay as they are.
    let from_config = logmux::init_with_config("late", &logmux::MuxConfig::new()).unwrap();
    assert_eq!(from_config.name(), "app");
    assert_eq!(from_config.sink_count(), 2);
}
