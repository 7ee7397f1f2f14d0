#[macro_use]
extern crate trackable;

use clap::{Arg, Command};
use logmux::console::ConsoleSinkBuilder;
use logmux::types::Severity;
use logmux::{Build, MuxConfig};

fn main() {
    let matches = Command::new("hello")
        .arg(Arg::new("CONFIG_FILE").index(1))
        .get_matches();

    match matches.get_one::<String>("CONFIG_FILE") {
        Some(path) => {
            let config = track_try_unwrap!(MuxConfig::from_toml_file(path));
            track_try_unwrap!(logmux::init_with_config("hello", &config));
        }
        None => {
            let logger = logmux::init("hello");
            logger.attach(track_try_unwrap!(ConsoleSinkBuilder::new().build()));
        }
    }

    logmux::info!("Example project");
    logmux::error!("Error message with arg: {}", 1);
    logmux::warn!("Easy padding in numbers like: {:08}", 12);
    logmux::critical!("Support for int: {0}, hex: {0:x}, oct: {0:o}, bin: {0:b}", 69);
    logmux::info!("Support for floats {:03.2}", 1.23456);
    logmux::info!("Positional args are {1} {0}", "supported", "also");
    logmux::info!("{:<30}|", "left aligned");

    logmux::set_level(Severity::Debug);
    logmux::debug!("This message should be displayed...");

    logmux::set_pattern("[%H:%M:%S %z] [%n] [%^%L%$] [thread %t] %v");
    logmux::debug!("This message should be displayed as well...");
}
