//! Null sink.
use serde::{Deserialize, Serialize};

use crate::build::Build;
use crate::config::Config;
use crate::mux::Sink;
use crate::Result;

/// A sink builder which builds sinks that discard every record.
#[derive(Debug, Default)]
pub struct NullSinkBuilder;
impl Build for NullSinkBuilder {
    fn build(&self) -> Result<Sink> {
        Ok(Sink::Null)
    }
}

/// The configuration of `NullSinkBuilder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NullSinkConfig {}
impl Config for NullSinkConfig {
    type Builder = NullSinkBuilder;
    fn try_to_builder(&self) -> Result<Self::Builder> {
        Ok(NullSinkBuilder)
    }
}
