//! Foundation utilities shared by the exporter and its adapters

pub mod logging;
pub mod math;
