//! CLI library components for the EEG conversion tool.

pub mod logging;
pub mod pipeline;
