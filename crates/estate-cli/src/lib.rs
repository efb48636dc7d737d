//! Library side of the `estate` command-line tool.

pub mod config;
pub mod logging;
pub mod sample;
pub mod summary;
