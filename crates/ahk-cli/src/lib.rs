//! Front end for the `ahkgen` binary: argument parsing, the read/emit/write
//! driver, and tracing setup.

pub mod args;
pub mod driver;
pub mod tracing_config;
