//! Command-line driver for kmock.
//!
//! Reads a JSON symbol model, runs one generation session over all of its
//! rounds and writes the resulting Kotlin sources plus a dependency manifest.

pub mod args;
pub mod config;
pub mod directory_sink;
pub mod driver;
pub mod tracing_config;
