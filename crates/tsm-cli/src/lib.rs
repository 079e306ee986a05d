//! Command-line front end for the structural type matcher.
//!
//! Reads declaration files produced by an extractor, builds a catalog,
//! scores object-literal shapes against it and prints ranked suggestions.
pub mod args;
pub mod config;
pub mod driver;
pub mod proximity;
pub mod report;
pub mod shapes;
pub mod sources;
pub mod tracing_config;
