//! # I/O Module
//!
//! Export layer for the final result table: the [`traits::ResultSink`]
//! abstraction the campaign hands its results to, and the CSV implementation
//! used by the CLI. The campaign core never formats human-readable output;
//! sinks own all presentation and storage concerns.

pub mod csv;
pub mod traits;
