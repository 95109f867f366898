//! Chunked file dumping with explicit short-read handling.
//!
//! The binary in this crate echoes its arguments and dumps a hardcoded
//! path; the actual read loop lives here so it can be tested against
//! arbitrary files and sinks.

pub mod dumper;
pub mod error;
pub mod output;

pub use dumper::{dump, peek_byte};
pub use error::DumpError;
pub use output::{ByteSink, StdoutSink};
