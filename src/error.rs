use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read call failed mid-stream. Not the same thing as end-of-input:
    /// end-of-input is a short read and terminates the loop normally.
    #[error("read failed after {bytes_read} bytes: {source}")]
    Read {
        bytes_read: u64,
        #[source]
        source: io::Error,
    },

    #[error("output sink failed after {bytes_read} bytes: {source}")]
    Sink {
        bytes_read: u64,
        #[source]
        source: io::Error,
    },
}

impl DumpError {
    /// Bytes already forwarded to the sink when the failure happened.
    /// Zero for open failures, which happen before any read.
    pub fn bytes_read(&self) -> u64 {
        match self {
            DumpError::Open { .. } => 0,
            DumpError::Read { bytes_read, .. } | DumpError::Sink { bytes_read, .. } => *bytes_read,
        }
    }
}
