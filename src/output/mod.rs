use std::io::{self, BufWriter, Write};

/// Destination for dumped bytes. Chunks arrive in read order, each exactly
/// once; zero-length chunks are never delivered.
pub trait ByteSink {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// Buffered stdout sink. Bytes are emitted verbatim, so the dump of a
/// binary file is a binary stream; callers must flush before printing
/// anything else around the dump.
pub struct StdoutSink {
    writer: BufWriter<io::Stdout>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            writer: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSink for StdoutSink {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.writer.write_all(chunk)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Capture sink for tests and in-memory consumers.
impl ByteSink for Vec<u8> {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.extend_from_slice(chunk);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
