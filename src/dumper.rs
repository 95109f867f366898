use std::fs::File;
use std::io::{ErrorKind, Read};
use std::num::NonZeroUsize;
use std::path::Path;

use log::{debug, trace};

use crate::error::DumpError;
use crate::output::ByteSink;

/// Read `path` to completion in chunks of up to `chunk_size` bytes,
/// forwarding every non-empty chunk to `sink` in order. Returns the total
/// byte count read.
///
/// A short read (fewer bytes than requested) is end-of-input for a regular
/// file and terminates the loop; a read *error* is surfaced as
/// [`DumpError::Read`] instead of being conflated with end-of-input. The
/// file handle is released on every exit path.
///
/// An empty file is not an error: the sink sees nothing and the result is
/// `Ok(0)`. A file whose length is an exact multiple of `chunk_size`
/// produces only full chunks; the trailing zero-length read ends the loop
/// without reaching the sink.
pub fn dump<S: ByteSink + ?Sized>(
    path: &Path,
    chunk_size: NonZeroUsize,
    sink: &mut S,
) -> Result<u64, DumpError> {
    let mut file = File::open(path).map_err(|source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened {} for chunked read ({} bytes/chunk)", path.display(), chunk_size);

    let mut buf = vec![0u8; chunk_size.get()];
    let mut total: u64 = 0;

    loop {
        let n = match file.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(DumpError::Read {
                    bytes_read: total,
                    source,
                })
            }
        };
        trace!("read {n} of {chunk_size} requested bytes");

        if n > 0 {
            sink.write_chunk(&buf[..n])
                .map_err(|source| DumpError::Sink {
                    bytes_read: total,
                    source,
                })?;
            total += n as u64;
        }
        if n < chunk_size.get() {
            break;
        }
    }

    debug!("finished {}: {total} bytes", path.display());
    Ok(total)
}

/// Read just the first byte of `path`. `None` means the file is empty.
///
/// Open and read failures are reported the same way as [`dump`].
pub fn peek_byte(path: &Path) -> Result<Option<u8>, DumpError> {
    let mut file = File::open(path).map_err(|source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buf = [0u8; 1];
    loop {
        return match file.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => Err(DumpError::Read {
                bytes_read: 0,
                source,
            }),
        };
    }
}
