// src/utils.rs
use std::io::{self, Read};

/// Read until `buf` is full or the stream ends, returning how many bytes
/// were actually read.
///
/// Unlike `read_exact`, a short read at end of file is reported through
/// the count instead of an error; the walker tells a clean end of file
/// (zero bytes at a record boundary) apart from a partial header this way.
pub(crate) fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
