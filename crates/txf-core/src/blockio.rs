//! Reliable block I/O over blocking byte streams.
//!
//! A blocking stream may deliver fewer bytes than requested per call, so both
//! primitives loop until the full buffer is transferred. A zero-length result
//! means the peer closed the stream and terminates the loop with
//! [`Error::ConnectionClosed`].

use std::io::{ErrorKind, Read, Write};

use crate::error::{Error, Result};

/// Write the entire buffer to the stream, looping over short writes.
pub fn send_block<W: Write + ?Sized>(writer: &mut W, buf: &[u8]) -> Result<()> {
    let mut pos = 0;
    while pos < buf.len() {
        match writer.write(&buf[pos..]) {
            Ok(0) => return Err(Error::ConnectionClosed),
            Ok(n) => pos += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Fill the entire buffer from the stream, looping over short reads.
pub fn recv_block<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut pos = 0;
    while pos < buf.len() {
        match reader.read(&mut buf[pos..]) {
            Ok(0) => return Err(Error::ConnectionClosed),
            Ok(n) => pos += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
