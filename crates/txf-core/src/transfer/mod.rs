//! Transfer roles: the transmit/receive halves of the protocol exchange.
//!
//! Both halves share one lifecycle: `init` prepares file-specific state,
//! `process` runs the wire exchange on an established connection, and
//! `finish` releases whatever `init` acquired. The orchestrator in
//! [`crate::connect`] guarantees `finish` runs whenever `init` succeeded,
//! even if `process` fails.

mod receive;
mod transmit;

pub use receive::Receive;
pub use transmit::Transmit;

use std::io::{Read, Write};

use crate::constants::{BLOCK_SIZE, FILENAME_LEN};
use crate::error::{Error, Result};

/// A blocking byte-stream connection between the two peers.
///
/// Blanket-implemented so roles run equally over a real `TcpStream` or an
/// in-memory test double.
pub trait Connection: Read + Write {}

impl<T: Read + Write> Connection for T {}

/// A transfer role: either side of the protocol exchange.
pub trait Role {
    /// Prepare file-specific state. Called exactly once, before the
    /// connection is established.
    fn init(&mut self) -> Result<()>;

    /// Run the wire exchange. Called exactly once, on the established
    /// connection.
    fn process(&mut self, conn: &mut dyn Connection) -> Result<()>;

    /// Release state acquired by `init`. Called exactly once whenever `init`
    /// succeeded, regardless of the `process` outcome.
    fn finish(&mut self);
}

/// Extract and validate the base file name from a path.
///
/// Strips everything through the last `/`; the result must be 1 to
/// [`FILENAME_LEN`] bytes. Applied to the local path when transmitting and,
/// defensively, to the wire-received name when receiving.
pub fn base_name(path: &str) -> Result<&str> {
    let name = match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    if name.is_empty() || name.len() > FILENAME_LEN {
        return Err(Error::Name {
            message: format!("'{path}' must yield a base name of 1-{FILENAME_LEN} bytes"),
        });
    }
    Ok(name)
}

/// Length of the chunk starting at `pos` within a `size`-byte payload:
/// [`BLOCK_SIZE`] except for a shorter final chunk.
pub fn chunk_len(size: u32, pos: u32) -> usize {
    ((size - pos) as usize).min(BLOCK_SIZE)
}

/// Number of chunks a `size`-byte payload partitions into.
pub fn chunk_count(size: u32) -> u32 {
    size.div_ceil(BLOCK_SIZE as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("a.txt").unwrap(), "a.txt");
        assert_eq!(base_name("/tmp/a.txt").unwrap(), "a.txt");
        assert_eq!(base_name("rel/path/to/a.txt").unwrap(), "a.txt");
    }

    #[test]
    fn base_name_rejects_empty() {
        assert!(matches!(base_name(""), Err(Error::Name { .. })));
    }

    #[test]
    fn base_name_rejects_trailing_separator() {
        assert!(matches!(base_name("dir/"), Err(Error::Name { .. })));
        assert!(matches!(base_name("/"), Err(Error::Name { .. })));
    }

    #[test]
    fn base_name_length_boundary() {
        let exact = "x".repeat(FILENAME_LEN);
        assert_eq!(base_name(&exact).unwrap(), exact);

        let over = "x".repeat(FILENAME_LEN + 1);
        assert!(matches!(base_name(&over), Err(Error::Name { .. })));

        // a long directory prefix is fine as long as the base name fits
        let prefixed = format!("{}/a.txt", "d".repeat(100));
        assert_eq!(base_name(&prefixed).unwrap(), "a.txt");
    }

    #[test]
    fn chunking_2500_bytes() {
        assert_eq!(chunk_count(2500), 3);
        assert_eq!(chunk_len(2500, 0), 1024);
        assert_eq!(chunk_len(2500, 1024), 1024);
        assert_eq!(chunk_len(2500, 2048), 452);
    }

    #[test]
    fn chunking_edge_sizes() {
        assert_eq!(chunk_count(0), 0);
        assert_eq!(chunk_count(1), 1);
        assert_eq!(chunk_count(1024), 1);
        assert_eq!(chunk_len(1024, 0), 1024);
        assert_eq!(chunk_count(1025), 2);
        assert_eq!(chunk_len(1025, 1024), 1);
        assert_eq!(chunk_count(0x7FFF_FFFF), 0x20_0000);
    }

    #[test]
    fn chunks_sum_to_size() {
        for size in [0u32, 1, 1023, 1024, 1025, 2500, 10_000] {
            let mut pos = 0u32;
            let mut chunks = 0u32;
            let mut total = 0u64;
            while pos < size {
                let n = chunk_len(size, pos);
                assert!(n > 0 && n <= BLOCK_SIZE);
                total += n as u64;
                pos += n as u32;
                chunks += 1;
            }
            assert_eq!(chunks, chunk_count(size));
            assert_eq!(total, u64::from(size));
        }
    }
}
