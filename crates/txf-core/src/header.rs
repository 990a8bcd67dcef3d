//! Wire header codec for the transfer protocol.
//!
//! Format: exactly 32 bytes, multi-byte fields in network byte order:
//!
//! ```text
//! magic (4) | file_size (4) | file_name (20) | terminator (1) | padding (3)
//! ```
//!
//! The codec ensures:
//! - Encoding always yields exactly [`HEADER_LEN`] bytes
//! - Decoding consumes exactly [`HEADER_LEN`] bytes or fails
//! - The name field's terminator is forced to zero before string use, so a
//!   full 20-byte unterminated field on the wire is still read safely

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::constants::{FILENAME_LEN, HEADER_LEN, MAGIC_RCVD, MAGIC_SEND, MAX_FILE_SIZE};
use crate::error::{Error, Result};

/// Header magic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magic {
    /// Announces a file offer; file bytes follow.
    Send,
    /// Acknowledges successful receipt.
    Rcvd,
}

impl Magic {
    /// Wire value of this magic.
    pub const fn as_u32(self) -> u32 {
        match self {
            Magic::Send => MAGIC_SEND,
            Magic::Rcvd => MAGIC_RCVD,
        }
    }

    /// Parse a wire value into a magic tag.
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            MAGIC_SEND => Ok(Magic::Send),
            MAGIC_RCVD => Ok(Magic::Rcvd),
            other => Err(Error::Protocol {
                message: format!("unknown header magic 0x{other:08x}"),
            }),
        }
    }
}

/// The fixed transfer header, the only entity on the wire.
///
/// Exactly one `Send` header precedes the file bytes and exactly one `Rcvd`
/// header follows them as acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferHeader {
    magic: Magic,
    file_size: u32,
    file_name: String,
}

impl TransferHeader {
    /// Build a header, validating the name and size invariants.
    pub fn new(magic: Magic, file_size: u32, file_name: &str) -> Result<Self> {
        if file_name.is_empty() || file_name.len() > FILENAME_LEN {
            return Err(Error::Name {
                message: format!(
                    "'{file_name}' must be 1-{FILENAME_LEN} bytes, got {}",
                    file_name.len()
                ),
            });
        }
        if file_size > MAX_FILE_SIZE {
            return Err(Error::Size {
                size: u64::from(file_size),
            });
        }
        Ok(Self {
            magic,
            file_size,
            file_name: file_name.to_owned(),
        })
    }

    pub fn magic(&self) -> Magic {
        self.magic
    }

    pub fn file_size(&self) -> u32 {
        self.file_size
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Derive the acknowledgement header for a received offer: same size and
    /// name, magic flipped to `Rcvd`.
    pub fn ack(&self) -> TransferHeader {
        TransferHeader {
            magic: Magic::Rcvd,
            file_size: self.file_size,
            file_name: self.file_name.clone(),
        }
    }

    /// Encode the header to exactly 32 bytes.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HEADER_LEN);
        buf.put_u32(self.magic.as_u32());
        buf.put_u32(self.file_size);
        let name = self.file_name.as_bytes();
        buf.put_slice(name);
        // zero-fill the rest of the name field, the terminator byte,
        // and the trailing padding
        buf.put_bytes(0, HEADER_LEN - 8 - name.len());
        debug_assert_eq!(buf.len(), HEADER_LEN);
        buf.freeze()
    }

    /// Decode a header from exactly 32 bytes.
    ///
    /// The terminator byte at offset 28 is treated as zero regardless of its
    /// wire value; the trailing padding bytes are ignored.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != HEADER_LEN {
            return Err(Error::Protocol {
                message: format!(
                    "header must be exactly {HEADER_LEN} bytes, got {}",
                    data.len()
                ),
            });
        }

        let mut buf = data;
        let magic = Magic::from_u32(buf.get_u32())?;
        let file_size = buf.get_u32();
        if file_size > MAX_FILE_SIZE {
            return Err(Error::Size {
                size: u64::from(file_size),
            });
        }

        let field = &buf[..FILENAME_LEN];
        let end = field.iter().position(|&b| b == 0).unwrap_or(FILENAME_LEN);
        let file_name = String::from_utf8_lossy(&field[..end]).into_owned();

        Ok(Self {
            magic,
            file_size,
            file_name,
        })
    }
}
