//! Transmit role: offers a local file and streams it to the peer.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::blockio::{recv_block, send_block};
use crate::constants::{BLOCK_SIZE, HEADER_LEN, MAX_FILE_SIZE};
use crate::error::{Error, Result};
use crate::header::{Magic, TransferHeader};

use super::{base_name, chunk_count, chunk_len, Connection, Role};

/// File-specific state built by `init` and consumed by `process`: the open
/// file and the prebuilt SEND header. Dropped in `finish`, which closes the
/// file on every exit path.
struct SendContext {
    file: File,
    header: TransferHeader,
}

/// The sending side of a transfer.
pub struct Transmit {
    path: PathBuf,
    ctx: Option<SendContext>,
}

impl Transmit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ctx: None,
        }
    }
}

impl Role for Transmit {
    fn init(&mut self) -> Result<()> {
        let path = self.path.to_string_lossy();
        let name = base_name(&path)?.to_owned();

        let file = File::open(&self.path)?;
        let size = file.metadata()?.len();
        if size > u64::from(MAX_FILE_SIZE) {
            return Err(Error::Size { size });
        }

        let header = TransferHeader::new(Magic::Send, size as u32, &name)?;
        info!(name = %name, size, "offering file");

        self.ctx = Some(SendContext { file, header });
        Ok(())
    }

    fn process(&mut self, conn: &mut dyn Connection) -> Result<()> {
        let ctx = self.ctx.as_mut().ok_or_else(|| Error::Protocol {
            message: "transmit process invoked without a send context".into(),
        })?;

        send_block(conn, &ctx.header.encode())?;

        let size = ctx.header.file_size();
        let mut buf = [0u8; BLOCK_SIZE];
        let mut pos = 0u32;
        while pos < size {
            let n = chunk_len(size, pos);
            ctx.file.read_exact(&mut buf[..n])?;
            send_block(conn, &buf[..n])?;
            pos += n as u32;
        }
        debug!(chunks = chunk_count(size), "payload sent");

        let mut raw = [0u8; HEADER_LEN];
        recv_block(conn, &mut raw)?;
        let ack = TransferHeader::decode(&raw)?;
        if ack.magic() != Magic::Rcvd {
            return Err(Error::Protocol {
                message: format!(
                    "expected RCVD acknowledgement, got magic 0x{:08x}",
                    ack.magic().as_u32()
                ),
            });
        }

        info!("transfer acknowledged");
        Ok(())
    }

    fn finish(&mut self) {
        if self.ctx.take().is_some() {
            debug!("send context released");
        }
    }
}
