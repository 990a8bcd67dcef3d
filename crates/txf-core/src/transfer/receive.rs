//! Receive role: accepts an offered file and writes it to disk.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::blockio::{recv_block, send_block};
use crate::constants::{BLOCK_SIZE, HEADER_LEN};
use crate::error::{Error, Result};
use crate::header::{Magic, TransferHeader};

use super::{base_name, chunk_len, Connection, Role};

/// The receiving side of a transfer.
///
/// Carries no file state between `init` and `process`: the file to create is
/// only known once the SEND header arrives.
pub struct Receive {
    out_dir: PathBuf,
    ready: bool,
}

impl Receive {
    /// Receive into the given directory; the file name comes from the wire.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ready: false,
        }
    }
}

impl Role for Receive {
    fn init(&mut self) -> Result<()> {
        self.ready = true;
        Ok(())
    }

    fn process(&mut self, conn: &mut dyn Connection) -> Result<()> {
        if !self.ready {
            return Err(Error::Protocol {
                message: "receive process invoked before init".into(),
            });
        }

        let mut raw = [0u8; HEADER_LEN];
        recv_block(conn, &mut raw)?;
        let header = TransferHeader::decode(&raw)?;
        if header.magic() != Magic::Send {
            return Err(Error::Protocol {
                message: format!(
                    "expected SEND offer, got magic 0x{:08x}",
                    header.magic().as_u32()
                ),
            });
        }

        // the name arrived over the wire: strip and length-check it the same
        // way the sender does
        let name = base_name(header.file_name())?.to_owned();
        let size = header.file_size();
        info!(name = %name, size, "incoming file");

        let path = self.out_dir.join(&name);
        let mut file = File::create(&path)?;

        let mut buf = [0u8; BLOCK_SIZE];
        let mut pos = 0u32;
        while pos < size {
            let n = chunk_len(size, pos);
            recv_block(conn, &mut buf[..n])?;
            file.write_all(&buf[..n])?;
            pos += n as u32;
        }

        // everything must be durable before the ack goes out
        file.sync_all()?;

        send_block(conn, &header.ack().encode())?;
        info!("transfer acknowledged");
        Ok(())
    }

    fn finish(&mut self) {
        self.ready = false;
    }
}
