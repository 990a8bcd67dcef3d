//! Connection orchestration: establishes the TCP connection for a transfer
//! role and drives its lifecycle.
//!
//! The initiator opens an outbound connection; the responder binds, listens,
//! and accepts exactly one peer. Neither loops: the program performs one
//! transfer per invocation. `finish` runs on every exit path once `init` has
//! succeeded, and the sockets close when their scopes end.

use std::net::{SocketAddr, TcpListener, TcpStream};

use tracing::info;

use crate::error::{Error, Result};
use crate::mode::ConnectMode;
use crate::transfer::Role;

/// Run one transfer: `init`, connect-or-accept, `process`, `finish`.
pub fn run(mode: ConnectMode, addr: SocketAddr, role: &mut dyn Role) -> Result<()> {
    role.init()?;
    let result = exchange(mode, addr, role);
    role.finish();
    result
}

fn exchange(mode: ConnectMode, addr: SocketAddr, role: &mut dyn Role) -> Result<()> {
    match mode {
        ConnectMode::Initiate => {
            let mut stream = TcpStream::connect(addr).map_err(|e| Error::Network {
                message: format!("connect to {addr} failed: {e}"),
            })?;
            info!(peer = %addr, "connected");
            role.process(&mut stream)
        }
        ConnectMode::Respond => {
            let listener = TcpListener::bind(addr).map_err(|e| Error::Network {
                message: format!("bind to {addr} failed: {e}"),
            })?;
            info!(addr = %addr, "listening");

            let (mut stream, peer) = listener.accept().map_err(|e| Error::Network {
                message: format!("accept on {addr} failed: {e}"),
            })?;
            info!(peer = %peer, "accepted");
            role.process(&mut stream)
        }
    }
}
