//! txf binary entry point.
//!
//! Single-file transfer over TCP with a 32-byte framed header.

use clap::Parser;
use tracing::{error, info};

use txf_cli::Cli;
use txf_core::transfer::{Receive, Role, Transmit};
use txf_core::{connect, Mode};

fn main() {
    let cli = Cli::parse();

    // baseline at info so transfer status lines show without flags
    let verbosity = cli.verbose.saturating_add(2);
    if let Err(e) = txf_core::init_logging(verbosity, cli.log_file.as_deref(), cli.log_format.into())
    {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    info!(version = env!("CARGO_PKG_VERSION"), "txf starting");

    let mode = Mode::resolve(cli.direction(), cli.port.flipped);
    info!(connect = %mode.connect, direction = %mode.direction, "mode resolved");

    let addr = match cli.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "address resolution failed");
            eprintln!("txf: {e}");
            std::process::exit(1);
        }
    };

    let mut role: Box<dyn Role> = match &cli.file {
        Some(path) => Box::new(Transmit::new(path)),
        None => Box::new(Receive::new(".")),
    };

    if let Err(e) = connect::run(mode.connect, addr, role.as_mut()) {
        error!(error = %e, "transfer failed");
        eprintln!("txf: {e}");
        std::process::exit(1);
    }

    info!("transfer complete");
}
