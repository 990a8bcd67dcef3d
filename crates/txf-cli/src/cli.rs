//! Command-line argument parsing for txf.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use txf_core::{Error, LogFormat, PortSpec, Result, TransferDirection};

/// Log output format for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CliLogFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Structured JSON output.
    Json,
}

impl std::fmt::Display for CliLogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliLogFormat::Text => write!(f, "text"),
            CliLogFormat::Json => write!(f, "json"),
        }
    }
}

impl From<CliLogFormat> for LogFormat {
    fn from(fmt: CliLogFormat) -> Self {
        match fmt {
            CliLogFormat::Text => LogFormat::Text,
            CliLogFormat::Json => LogFormat::Json,
        }
    }
}

/// Transfer a single file between two hosts over TCP.
///
/// Supplying FILE sends it; omitting FILE receives into the current
/// directory. By default the sender listens and the receiver connects;
/// prefix PORT with '-' to flip which side listens.
#[derive(Debug, Parser)]
#[command(name = "txf", version, about = "Single-file transfer over TCP")]
pub struct Cli {
    /// Peer host to connect to, or local address to listen on
    pub address: String,

    /// TCP port; prefix with '-' to flip which side listens
    #[arg(allow_hyphen_values = true)]
    pub port: PortSpec,

    /// File to send; omit to receive
    pub file: Option<PathBuf>,

    /// Increase verbosity (default: info; -v = debug, -vv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t)]
    pub log_format: CliLogFormat,
}

impl Cli {
    /// Transfer role implied by the argument shape.
    pub fn direction(&self) -> TransferDirection {
        if self.file.is_some() {
            TransferDirection::Transmit
        } else {
            TransferDirection::Receive
        }
    }

    /// Resolve the destination or listen socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let target = format!("{}:{}", self.address, self.port.port);
        target
            .to_socket_addrs()
            .map_err(|e| Error::Network {
                message: format!("failed to resolve {target}: {e}"),
            })?
            .next()
            .ok_or_else(|| Error::Network {
                message: format!("no addresses found for {target}"),
            })
    }
}
