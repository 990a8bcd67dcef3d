//! Mode resolution for bidirectional transfers.
//!
//! Two independent choices select how an invocation behaves:
//!
//! - **Transfer role**: supplying a file name makes this process the
//!   transmitter; omitting it makes it the receiver.
//! - **Network role**: by default the transmitter listens (acts as TCP
//!   server) and the receiver connects. Prefixing the port argument with a
//!   minus sign flips that mapping; the numeric port is the absolute value.
//!
//! The two bits combine into exactly four valid (network-role, transfer-role)
//! pairs:
//!
//! ```text
//! txf host 2000 file    # transmit, respond  (sender listens)
//! txf host 2000         # receive,  initiate (receiver connects)
//! txf host -2000 file   # transmit, initiate (sender connects)
//! txf host -2000        # receive,  respond  (receiver listens)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Connection mode determining which side opens the TCP connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectMode {
    /// Open an outbound connection to a listening peer.
    Initiate,
    /// Bind, listen, and accept exactly one incoming connection.
    Respond,
}

impl ConnectMode {
    /// Check if this is the initiating side.
    pub fn is_initiate(&self) -> bool {
        matches!(self, ConnectMode::Initiate)
    }

    /// Check if this is the responding side.
    pub fn is_respond(&self) -> bool {
        matches!(self, ConnectMode::Respond)
    }
}

impl fmt::Display for ConnectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectMode::Initiate => write!(f, "initiate"),
            ConnectMode::Respond => write!(f, "respond"),
        }
    }
}

impl FromStr for ConnectMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "initiate" => Ok(ConnectMode::Initiate),
            "respond" => Ok(ConnectMode::Respond),
            _ => Err(Error::Usage {
                message: format!(
                    "invalid connect mode: '{s}' (expected 'initiate' or 'respond')"
                ),
            }),
        }
    }
}

/// Transfer role: which side reads file bytes from disk vs. writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    /// Send a local file to the peer.
    Transmit,
    /// Write the incoming file to disk.
    Receive,
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferDirection::Transmit => write!(f, "transmit"),
            TransferDirection::Receive => write!(f, "receive"),
        }
    }
}

/// Parsed port argument: the TCP port plus the network-role flip bit.
///
/// A leading minus sign sets `flipped` and the port is the absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSpec {
    pub port: u16,
    pub flipped: bool,
}

impl FromStr for PortSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (flipped, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let port: u16 = digits.parse().map_err(|_| Error::Usage {
            message: format!("invalid port: '{s}'"),
        })?;
        Ok(PortSpec { port, flipped })
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flipped {
            write!(f, "-{}", self.port)
        } else {
            write!(f, "{}", self.port)
        }
    }
}

/// A resolved (network-role, transfer-role) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub connect: ConnectMode,
    pub direction: TransferDirection,
}

impl Mode {
    /// Resolve the network role from the transfer role and the flip bit.
    ///
    /// Default mapping: the transmitter responds (listens) and the receiver
    /// initiates. The flip bit inverts the mapping.
    pub fn resolve(direction: TransferDirection, flipped: bool) -> Mode {
        let connect = match (direction, flipped) {
            (TransferDirection::Transmit, false) | (TransferDirection::Receive, true) => {
                ConnectMode::Respond
            }
            (TransferDirection::Transmit, true) | (TransferDirection::Receive, false) => {
                ConnectMode::Initiate
            }
        };
        Mode { connect, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lowercase() {
        assert_eq!(ConnectMode::Initiate.to_string(), "initiate");
        assert_eq!(ConnectMode::Respond.to_string(), "respond");
        assert_eq!(TransferDirection::Transmit.to_string(), "transmit");
        assert_eq!(TransferDirection::Receive.to_string(), "receive");
    }

    #[test]
    fn connect_mode_parse_from_str() {
        assert_eq!(
            "initiate".parse::<ConnectMode>().unwrap(),
            ConnectMode::Initiate
        );
        assert_eq!(
            "RESPOND".parse::<ConnectMode>().unwrap(),
            ConnectMode::Respond
        );
        assert!("client".parse::<ConnectMode>().is_err());
    }

    #[test]
    fn is_initiate_is_respond() {
        assert!(ConnectMode::Initiate.is_initiate());
        assert!(!ConnectMode::Initiate.is_respond());
        assert!(ConnectMode::Respond.is_respond());
        assert!(!ConnectMode::Respond.is_initiate());
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&ConnectMode::Initiate).unwrap();
        assert_eq!(json, r#""initiate""#);
        let parsed: ConnectMode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ConnectMode::Initiate);

        let json = serde_json::to_string(&TransferDirection::Receive).unwrap();
        assert_eq!(json, r#""receive""#);
        let parsed: TransferDirection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TransferDirection::Receive);
    }

    #[test]
    fn port_spec_positive() {
        let spec: PortSpec = "2000".parse().unwrap();
        assert_eq!(spec, PortSpec { port: 2000, flipped: false });
    }

    #[test]
    fn port_spec_negative_sets_flip() {
        let spec: PortSpec = "-2000".parse().unwrap();
        assert_eq!(spec, PortSpec { port: 2000, flipped: true });
    }

    #[test]
    fn port_spec_rejects_garbage() {
        assert!("abc".parse::<PortSpec>().is_err());
        assert!("".parse::<PortSpec>().is_err());
        assert!("-".parse::<PortSpec>().is_err());
        assert!("70000".parse::<PortSpec>().is_err());
        assert!("--1".parse::<PortSpec>().is_err());
    }

    #[test]
    fn port_spec_display_roundtrip() {
        for s in ["2000", "-2000"] {
            let spec: PortSpec = s.parse().unwrap();
            assert_eq!(spec.to_string(), s);
        }
    }

    #[test]
    fn resolve_covers_all_four_pairs() {
        use ConnectMode::*;
        use TransferDirection::*;

        assert_eq!(
            Mode::resolve(Transmit, false),
            Mode { connect: Respond, direction: Transmit }
        );
        assert_eq!(
            Mode::resolve(Receive, false),
            Mode { connect: Initiate, direction: Receive }
        );
        assert_eq!(
            Mode::resolve(Transmit, true),
            Mode { connect: Initiate, direction: Transmit }
        );
        assert_eq!(
            Mode::resolve(Receive, true),
            Mode { connect: Respond, direction: Receive }
        );
    }
}
