//! txf-core: Shared library for the txf file transfer protocol.
//!
//! This crate provides:
//! - The 32-byte wire header codec
//! - Reliable block I/O over blocking byte streams
//! - The transmit/receive role abstraction
//! - Connection orchestration (initiate/respond)
//! - Mode resolution from the port sign and filename presence
//! - Logging setup

pub mod blockio;
pub mod connect;
pub mod constants;
pub mod error;
pub mod header;
pub mod logging;
pub mod mode;
pub mod transfer;

pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat};
pub use mode::{ConnectMode, Mode, PortSpec, TransferDirection};
