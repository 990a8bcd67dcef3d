//! txf-cli: command-line front end for the txf transfer core.

pub mod cli;

pub use cli::{Cli, CliLogFormat};
