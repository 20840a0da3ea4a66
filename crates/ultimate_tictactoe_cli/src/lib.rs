//! Terminal host for the ultimate tic-tac-toe engine.
//!
//! The host never decides rules; it parses input, calls the engine's public
//! API and prints what comes back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod render;
pub mod replay;
pub mod session;

pub use cli::{Cli, Command, GameSource};
pub use config::{CliConfig, ConfigError};
pub use replay::Replay;
pub use session::{ParseCommandError, Reply, Session, SessionCommand};
