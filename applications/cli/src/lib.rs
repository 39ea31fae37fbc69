//! Roster CLI Library
//!
//! Configuration, terminal rendering, and command implementations behind
//! the `roster` binary.
//!
//! This library exposes the components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod terminal;

// Re-export commonly used types for convenience
pub use commands::{OutputFormat, RenderedList};
pub use config::RosterConfig;
pub use error::{CliError, Result};
pub use terminal::TerminalContainer;
