//! Common utilities shared across CLI commands.

pub mod callbacks;
pub mod engine;
pub mod error;

pub use error::CliResult;
