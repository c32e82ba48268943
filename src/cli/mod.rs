//! CLI module - argument parsing, batch driver and interactive prompts

pub mod args;
pub mod config;
pub mod convert;
mod prompts;

pub use args::Cli;
pub use config::*;
pub use convert::*;
pub use prompts::*;
