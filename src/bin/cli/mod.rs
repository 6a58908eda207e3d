//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution and configuration loading
//! - output: diagnostics, JSON rendering and summaries

pub mod args;
pub mod commands;
pub mod output;

pub use args::*;
pub use commands::*;
