//! Timelog weekly summary CLI library.
//!
//! This crate provides the CLI interface for the weekly summary.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
