//! Attendance calculator CLI library.
//!
//! This crate provides the CLI interface for the attendance calculator.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, EstimateArgs, ProjectArgs};
pub use config::Config;
