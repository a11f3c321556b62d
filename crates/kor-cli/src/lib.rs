//! Border-crossing report CLI library.
//!
//! This crate provides the `kor` command-line interface over `kor-core`.

pub mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, ReportArgs, ReportOptions};
pub use config::Config;
