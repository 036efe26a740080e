//! CLI module
//!
//! Command-line interface for generating interfaces.
//!
//! # Commands
//!
//! - `generate` - Merge sample files for one entity and write its interfaces
//! - `run` - Generate every entity listed in a project config
//! - `validate` - Check a project config and its samples

mod commands;
mod runner;

pub use commands::{Cli, Commands, GenerateArgs, OutputFormat};
pub use runner::{generate_entity, Runner};
