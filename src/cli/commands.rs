//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Generate merged TypeScript interfaces from JSON samples
#[derive(Parser, Debug)]
#[command(name = "merged-interfaces")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (defaults to the config's `log_level`, then info)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Project config used by `run` and `validate`
    pub fn config_path(&self) -> Option<&Path> {
        match &self.command {
            Commands::Run { config, .. } | Commands::Validate { config } => Some(config.as_path()),
            Commands::Generate(_) => None,
        }
    }

    /// Effective log level
    ///
    /// `--log-level` beats the config file's level, which beats the default.
    /// `--verbose` raises anything quieter than debug to debug.
    pub fn effective_log_level(&self, config_level: Option<LogLevel>) -> LogLevel {
        let level = self.log_level.or(config_level).unwrap_or_default();
        if self.verbose && matches!(level, LogLevel::Info | LogLevel::Warn | LogLevel::Error) {
            LogLevel::Debug
        } else {
            level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate interfaces for one entity from sample files
    Generate(GenerateArgs),

    /// Generate every entity listed in a project config file
    Run {
        /// Project config file (YAML)
        config: PathBuf,

        /// Only generate this entity
        #[arg(long)]
        entity: Option<String>,
    },

    /// Check a project config and its sample files without writing anything
    Validate {
        /// Project config file (YAML)
        config: PathBuf,
    },
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Root interface name
    pub name: String,

    /// Sample files or directories (.json, .jsonl, .ndjson, .yaml, .yml)
    #[arg(required = true)]
    pub samples: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Output file name (defaults to the capitalized entity name)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Back up an existing output file with a timestamp before overwriting
    #[arg(long)]
    pub backup: bool,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Output format; json is always printed to stdout
    #[arg(short, long, value_enum, default_value = "ts")]
    pub format: OutputFormat,

    /// Fail when samples disagree on a field's shape
    #[arg(long)]
    pub strict_shapes: bool,

    /// Treat a top-level array in a sample file as a list of samples
    #[arg(long)]
    pub split_arrays: bool,

    /// Header comment for the generated file
    #[arg(long)]
    pub header: Option<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// TypeScript interface declarations
    Ts,
    /// Declarations and diagnostics as JSON
    Json,
}
