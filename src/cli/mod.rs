//! CLI argument parsing for routegraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use routegraph_core::format::OutputFormat;
use parse::parse_output_format;

/// Routegraph - route network CLI with explainable least-cost paths
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output (path traces, empty-listing notes)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug" or "routegraph_core=trace")
    #[arg(long, global = true, env = "ROUTEGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "ROUTEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a script of route operations against a fresh network
    Run {
        /// Script file (reads stdin when omitted)
        script: Option<PathBuf>,

        /// Stop at the first rejected operation
        #[arg(long)]
        strict: bool,
    },

    /// Parse a script without executing it
    Check {
        /// Script file (reads stdin when omitted)
        script: Option<PathBuf>,
    },
}
