//! Command dispatch logic for routegraph
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use routegraph_core::config::NetworkConfig;
use routegraph_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::Run { script, strict } => {
            let content = read_script(script.as_deref())?;
            commands::run::execute(cli, &config, &content, *strict, start)
        }

        Commands::Check { script } => {
            let content = read_script(script.as_deref())?;
            commands::check::execute(cli, &content)
        }
    }
}

fn load_config(cli: &Cli) -> Result<NetworkConfig> {
    match &cli.config {
        Some(path) => NetworkConfig::load(path),
        None => Ok(NetworkConfig::default()),
    }
}

/// Read a script from a file, or from stdin when no path is given
fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "read_script");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
