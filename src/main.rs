//! Routegraph - route network CLI
//!
//! Replays scripts of route edits and path queries against an in-memory
//! directed network with undo/redo and congestion-aware least-cost paths.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use routegraph_core::error::{ExitCode as RouteExitCode, RouteError};
use routegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let route_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => RouteError::UsageError(err.to_string()),
                };

                eprintln!("{}", route_error.to_json());
                return ExitCode::from(route_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            report_error(&cli, &e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Print the error that ended the run. A strict replay stopped by a failed
/// path query still explains the search, as a non-strict replay would.
fn report_error(cli: &Cli, err: &RouteError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
        return;
    }

    eprintln!("error: {}", err);
    if let RouteError::Aborted { source, .. } = err {
        if let RouteError::Path(path_err) = source.as_ref() {
            commands::run::human::print_path_failure(cli, path_err);
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
