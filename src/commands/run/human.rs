use routegraph_core::error::{PathError, RouteError};
use routegraph_core::format::{format_command, format_edge, format_path, render_trace};
use routegraph_core::graph::{EntryState, Trace};

use super::Outcome;
use crate::cli::Cli;

/// Output a successful operation in human-readable format
pub fn print_outcome(cli: &Cli, outcome: &Outcome) {
    match outcome {
        Outcome::Added(key) => println!("Route added: {}", key),
        Outcome::Removed(key) => println!("Route removed: {}", key),
        Outcome::Updated(key) => println!("Route updated: {}", key),
        Outcome::Listed {
            origin,
            sort,
            routes,
        } => {
            if routes.is_empty() {
                if !cli.quiet {
                    println!("No outgoing routes from {}.", origin);
                }
            } else {
                println!("Routes from {} (sorted by {}):", origin, sort);
                for edge in routes {
                    println!("  {}", format_edge(edge));
                }
            }
        }
        Outcome::ListedAll(all) => {
            if all.is_empty() {
                if !cli.quiet {
                    println!("No routes in the network yet.");
                }
            } else {
                println!("=== Current Route Network ===");
                for (origin, routes) in all {
                    println!("{}:", origin);
                    for edge in routes {
                        println!("  {}", format_edge(edge));
                    }
                }
            }
        }
        Outcome::Exists { key, exists } => {
            if *exists {
                println!("Route exists: {}", key);
            } else {
                println!("Route does not exist: {}", key);
            }
        }
        Outcome::Path(result) => {
            println!("Shortest path: {}", format_path(&result.path));
            println!(
                "Total cost: {:.2} | Total distance: {:.2}",
                result.total_cost, result.total_distance
            );
            if !cli.quiet {
                print_trace(&result.trace);
            }
        }
        Outcome::Undone(command) => println!("Undo successful: {}", command),
        Outcome::Redone(command) => println!("Redo successful: {}", command),
        Outcome::History(entries) => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No edits recorded.");
                }
            } else {
                for (i, entry) in entries.iter().enumerate() {
                    let marker = match entry.state {
                        EntryState::Applied => "applied",
                        EntryState::Undone => "undone",
                    };
                    println!("{:>3}. [{}] {}", i + 1, marker, format_command(&entry.command));
                }
            }
        }
    }
}

/// Report a rejected operation on stderr. Failed path queries still show
/// how far the search got.
pub fn print_failure(cli: &Cli, line: usize, err: &RouteError) {
    eprintln!("error: line {}: {}", line, err);

    if let RouteError::Path(path_err) = err {
        print_path_failure(cli, path_err);
    }
}

/// Cost and trace of a failed path query. Queries rejected before searching
/// (bad hour) have nothing to explain.
pub fn print_path_failure(cli: &Cli, path_err: &PathError) {
    if let Some(trace) = path_err.trace() {
        println!("No path found. Total cost: {}", path_err.cost());
        if !cli.quiet {
            print_trace(trace);
        }
    }
}

fn print_trace(trace: &Trace) {
    println!();
    println!("--- XAI TRACE ---");
    for sentence in render_trace(trace) {
        println!("{}", sentence);
    }
    println!("-----------------");
}
