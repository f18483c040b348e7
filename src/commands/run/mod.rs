//! `routegraph run` - replay a route script against a fresh network
//!
//! Parsing happens up front, so a malformed line stops the run before any
//! operation executes. Rejected operations are reported per line; with
//! `--strict` the first one ends the replay.

pub mod human;
pub mod json;

use std::collections::BTreeMap;
use std::time::Instant;

use routegraph_core::config::NetworkConfig;
use routegraph_core::error::{Result, RouteError};
use routegraph_core::graph::{
    Command, Edge, HistoryEntry, PathResult, RouteKey, RouteNetwork, SortKey,
};
use routegraph_core::trace_time;

use crate::cli::{Cli, OutputFormat};
use crate::commands::script::{parse_script, Operation, ScriptLine};

/// What a successful operation produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(RouteKey),
    Removed(RouteKey),
    Updated(RouteKey),
    Listed {
        origin: String,
        sort: SortKey,
        routes: Vec<Edge>,
    },
    ListedAll(BTreeMap<String, Vec<Edge>>),
    Exists {
        key: RouteKey,
        exists: bool,
    },
    Path(PathResult),
    Undone(Command),
    Redone(Command),
    History(Vec<HistoryEntry>),
}

/// Execute the script and print one report per operation
pub fn execute(
    cli: &Cli,
    config: &NetworkConfig,
    content: &str,
    strict: bool,
    start: Instant,
) -> Result<()> {
    let lines = parse_script(content)?;
    trace_time!(start, "parse_script", operations = lines.len());

    let mut network = RouteNetwork::with_config(config);
    let default_sort = config.listing.default_sort;
    let mut failures = 0usize;

    for ScriptLine { line, op } in &lines {
        match apply(&mut network, op, default_sort) {
            Ok(outcome) => match cli.format {
                OutputFormat::Human => human::print_outcome(cli, &outcome),
                OutputFormat::Json => json::print_outcome(*line, op, &outcome)?,
            },
            Err(err) => {
                tracing::debug!(line, op = op.name(), error = %err, "operation_rejected");
                if strict {
                    return Err(RouteError::aborted(*line, err));
                }
                failures += 1;
                match cli.format {
                    OutputFormat::Human => human::print_failure(cli, *line, &err),
                    OutputFormat::Json => json::print_failure(*line, op, &err)?,
                }
            }
        }
    }

    tracing::debug!(operations = lines.len(), failures, "replay_finished");
    trace_time!(start, "replay");
    Ok(())
}

/// Run one operation against the network
pub fn apply(network: &mut RouteNetwork, op: &Operation, default_sort: SortKey) -> Result<Outcome> {
    let outcome = match op {
        Operation::Add {
            origin,
            destination,
            distance,
            cost,
        } => {
            network.add_route(origin, destination, *distance, *cost)?;
            Outcome::Added(RouteKey::new(origin.as_str(), destination.as_str()))
        }
        Operation::Remove {
            origin,
            destination,
        } => {
            network.remove_route(origin, destination)?;
            Outcome::Removed(RouteKey::new(origin.as_str(), destination.as_str()))
        }
        Operation::Update {
            origin,
            destination,
            distance,
            cost,
        } => {
            network.update_route(origin, destination, *distance, *cost)?;
            Outcome::Updated(RouteKey::new(origin.as_str(), destination.as_str()))
        }
        Operation::List { origin, sort } => {
            let sort = sort.unwrap_or(default_sort);
            Outcome::Listed {
                origin: origin.clone(),
                sort,
                routes: network.list_routes(origin, sort),
            }
        }
        Operation::ListAll => Outcome::ListedAll(network.list_all()),
        Operation::Exists {
            origin,
            destination,
        } => Outcome::Exists {
            key: RouteKey::new(origin.as_str(), destination.as_str()),
            exists: network.route_exists(origin, destination),
        },
        Operation::Path {
            source,
            destination,
            hour,
        } => Outcome::Path(network.shortest_path(source, destination, *hour)?),
        Operation::Undo => Outcome::Undone(network.undo()?),
        Operation::Redo => Outcome::Redone(network.redo()?),
        Operation::History => Outcome::History(network.history()),
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use routegraph_core::error::{EdgeError, HistoryError};
    use routegraph_core::graph::CommandKind;

    fn add(origin: &str, destination: &str, distance: f64, cost: f64) -> Operation {
        Operation::Add {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance,
            cost,
        }
    }

    #[test]
    fn test_apply_mutations_and_undo() {
        let mut network = RouteNetwork::new();
        let outcome = apply(&mut network, &add("A", "B", 2.0, 6.0), SortKey::Distance).unwrap();
        assert_eq!(outcome, Outcome::Added(RouteKey::new("A", "B")));

        let err = apply(&mut network, &add("A", "B", 1.0, 1.0), SortKey::Distance).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Edge(EdgeError::AlreadyExists { .. })
        ));

        match apply(&mut network, &Operation::Undo, SortKey::Distance).unwrap() {
            Outcome::Undone(command) => assert_eq!(command.kind(), CommandKind::Add),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(matches!(
            apply(&mut network, &Operation::Undo, SortKey::Distance).unwrap_err(),
            RouteError::History(HistoryError::NothingToUndo)
        ));
    }

    #[test]
    fn test_list_uses_default_sort() {
        let mut network = RouteNetwork::new();
        network.add_route("A", "B", 1.0, 9.0).unwrap();
        network.add_route("A", "C", 5.0, 2.0).unwrap();

        let op = Operation::List {
            origin: "A".to_string(),
            sort: None,
        };
        match apply(&mut network, &op, SortKey::Cost).unwrap() {
            Outcome::Listed { sort, routes, .. } => {
                assert_eq!(sort, SortKey::Cost);
                assert_eq!(routes[0].destination, "C");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_apply_path() {
        let mut network = RouteNetwork::new();
        network.add_route("A", "B", 2.0, 6.0).unwrap();

        let op = Operation::Path {
            source: "A".to_string(),
            destination: "B".to_string(),
            hour: Some(8),
        };
        match apply(&mut network, &op, SortKey::Distance).unwrap() {
            Outcome::Path(result) => {
                assert_eq!(result.path, vec!["A", "B"]);
                assert!((result.total_cost - 6.0 * 1.35).abs() < 1e-9);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let op = Operation::Path {
            source: "A".to_string(),
            destination: "B".to_string(),
            hour: Some(24),
        };
        assert!(apply(&mut network, &op, SortKey::Distance).is_err());
    }
}
