//! Output format handling for routegraph
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//!
//! Also turns structured path traces and history commands into the
//! human-readable sentences shown by the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::graph::history::Command;
use crate::graph::trace::{Trace, TraceEvent};
use crate::graph::types::Edge;

/// Output format for routegraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RouteError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One sentence explaining a search decision
pub fn describe_event(event: &TraceEvent) -> String {
    match event {
        TraceEvent::Start { source } => format!("Start at {} with initial cost 0.", source),
        TraceEvent::BaseCosts => "No congestion applied: using base costs.".to_string(),
        TraceEvent::Congestion {
            hour,
            band,
            multiplier,
        } => format!(
            "Congestion multiplier at hour {} is {:.2} ({}).",
            hour, multiplier, band
        ),
        TraceEvent::Selected { node, cost } => format!(
            "Selecting node {} next because it currently has the smallest known cost ({:.2}).",
            node, cost
        ),
        TraceEvent::Relaxed {
            node,
            via,
            cost,
            distance,
        } => format!(
            "Updated best cost to {} via {} to {:.2} (distance so far {:.2}).",
            node, via, cost, distance
        ),
        TraceEvent::Found { cost, distance } => format!(
            "Shortest path found. Total cost: {:.2}; total distance: {:.2}.",
            cost, distance
        ),
        TraceEvent::Unreachable {
            source,
            destination,
        } => format!("No path found from {} to {}.", source, destination),
        TraceEvent::EndpointMissing { node } => {
            format!("Node {} does not exist in the network.", node)
        }
        TraceEvent::LimitReached { limit } => {
            format!("Search stopped after settling {} nodes.", limit)
        }
    }
}

/// Every trace event as a sentence, in order
pub fn render_trace(trace: &Trace) -> Vec<String> {
    trace.iter().map(describe_event).collect()
}

/// `A -> B -> C`
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// One listed route, without its origin
pub fn format_edge(edge: &Edge) -> String {
    format!(
        "-> {}  [distance={}, cost={}]",
        edge.destination, edge.distance, edge.base_cost
    )
}

/// One history command with its recorded values
pub fn format_command(command: &Command) -> String {
    match command {
        Command::Add { key, after } => format!(
            "add {} (distance={}, cost={})",
            key, after.distance, after.base_cost
        ),
        Command::Remove { key, before } => format!(
            "remove {} (distance={}, cost={})",
            key, before.distance, before.base_cost
        ),
        Command::Update { key, before, after } => format!(
            "update {} (distance={}, cost={} => distance={}, cost={})",
            key, before.distance, before.base_cost, after.distance, after.base_cost
        ),
    }
}
