//! Structured decision trace of a path query
//!
//! Events are appended in the order the search makes its decisions. Turning
//! them into text is left to `crate::format`.

use serde::Serialize;

use crate::graph::cost::CongestionBand;

/// One decision made by the path search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Search begins at the source with cost 0
    Start { source: String },
    /// No congestion context: base costs are used unchanged
    BaseCosts,
    /// A congestion multiplier applies to every route of the query
    Congestion {
        hour: u8,
        band: CongestionBand,
        multiplier: f64,
    },
    /// A node was taken from the frontier with the smallest known cost
    Selected { node: String, cost: f64 },
    /// A cheaper way to reach `node` through `via` was found
    Relaxed {
        node: String,
        via: String,
        cost: f64,
        distance: f64,
    },
    /// The destination was reached
    Found { cost: f64, distance: f64 },
    /// The frontier emptied before reaching the destination
    Unreachable { source: String, destination: String },
    /// An endpoint of the query is not a node of the network
    EndpointMissing { node: String },
    /// The settled-node limit stopped the search
    LimitReached { limit: usize },
}

/// Append-only list of trace events
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&TraceEvent> {
        self.events.last()
    }

    /// Nodes in the order they were selected from the frontier
    pub fn selected_nodes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Selected { node, .. } => Some(node.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
