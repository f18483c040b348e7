use crate::error::PathError;
use crate::graph::cost::{effective_cost, CostContext};
use crate::graph::trace::{Trace, TraceEvent};
use crate::graph::types::{Cost, EdgeAttrs, PathLeg, PathResult};
use crate::graph::RouteProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// then node name so equal costs pop in a stable order)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    pub accumulated_cost: Cost,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Options for a single path query
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub context: CostContext,
    /// Stop after this many nodes have been selected from the frontier
    pub max_settled: Option<usize>,
}

/// How a node was last improved
struct Predecessor {
    node: String,
    attrs: EdgeAttrs,
}

/// State tracked during a Dijkstra search
struct DijkstraState {
    best_costs: HashMap<String, Cost>,
    distances: HashMap<String, f64>,
    predecessors: HashMap<String, Predecessor>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    settled: usize,
    trace: Trace,
}

impl DijkstraState {
    fn new(source: &str) -> Self {
        let mut state = Self {
            best_costs: HashMap::new(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
            settled: 0,
            trace: Trace::new(),
        };
        state.best_costs.insert(source.to_string(), Cost::ZERO);
        state.distances.insert(source.to_string(), 0.0);
        state.heap.push(Reverse(HeapEntry {
            node_id: source.to_string(),
            accumulated_cost: Cost::ZERO,
        }));
        state
    }

    /// Unvisited nodes are at infinite cost
    fn best_cost(&self, node: &str) -> f64 {
        self.best_costs
            .get(node)
            .map_or(f64::INFINITY, |cost| cost.value())
    }

    fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(0.0)
    }

    /// Try to reach `target` more cheaply through `current`
    fn relax(&mut self, current: &str, target: &str, attrs: EdgeAttrs, context: &CostContext) {
        let step = Cost::new(effective_cost(attrs.base_cost, context));
        let new_cost = Cost::new(self.best_cost(current)) + step;
        if new_cost.value() >= self.best_cost(target) {
            return;
        }

        let new_distance = self.distance(current) + attrs.distance;
        self.best_costs.insert(target.to_string(), new_cost);
        self.distances.insert(target.to_string(), new_distance);
        self.predecessors.insert(
            target.to_string(),
            Predecessor {
                node: current.to_string(),
                attrs,
            },
        );
        self.heap.push(Reverse(HeapEntry {
            node_id: target.to_string(),
            accumulated_cost: new_cost,
        }));

        tracing::trace!(node = %target, via = %current, cost = new_cost.value(), "relaxed");
        self.trace.push(TraceEvent::Relaxed {
            node: target.to_string(),
            via: current.to_string(),
            cost: new_cost.value(),
            distance: new_distance,
        });
    }

    /// Walk predecessor links back from the destination
    fn reconstruct(&self, destination: &str, context: &CostContext) -> (Vec<String>, Vec<PathLeg>) {
        let mut path = vec![destination.to_string()];
        let mut legs = Vec::new();
        let mut current = destination;

        while let Some(pred) = self.predecessors.get(current) {
            legs.push(PathLeg {
                from: pred.node.clone(),
                to: current.to_string(),
                distance: pred.attrs.distance,
                base_cost: pred.attrs.base_cost,
                effective_cost: effective_cost(pred.attrs.base_cost, context),
            });
            path.push(pred.node.clone());
            current = &pred.node;
        }

        path.reverse();
        legs.reverse();
        (path, legs)
    }
}

fn record_context(trace: &mut Trace, context: &CostContext) {
    match context.hour() {
        Some(hour) => trace.push(TraceEvent::Congestion {
            hour: hour.value(),
            band: hour.band(),
            multiplier: context.multiplier(),
        }),
        None => trace.push(TraceEvent::BaseCosts),
    }
}

/// Least-cost path from `source` to `destination`.
///
/// Route costs are the base costs scaled by the query's congestion context.
/// Both endpoints must be known nodes. The returned result, or the error,
/// carries the full decision trace.
#[tracing::instrument(skip(provider, opts), fields(multiplier = opts.context.multiplier(), max_settled = ?opts.max_settled))]
pub fn dijkstra_find_path(
    provider: &dyn RouteProvider,
    source: &str,
    destination: &str,
    opts: &SearchOptions,
) -> Result<PathResult, PathError> {
    let context = opts.context;
    let mut state = DijkstraState::new(source);
    state.trace.push(TraceEvent::Start {
        source: source.to_string(),
    });
    record_context(&mut state.trace, &context);

    for endpoint in [source, destination] {
        if !provider.contains_node(endpoint) {
            state.trace.push(TraceEvent::EndpointMissing {
                node: endpoint.to_string(),
            });
            return Err(PathError::UnknownNode {
                node: endpoint.to_string(),
                trace: state.trace,
            });
        }
    }

    let mut reached = false;
    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        accumulated_cost,
    })) = state.heap.pop()
    {
        // Skip stale entries superseded by a cheaper push
        if accumulated_cost.value() > state.best_cost(&current_id) {
            continue;
        }

        if let Some(limit) = opts.max_settled {
            if state.settled >= limit {
                state.trace.push(TraceEvent::LimitReached { limit });
                return Err(PathError::LimitReached {
                    limit,
                    destination: destination.to_string(),
                    trace: state.trace,
                });
            }
        }

        state.settled += 1;
        state.trace.push(TraceEvent::Selected {
            node: current_id.clone(),
            cost: accumulated_cost.value(),
        });

        if current_id == destination {
            reached = true;
            break;
        }

        for edge in provider.get_outbound_edges(&current_id) {
            state.relax(&current_id, &edge.destination, edge.attrs(), &context);
        }
    }

    if !reached {
        state.trace.push(TraceEvent::Unreachable {
            source: source.to_string(),
            destination: destination.to_string(),
        });
        return Err(PathError::NoPath {
            from: source.to_string(),
            to: destination.to_string(),
            trace: state.trace,
        });
    }

    let total_cost = state.best_cost(destination);
    let total_distance = state.distance(destination);
    let (path, legs) = state.reconstruct(destination, &context);
    state.trace.push(TraceEvent::Found {
        cost: total_cost,
        distance: total_distance,
    });

    tracing::debug!(
        settled = state.settled,
        hops = legs.len(),
        cost = total_cost,
        "path_found"
    );

    Ok(PathResult {
        source: source.to_string(),
        destination: destination.to_string(),
        path,
        legs,
        total_cost,
        total_distance,
        multiplier: context.multiplier(),
        trace: state.trace,
    })
}

#[cfg(test)]
mod tests;
