//! Route graph and path-finding operations
//!
//! Provides the pieces of the route network:
//! - Edge store holding the live directed topology
//! - Congestion cost model for time-of-day pricing
//! - Dijkstra path-finding with a structured decision trace
//! - Reversible edit history for undo/redo
//! - `RouteNetwork`, the facade composing all of the above

pub mod algos;
pub mod cost;
pub mod history;
pub mod network;
pub mod store;
pub mod trace;
pub mod traversal;
pub mod types;

pub use algos::{dijkstra_find_path, SearchOptions};
pub use cost::{effective_cost, CongestionBand, CostContext, HourOfDay};
pub use history::{Command, CommandKind, EntryState, History, HistoryEntry};
pub use network::RouteNetwork;
pub use store::EdgeStore;
pub use trace::{Trace, TraceEvent};
pub use traversal::RouteProvider;
pub use types::{Edge, EdgeAttrs, PathCost, PathLeg, PathResult, RouteKey, SortKey};
