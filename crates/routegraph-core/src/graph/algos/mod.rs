//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Congestion-aware least-cost path finding with a decision trace

pub mod dijkstra;

pub use dijkstra::{dijkstra_find_path, HeapEntry, SearchOptions};
