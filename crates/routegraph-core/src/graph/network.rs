//! Route network facade
//!
//! `RouteNetwork` is the single entry point for callers. Mutations go through
//! the edge store and, only when they succeed, are recorded in the edit
//! history. Reads never touch the history.
//!
//! The network is a plain owned value. Callers sharing it across threads
//! must guard it with one exclusive lock so a mutation and its history
//! record stay atomic.

use std::collections::BTreeMap;

use crate::config::NetworkConfig;
use crate::error::{EdgeError, HistoryError, PathError};
use crate::graph::algos::{dijkstra_find_path, SearchOptions};
use crate::graph::cost::CostContext;
use crate::graph::history::{Command, History, HistoryEntry};
use crate::graph::store::EdgeStore;
use crate::graph::types::{Edge, EdgeAttrs, PathResult, RouteKey, SortKey};

#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    store: EdgeStore,
    history: History,
    max_settled: Option<usize>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &NetworkConfig) -> Self {
        Self {
            max_settled: config.search.max_settled,
            ..Self::default()
        }
    }

    pub fn add_route(
        &mut self,
        origin: &str,
        destination: &str,
        distance: f64,
        base_cost: f64,
    ) -> Result<(), EdgeError> {
        let after = EdgeAttrs::new(distance, base_cost);
        self.store.add_edge(origin, destination, after)?;
        self.history.record(Command::Add {
            key: RouteKey::new(origin, destination),
            after,
        });
        tracing::debug!(%origin, %destination, distance, base_cost, "route_added");
        Ok(())
    }

    pub fn remove_route(&mut self, origin: &str, destination: &str) -> Result<(), EdgeError> {
        let before = self.store.remove_edge(origin, destination)?;
        self.history.record(Command::Remove {
            key: RouteKey::new(origin, destination),
            before,
        });
        tracing::debug!(%origin, %destination, "route_removed");
        Ok(())
    }

    pub fn update_route(
        &mut self,
        origin: &str,
        destination: &str,
        distance: f64,
        base_cost: f64,
    ) -> Result<(), EdgeError> {
        let after = EdgeAttrs::new(distance, base_cost);
        let before = self.store.update_edge(origin, destination, after)?;
        self.history.record(Command::Update {
            key: RouteKey::new(origin, destination),
            before,
            after,
        });
        tracing::debug!(%origin, %destination, distance, base_cost, "route_updated");
        Ok(())
    }

    pub fn route_exists(&self, origin: &str, destination: &str) -> bool {
        self.store.has_edge(origin, destination)
    }

    /// Outgoing routes of `origin` sorted by `sort_key`, ties broken by
    /// destination. Empty when the origin is unknown or has no routes.
    pub fn list_routes(&self, origin: &str, sort_key: SortKey) -> Vec<Edge> {
        let mut routes = self.store.edges_from(origin);
        routes.sort_by(|a, b| {
            let primary = match sort_key {
                SortKey::Distance => a.distance.total_cmp(&b.distance),
                SortKey::Cost => a.base_cost.total_cmp(&b.base_cost),
            };
            primary.then_with(|| a.destination.cmp(&b.destination))
        });
        routes
    }

    /// Every origin with its outgoing routes, both ordered by name
    pub fn list_all(&self) -> BTreeMap<String, Vec<Edge>> {
        let mut all: BTreeMap<String, Vec<Edge>> = BTreeMap::new();
        for edge in self.store.all_edges() {
            all.entry(edge.origin.clone()).or_default().push(edge);
        }
        all
    }

    /// Least-cost path, optionally priced for a congestion hour (0-23)
    #[tracing::instrument(skip(self))]
    pub fn shortest_path(
        &self,
        source: &str,
        destination: &str,
        hour: Option<u8>,
    ) -> Result<PathResult, PathError> {
        let opts = SearchOptions {
            context: CostContext::from_hour(hour)?,
            max_settled: self.max_settled,
        };
        dijkstra_find_path(&self.store, source, destination, &opts)
    }

    /// Revert the most recent mutation, returning it
    pub fn undo(&mut self) -> Result<Command, HistoryError> {
        self.history.undo(&mut self.store)
    }

    /// Re-apply the most recently undone mutation, returning it
    pub fn redo(&mut self) -> Result<Command, HistoryError> {
        self.history.redo(&mut self.store)
    }

    /// Recorded mutations, newest first, each marked applied or undone
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn store(&self) -> &EdgeStore {
        &self.store
    }

    pub fn nodes(&self) -> Vec<String> {
        self.store.nodes().map(str::to_string).collect()
    }
}
