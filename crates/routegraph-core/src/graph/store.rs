//! Edge store: the live route topology
//!
//! Routes are kept in one map per origin, keyed by destination, so the
//! adjacency lookup and the duplicate check cannot disagree. Nodes are
//! tracked separately because they outlive their routes.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::EdgeError;
use crate::graph::types::{Edge, EdgeAttrs};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeStore {
    adjacency: BTreeMap<String, BTreeMap<String, EdgeAttrs>>,
    nodes: BTreeSet<String>,
}

impl EdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new route and register both endpoints as nodes
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        attrs: EdgeAttrs,
    ) -> Result<(), EdgeError> {
        validate(origin, destination, attrs)?;
        if self.has_edge(origin, destination) {
            return Err(EdgeError::already_exists(origin, destination));
        }

        self.adjacency
            .entry(origin.to_string())
            .or_default()
            .insert(destination.to_string(), attrs);
        self.nodes.insert(origin.to_string());
        self.nodes.insert(destination.to_string());
        Ok(())
    }

    /// Remove a route, returning the attributes it had
    pub fn remove_edge(&mut self, origin: &str, destination: &str) -> Result<EdgeAttrs, EdgeError> {
        let targets = self
            .adjacency
            .get_mut(origin)
            .ok_or_else(|| EdgeError::not_found(origin, destination))?;
        let removed = targets
            .remove(destination)
            .ok_or_else(|| EdgeError::not_found(origin, destination))?;

        if targets.is_empty() {
            self.adjacency.remove(origin);
        }
        Ok(removed)
    }

    /// Replace a route's attributes in place, returning the previous ones
    pub fn update_edge(
        &mut self,
        origin: &str,
        destination: &str,
        attrs: EdgeAttrs,
    ) -> Result<EdgeAttrs, EdgeError> {
        validate(origin, destination, attrs)?;
        let slot = self
            .adjacency
            .get_mut(origin)
            .and_then(|targets| targets.get_mut(destination))
            .ok_or_else(|| EdgeError::not_found(origin, destination))?;
        Ok(std::mem::replace(slot, attrs))
    }

    pub fn has_edge(&self, origin: &str, destination: &str) -> bool {
        self.edge(origin, destination).is_some()
    }

    pub fn edge(&self, origin: &str, destination: &str) -> Option<EdgeAttrs> {
        self.adjacency
            .get(origin)
            .and_then(|targets| targets.get(destination))
            .copied()
    }

    /// Outgoing routes of `origin`, ordered by destination
    pub fn edges_from(&self, origin: &str) -> Vec<Edge> {
        self.adjacency
            .get(origin)
            .map(|targets| {
                targets
                    .iter()
                    .map(|(destination, attrs)| Edge::new(origin, destination, *attrs))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every route, ordered by (origin, destination)
    pub fn all_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(origin, targets)| {
            targets
                .iter()
                .map(move |(destination, attrs)| Edge::new(origin, destination, *attrs))
        })
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

fn validate(origin: &str, destination: &str, attrs: EdgeAttrs) -> Result<(), EdgeError> {
    if attrs.is_valid() {
        Ok(())
    } else {
        Err(EdgeError::InvalidValue {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance: attrs.distance,
            base_cost: attrs.base_cost,
        })
    }
}
