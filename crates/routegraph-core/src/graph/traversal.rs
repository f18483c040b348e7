use crate::graph::store::EdgeStore;
use crate::graph::types::Edge;

/// Trait for providing route adjacency to path algorithms
pub trait RouteProvider {
    fn get_outbound_edges(&self, node: &str) -> Vec<Edge>;
    fn contains_node(&self, node: &str) -> bool;
}

impl RouteProvider for EdgeStore {
    fn get_outbound_edges(&self, node: &str) -> Vec<Edge> {
        self.edges_from(node)
    }

    fn contains_node(&self, node: &str) -> bool {
        EdgeStore::contains_node(self, node)
    }
}
