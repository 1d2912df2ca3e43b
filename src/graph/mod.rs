//! The navigation graph: every location linked to its K nearest neighbours.

#[doc(hidden)]
pub mod builder;
#[doc(hidden)]
pub mod cache;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use builder::GraphBuilder;
#[doc(inline)]
pub use cache::GraphCache;

use crate::geo::LocationId;

use indexmap::IndexMap;
use petgraph::prelude::DiGraphMap;
use petgraph::Direction;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

pub type Weight = f64;

pub type GraphStructure = DiGraphMap<LocationId, Weight, BuildHasherDefault<FxHasher>>;

/// A directed, weighted relation owned by its source location.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: LocationId,
    pub weight: Weight,
}

/// Directed adjacency over location ids.
///
/// Every catalogued location is a node, including those left without
/// outgoing edges. Outgoing edges iterate nearest-first.
pub struct Graph {
    pub(crate) graph: GraphStructure,
    pub(crate) neighbors: usize,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with Nodes: {}, Edges: {} (K = {})",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.neighbors
        )
    }
}

impl Graph {
    pub fn structure(&self) -> &GraphStructure {
        &self.graph
    }

    /// The neighbour count the graph was built with.
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        self.graph.contains_node(id)
    }

    /// Node ids, in the order they were added.
    pub fn nodes(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.graph.nodes()
    }

    /// The outgoing edges of `id`, nearest first. Empty for unknown ids.
    #[inline]
    pub fn edges(&self, id: LocationId) -> impl Iterator<Item = Edge> + '_ {
        self.graph
            .edges_directed(id, Direction::Outgoing)
            .map(|(_, to, weight)| Edge {
                to,
                weight: *weight,
            })
    }

    /// Materialises the graph as an ordered `id -> [edge]` mapping.
    pub fn adjacency(&self) -> IndexMap<LocationId, Vec<Edge>> {
        self.nodes()
            .map(|id| (id, self.edges(id).collect()))
            .collect()
    }
}
