use crate::geo::Location;
use crate::graph::{Graph, GraphBuilder};

use log::debug;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A read-through cache of built graphs, keyed on the neighbour count.
///
/// A cache is only valid for the catalog it was first queried with. Owners
/// must hold a single catalog for the lifetime of the cache.
#[derive(Debug, Default)]
pub struct GraphCache {
    graphs: Mutex<FxHashMap<usize, Arc<Graph>>>,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached graph for the builder's neighbour count, building
    /// and storing it on a miss.
    pub fn query(&self, builder: &GraphBuilder, locations: &[Location]) -> Arc<Graph> {
        let key = builder.neighbors();
        let mut graphs = self.graphs.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(graph) = graphs.get(&key) {
            return Arc::clone(graph);
        }

        debug!("Graph cache miss for K = {key}");
        let graph = Arc::new(builder.build(locations));
        graphs.insert(key, Arc::clone(&graph));

        graph
    }

    pub fn len(&self) -> usize {
        self.graphs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.graphs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
