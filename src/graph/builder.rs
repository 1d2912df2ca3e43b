use crate::config::{NeighborStrategy, RouteConfig};
use crate::geo::{Location, LocationId};
use crate::graph::{Graph, GraphStructure, Weight};

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;
use rstar::RTree;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::time::Instant;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Relative slack applied to the K-th squared distance when walking the
/// R-tree, so candidates tied with the K-th neighbour are not cut off.
const TIE_SLACK: f64 = 1e-9;

type Neighbors = SmallVec<[(LocationId, Weight); 4]>;

/// Derives the navigation [Graph] from a catalog.
///
/// Each location receives an edge to each of its `neighbors` nearest
/// locations (never itself), weighted by Euclidean distance. Candidates at
/// equal distance keep their catalog order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GraphBuilder {
    neighbors: usize,
    strategy: NeighborStrategy,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        GraphBuilder::from_config(&RouteConfig::default())
    }
}

impl GraphBuilder {
    pub fn new(neighbors: usize) -> Self {
        Self {
            neighbors,
            strategy: NeighborStrategy::default(),
        }
    }

    pub fn from_config(config: &RouteConfig) -> Self {
        Self {
            neighbors: config.neighbors,
            strategy: config.strategy,
        }
    }

    pub fn strategy(self, strategy: NeighborStrategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn build(&self, locations: &[Location]) -> Graph {
        let start_time = Instant::now();

        let rows: Vec<Neighbors> = match self.strategy {
            NeighborStrategy::Exhaustive => locations
                .par_iter()
                .map(|location| self.exhaustive(location, locations))
                .collect(),
            NeighborStrategy::Indexed => {
                let positions = locations
                    .iter()
                    .enumerate()
                    .map(|(position, location)| (location.id, position))
                    .collect::<FxHashMap<_, _>>();
                let tree = RTree::bulk_load(locations.to_vec());

                locations
                    .par_iter()
                    .map(|location| self.indexed(location, &tree, &positions))
                    .collect()
            }
        };

        let mut graph = GraphStructure::with_capacity(
            locations.len(),
            locations.len() * self.neighbors.min(locations.len()),
        );

        for location in locations {
            graph.add_node(location.id);
        }

        for (location, row) in locations.iter().zip(rows) {
            for (to, weight) in row {
                graph.add_edge(location.id, to, weight);
            }
        }

        debug!(
            "Built graph of {} nodes and {} edges (K = {}, {}) in {:?}",
            graph.node_count(),
            graph.edge_count(),
            self.neighbors,
            self.strategy,
            start_time.elapsed()
        );

        Graph {
            graph,
            neighbors: self.neighbors,
        }
    }

    /// Measures the distance to every other location and keeps the nearest.
    fn exhaustive(&self, origin: &Location, locations: &[Location]) -> Neighbors {
        locations
            .iter()
            .filter(|other| other.id != origin.id)
            .map(|other| (other.id, origin.distance(other)))
            .sorted_by(|a, b| a.1.total_cmp(&b.1))
            .take(self.neighbors)
            .collect()
    }

    /// Walks the R-tree outward from `origin`, stopping once every candidate
    /// as near as the K-th neighbour has been seen.
    fn indexed(
        &self,
        origin: &Location,
        tree: &RTree<Location>,
        positions: &FxHashMap<LocationId, usize>,
    ) -> Neighbors {
        if self.neighbors == 0 {
            return Neighbors::new();
        }

        let mut candidates: SmallVec<[(usize, LocationId, Weight); 8]> = SmallVec::new();
        let mut bound: Option<f64> = None;

        for (other, distance_2) in tree.nearest_neighbor_iter_with_distance_2(&[origin.x, origin.y])
        {
            if other.id == origin.id {
                continue;
            }

            if let Some(bound) = bound {
                if distance_2 > bound * (1.0 + TIE_SLACK) {
                    break;
                }
            }

            let position = positions.get(&other.id).copied().unwrap_or(usize::MAX);
            candidates.push((position, other.id, origin.distance(other)));

            if bound.is_none() && candidates.len() == self.neighbors {
                bound = Some(distance_2);
            }
        }

        candidates.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));
        candidates
            .into_iter()
            .take(self.neighbors)
            .map(|(_, id, weight)| (id, weight))
            .collect()
    }
}
