use crate::geo::LocationId;
use crate::graph::{Graph, Weight};
use crate::solver::Solution;

use indexmap::IndexMap;
use log::debug;
use rustc_hash::FxHasher;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::BuildHasherDefault;
use std::time::Instant;
#[cfg(feature = "tracing")]
use tracing::Level;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

#[derive(Debug)]
struct SmallestHolder {
    cost: Weight,
    id: LocationId,
    index: usize,
}

impl PartialEq for SmallestHolder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SmallestHolder {}

impl PartialOrd for SmallestHolder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestHolder {
    /// Reversed, so the max-heap yields the cheapest entry. Equal costs
    /// yield the lowest location id, whatever order the catalog lists them in.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Search state of a single graph node.
#[derive(Debug, Copy, Clone)]
struct Tentative {
    distance: Weight,
    parent: Option<usize>,
    settled: bool,
}

impl Default for Tentative {
    fn default() -> Self {
        Self {
            distance: Weight::INFINITY,
            parent: None,
            settled: false,
        }
    }
}

/// Single-source shortest paths over non-negative edge weights.
///
/// Every node of the graph starts unsettled at infinite distance, except the
/// start at zero. Nodes are settled cheapest-first and never revisited; the
/// search ends as soon as the target is popped, or once nothing reachable
/// remains.
#[derive(Debug, Default, Copy, Clone)]
pub struct Dijkstra;

impl Dijkstra {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, graph), level = Level::INFO))]
    pub fn solve(&self, graph: &Graph, start: LocationId, end: LocationId) -> Option<Solution> {
        let start_time = Instant::now();

        let mut nodes: FxIndexMap<LocationId, Tentative> = graph
            .nodes()
            .map(|id| (id, Tentative::default()))
            .collect();

        let start_index = nodes.get_index_of(&start)?;
        let end_index = nodes.get_index_of(&end)?;

        nodes[start_index].distance = 0.0;

        let mut to_see: BinaryHeap<SmallestHolder> = BinaryHeap::with_capacity(nodes.len());
        to_see.push(SmallestHolder {
            cost: 0.0,
            id: start,
            index: start_index,
        });

        while let Some(SmallestHolder { cost, index, .. }) = to_see.pop() {
            let Some((id, state)) = nodes.get_index_mut(index) else {
                continue;
            };
            let current = *id;

            // Stale entry, superseded by a cheaper push
            if state.settled || cost > state.distance {
                continue;
            }

            if index == end_index {
                break;
            }

            state.settled = true;

            for edge in graph.edges(current) {
                let Some(target) = nodes.get_index_of(&edge.to) else {
                    debug!("Edge {current} -> {} leaves the graph, skipping", edge.to);
                    continue;
                };

                let next = &mut nodes[target];
                if next.settled {
                    continue;
                }

                let new_cost = cost + edge.weight;
                if new_cost < next.distance {
                    next.distance = new_cost;
                    next.parent = Some(index);
                    to_see.push(SmallestHolder {
                        cost: new_cost,
                        id: edge.to,
                        index: target,
                    });
                }
            }
        }

        let distance = nodes[end_index].distance;
        if distance.is_infinite() {
            debug!(
                "No path {start} -> {end}, searched in {:?}",
                start_time.elapsed()
            );
            return None;
        }

        let path = Self::path_builder(end_index, &nodes);
        debug!(
            "Solved {start} -> {end} over {} nodes in {:?}",
            path.len(),
            start_time.elapsed()
        );

        Some(Solution { path, distance })
    }

    /// Walks predecessors back from `target`, returning ids start-first.
    fn path_builder(target: usize, nodes: &FxIndexMap<LocationId, Tentative>) -> Vec<LocationId> {
        let mut rev = Vec::new();
        let mut next = Some(target);

        while let Some(index) = next {
            let Some((&id, state)) = nodes.get_index(index) else {
                break;
            };

            rev.push(id);
            next = state.parent;
        }

        rev.reverse();
        rev
    }
}
