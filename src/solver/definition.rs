use crate::geo::LocationId;
use crate::graph::Weight;

/// The raw outcome of a shortest-path search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Location ids from the start to the end, inclusive.
    pub path: Vec<LocationId>,
    /// The accumulated edge weight, unrounded.
    pub distance: Weight,
}

pub trait ShortestPath {
    /// Finds the minimum-weight path from `start` to `end`.
    ///
    /// Returns `None` when `end` cannot be reached, or when either id is
    /// absent from the graph.
    fn shortest_path(&self, start: LocationId, end: LocationId) -> Option<Solution>;
}
