use crate::geo::LocationId;
use crate::graph::Graph;
use crate::solver::{Dijkstra, ShortestPath, Solution};

use log::debug;

impl ShortestPath for Graph {
    fn shortest_path(&self, start: LocationId, end: LocationId) -> Option<Solution> {
        debug!("Routing {start} -> {end}");
        Dijkstra.solve(self, start, end)
    }
}
