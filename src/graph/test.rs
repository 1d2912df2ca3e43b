use crate::catalog::{Catalog, StaticCatalog};
use crate::config::NeighborStrategy;
use crate::geo::{Location, LocationId};
use crate::graph::{Graph, GraphBuilder, GraphCache};

use approx::assert_relative_eq;
use std::sync::Arc;

const STRATEGIES: [NeighborStrategy; 2] = [NeighborStrategy::Exhaustive, NeighborStrategy::Indexed];

fn campus() -> Vec<Location> {
    StaticCatalog::campus().locations().to_vec()
}

fn targets(graph: &Graph, id: u32) -> Vec<u32> {
    graph.edges(LocationId(id)).map(|edge| edge.to.0).collect()
}

#[test_log::test]
fn every_location_is_a_node_with_at_most_k_edges() {
    let locations = campus();

    for strategy in STRATEGIES {
        for k in 1..=6 {
            let graph = GraphBuilder::new(k).strategy(strategy).build(&locations);
            assert_eq!(graph.node_count(), locations.len());

            for location in &locations {
                assert!(graph.contains(location.id));

                let edges = graph.edges(location.id).collect::<Vec<_>>();
                assert_eq!(edges.len(), k, "{strategy} K={k} at {}", location.id);
                assert!(edges.iter().all(|edge| edge.to != location.id));
            }
        }
    }
}

#[test_log::test]
fn edges_are_nearest_first_and_weighted_by_distance() {
    let locations = campus();
    let graph = GraphBuilder::new(4).build(&locations);

    for location in &locations {
        let edges = graph.edges(location.id).collect::<Vec<_>>();
        assert!(edges.windows(2).all(|pair| pair[0].weight <= pair[1].weight));

        for edge in edges {
            let other = locations
                .iter()
                .find(|other| other.id == edge.to)
                .expect("edge target is catalogued");
            assert_relative_eq!(edge.weight, location.distance(other));
        }
    }
}

#[test_log::test]
fn campus_adjacency_with_three_neighbors() {
    let graph = GraphBuilder::new(3).build(&campus());

    let expected: [(u32, [u32; 3]); 16] = [
        (1, [2, 3, 4]),
        (2, [1, 3, 5]),
        (3, [4, 1, 2]),
        (4, [3, 15, 1]),
        (5, [6, 2, 4]),
        (6, [5, 9, 11]),
        (7, [8, 16, 15]),
        (8, [7, 14, 15]),
        (9, [10, 12, 11]),
        (10, [9, 12, 11]),
        (11, [13, 9, 12]),
        (12, [9, 13, 10]),
        (13, [12, 11, 9]),
        (14, [8, 7, 15]),
        (15, [4, 8, 7]),
        (16, [11, 7, 13]),
    ];

    for (id, neighbors) in expected {
        assert_eq!(targets(&graph, id), neighbors.to_vec(), "neighbors of {id}");
    }

    assert_eq!(graph.edge_count(), 48);
    assert_relative_eq!(
        graph.edges(LocationId(5)).next().map(|e| e.weight).unwrap_or_default(),
        35.0
    );
}

#[test_log::test]
fn edges_are_not_symmetric() {
    let graph = GraphBuilder::new(3).build(&campus());

    assert!(targets(&graph, 16).contains(&11));
    assert!(!targets(&graph, 11).contains(&16));
}

#[test_log::test]
fn neighbor_count_is_clamped_to_the_rest_of_the_catalog() {
    let locations = campus();

    for strategy in STRATEGIES {
        let graph = GraphBuilder::new(40).strategy(strategy).build(&locations);
        for location in &locations {
            assert_eq!(graph.edges(location.id).count(), locations.len() - 1);
        }
    }
}

#[test_log::test]
fn strategies_build_identical_graphs() {
    let locations = campus();

    for k in 0..=16 {
        let exhaustive = GraphBuilder::new(k)
            .strategy(NeighborStrategy::Exhaustive)
            .build(&locations);
        let indexed = GraphBuilder::new(k)
            .strategy(NeighborStrategy::Indexed)
            .build(&locations);

        assert_eq!(exhaustive.adjacency(), indexed.adjacency(), "K={k}");
    }
}

#[test_log::test]
fn equal_distances_keep_catalog_order() {
    // Four points equidistant from the origin, listed out of spatial order
    let locations = vec![
        Location::new(1, "origin", 0.0, 0.0),
        Location::new(2, "south", 0.0, -1.0),
        Location::new(3, "east", 1.0, 0.0),
        Location::new(4, "north", 0.0, 1.0),
        Location::new(5, "west", -1.0, 0.0),
    ];

    for strategy in STRATEGIES {
        let graph = GraphBuilder::new(2).strategy(strategy).build(&locations);
        assert_eq!(targets(&graph, 1), vec![2, 3], "{strategy}");
    }
}

#[test_log::test]
fn degenerate_catalogs() {
    for strategy in STRATEGIES {
        let empty = GraphBuilder::new(3).strategy(strategy).build(&[]);
        assert_eq!(empty.node_count(), 0);
        assert_eq!(empty.edge_count(), 0);

        let single = GraphBuilder::new(3)
            .strategy(strategy)
            .build(&[Location::new(1, "alone", 4.0, 2.0)]);
        assert_eq!(single.node_count(), 1);
        assert!(single.contains(LocationId(1)));
        assert_eq!(single.edges(LocationId(1)).count(), 0);
    }

    let edgeless = GraphBuilder::new(0).build(&campus());
    assert_eq!(edgeless.node_count(), 16);
    assert_eq!(edgeless.edge_count(), 0);
}

#[test]
fn unknown_ids_have_no_edges() {
    let graph = GraphBuilder::default().build(&campus());
    assert!(!graph.contains(LocationId(9999)));
    assert_eq!(graph.edges(LocationId(9999)).count(), 0);
}

#[test_log::test]
fn cache_reuses_graphs_per_neighbor_count() {
    let locations = campus();
    let cache = GraphCache::new();
    assert!(cache.is_empty());

    let first = cache.query(&GraphBuilder::new(3), &locations);
    let second = cache.query(
        &GraphBuilder::new(3).strategy(NeighborStrategy::Indexed),
        &locations,
    );
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    let denser = cache.query(&GraphBuilder::new(5), &locations);
    assert!(!Arc::ptr_eq(&first, &denser));
    assert_eq!(denser.neighbors(), 5);
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
}
