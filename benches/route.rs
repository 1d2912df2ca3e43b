use criterion::{criterion_group, criterion_main, Criterion};
use routers_campus::{
    Catalog, GraphBuilder, Location, NeighborStrategy, RouteService, ShortestPath, StaticCatalog,
};
use std::hint::black_box;

/// A square lattice of `side * side` locations, spaced ten units apart.
fn lattice(side: u32) -> Vec<Location> {
    (0..side * side)
        .map(|i| {
            let (x, y) = ((i % side) as f64 * 10.0, (i / side) as f64 * 10.0);
            Location::new(i + 1, format!("lattice-{i}"), x, y)
        })
        .collect()
}

fn graph_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    group.significance_level(0.1).sample_size(30);

    let campus = StaticCatalog::campus();
    let square = lattice(20);

    for strategy in [NeighborStrategy::Exhaustive, NeighborStrategy::Indexed] {
        let builder = GraphBuilder::new(3).strategy(strategy);

        group.bench_function(format!("campus: {strategy}"), |b| {
            b.iter(|| black_box(builder.build(campus.locations())))
        });

        group.bench_function(format!("lattice 20x20: {strategy}"), |b| {
            b.iter(|| black_box(builder.build(&square)))
        });
    }

    group.finish();
}

fn route_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");
    group.significance_level(0.1).sample_size(30);

    let service = RouteService::campus();
    group.bench_function("campus: 1 -> 16", |b| {
        b.iter(|| black_box(service.get_route(1.into(), 16.into())))
    });

    let campus = StaticCatalog::campus();
    let graph = GraphBuilder::new(3).build(campus.locations());
    group.bench_function("campus: all pairs", |b| {
        b.iter(|| {
            for from in campus.locations() {
                for to in campus.locations() {
                    black_box(graph.shortest_path(from.id, to.id));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, graph_benchmark, route_benchmark);
criterion_main!(benches);
