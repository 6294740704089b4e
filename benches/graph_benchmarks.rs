use ccnetwork::algo::{breadth_first, connected, shortest_path};
use ccnetwork::graph::Graph;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Square grid with unit-ish weights; node id = row * side + col
fn grid(side: u64) -> Graph<u64> {
    let mut g = Graph::from_nodes(false, 0..side * side);
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                g.add_edge(id, id + 1, 1.0 + (id % 3) as f64).unwrap();
            }
            if row + 1 < side {
                g.add_edge(id, id + side, 1.0 + (id % 5) as f64).unwrap();
            }
        }
    }
    g
}

/// Benchmark node and edge insertion throughput
fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for side in [10u64, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, &side| {
            b.iter(|| criterion::black_box(grid(side)));
        });
    }
    group.finish();
}

/// Benchmark shortest path corner to corner
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for side in [10u64, 50, 100].iter() {
        let g = grid(*side);
        let target = side * side - 1;
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let path = shortest_path(&g, &0, &target).unwrap();
                criterion::black_box(path.len());
            });
        });
    }
    group.finish();
}

/// Benchmark reachability and bounded neighborhoods
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let g = grid(50);

    group.bench_function("connected", |b| {
        b.iter(|| criterion::black_box(connected(&g, &0, &2499).unwrap()));
    });

    for depth in [1i64, 3, 10].iter() {
        group.bench_with_input(BenchmarkId::new("breadth_first", depth), depth, |b, &depth| {
            b.iter(|| criterion::black_box(breadth_first(&g, &1275, depth).unwrap().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertion, bench_shortest_path, bench_traversal);
criterion_main!(benches);
