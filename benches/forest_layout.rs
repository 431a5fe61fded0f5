use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use egui_dsviz::layouts::forest;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use std::hint::black_box;
use std::time::Duration;

/// `trees` binary trees of `per_tree` nodes each, plus one cyclic component
/// so both the level and the circle placement are exercised.
fn make_forest(trees: usize, per_tree: usize) -> StableGraph<(), ()> {
    let mut g: StableGraph<(), ()> = StableGraph::default();
    for _ in 0..trees {
        let base = g.node_count();
        for _ in 0..per_tree {
            g.add_node(());
        }
        for i in 1..per_tree {
            g.add_edge(NodeIndex::new(base + (i - 1) / 2), NodeIndex::new(base + i), ());
        }
    }
    let base = g.node_count();
    for _ in 0..per_tree {
        g.add_node(());
    }
    for i in 0..per_tree {
        g.add_edge(
            NodeIndex::new(base + i),
            NodeIndex::new(base + (i + 1) % per_tree),
            (),
        );
    }
    g
}

fn bench_forest(c: &mut Criterion) {
    let state = forest::State::default();
    let mut group = c.benchmark_group("forest_layout");
    group.sample_size(20);
    group.measurement_time(Duration::from_millis(600));
    group.warm_up_time(Duration::from_millis(200));

    group.bench_function("trees4_n15", |b| {
        b.iter_batched(
            || make_forest(4, 15),
            |g| {
                black_box(forest::layout(&g, &state));
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("trees50_n200", |b| {
        b.iter_batched(
            || make_forest(50, 200),
            |g| {
                black_box(forest::layout(&g, &state));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().configure_from_args();
    targets = bench_forest
}
criterion_main!(benches);
